use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::domain::payment::{NewPayment, Payment};
use crate::domain::repository::PaymentRepository;

/// Process-local payment store. Ids start at 1 and follow insertion order.
#[derive(Default)]
pub struct InMemoryPaymentRepository {
	payments: RwLock<Vec<Payment>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.payments.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.payments.read().await.is_empty()
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn save(
		&self,
		payment: NewPayment,
	) -> Result<Payment, Box<dyn std::error::Error + Send>> {
		let mut payments = self.payments.write().await;
		let id = payments.len() as i64 + 1;
		let payment = Payment::from_new(id, payment, OffsetDateTime::now_utc());
		payments.push(payment.clone());
		Ok(payment)
	}

	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>> {
		let payments = self.payments.read().await;
		Ok(payments.iter().find(|payment| payment.id == id).cloned())
	}

	async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		Ok(())
	}
}
