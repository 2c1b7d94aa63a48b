use async_trait::async_trait;

use crate::domain::payment::{NewPayment, Payment};

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	/// Stores the payment and returns it with its assigned id and timestamp.
	async fn save(
		&self,
		payment: NewPayment,
	) -> Result<Payment, Box<dyn std::error::Error + Send>>;
	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>>;
	/// Fails when the backing store cannot be reached.
	async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send>>;
}
