use crate::domain::payment::Payment;
use crate::use_cases::SharedPaymentRepository;

#[derive(Clone)]
pub struct GetPaymentUseCase {
	payment_repo: SharedPaymentRepository,
}

impl GetPaymentUseCase {
	pub fn new(payment_repo: SharedPaymentRepository) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		id: i64,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>> {
		self.payment_repo.find_by_id(id).await
	}
}
