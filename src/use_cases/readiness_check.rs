use crate::use_cases::SharedPaymentRepository;

/// Reports whether the payment store can serve requests.
#[derive(Clone)]
pub struct ReadinessCheckUseCase {
	payment_repo: SharedPaymentRepository,
}

impl ReadinessCheckUseCase {
	pub fn new(payment_repo: SharedPaymentRepository) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.payment_repo.ping().await
	}
}
