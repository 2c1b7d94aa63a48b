use crate::domain::payment::{NewPayment, Payment, normalize_amount};
use crate::use_cases::SharedPaymentRepository;
use crate::use_cases::dto::CreatePaymentCommand;

#[derive(Clone)]
pub struct CreatePaymentUseCase {
	payment_repo: SharedPaymentRepository,
}

impl CreatePaymentUseCase {
	pub fn new(payment_repo: SharedPaymentRepository) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<Payment, Box<dyn std::error::Error + Send>> {
		let payment = NewPayment {
			order_id: command.order_id,
			amount:   normalize_amount(command.amount),
			currency: command.currency,
		};

		self.payment_repo.save(payment).await
	}
}
