use rust_decimal::Decimal;

use crate::domain::payment::Currency;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentCommand {
	pub order_id: String,
	pub amount:   Decimal,
	pub currency: Currency,
}
