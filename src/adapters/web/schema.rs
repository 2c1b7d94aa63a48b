use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::payment::{
	Currency, MAX_AMOUNT, MAX_ORDER_ID_LENGTH, Payment, normalize_amount,
};
use crate::use_cases::dto::CreatePaymentCommand;

/// Incoming payment. `amount` must be a JSON number; numeric strings are
/// rejected at extraction time.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct PaymentRequest {
	#[validate(custom(function = "validate_order_id"))]
	pub order_id: String,
	#[serde(with = "rust_decimal::serde::float")]
	#[validate(custom(function = "validate_amount"))]
	pub amount:   Decimal,
	#[serde(default = "default_currency")]
	pub currency: String,
}

fn default_currency() -> String {
	Currency::default().to_string()
}

fn invalid(code: &'static str, message: String) -> ValidationError {
	ValidationError::new(code).with_message(Cow::Owned(message))
}

fn validate_order_id(order_id: &str) -> Result<(), ValidationError> {
	if order_id.trim().is_empty() {
		return Err(invalid("required", "order_id must not be empty".to_string()));
	}
	if order_id.chars().count() > MAX_ORDER_ID_LENGTH {
		return Err(invalid(
			"length",
			format!("order_id must be at most {MAX_ORDER_ID_LENGTH} characters"),
		));
	}
	Ok(())
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
	let amount = normalize_amount(*amount);
	if amount <= Decimal::ZERO {
		return Err(invalid(
			"greater_than",
			"amount must be greater than 0".to_string(),
		));
	}
	if amount > MAX_AMOUNT {
		return Err(invalid(
			"less_than_or_equal",
			format!("amount must be less than or equal to {MAX_AMOUNT}"),
		));
	}
	Ok(())
}

fn unsupported_currency() -> ValidationError {
	let allowed: Vec<&str> = Currency::ALL.iter().map(Currency::code).collect();
	invalid(
		"currency",
		format!("currency must be one of: {}", allowed.join(", ")),
	)
}

impl PaymentRequest {
	/// Validates every field and builds the command. All violations are
	/// collected, including an unsupported currency.
	pub fn into_command(self) -> Result<CreatePaymentCommand, ValidationErrors> {
		let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

		let currency = Currency::from_str(&self.currency);
		if currency.is_err() {
			errors.add("currency", unsupported_currency());
		}

		match currency {
			Ok(currency) if errors.errors().is_empty() => Ok(CreatePaymentCommand {
				order_id: self.order_id,
				amount: self.amount,
				currency,
			}),
			_ => Err(errors),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentResponse {
	pub id:         i64,
	pub order_id:   String,
	#[serde(with = "rust_decimal::serde::float")]
	pub amount:     Decimal,
	pub currency:   Currency,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

impl From<Payment> for PaymentResponse {
	fn from(payment: Payment) -> Self {
		Self {
			id:         payment.id,
			order_id:   payment.order_id,
			amount:     payment.amount,
			currency:   payment.currency,
			created_at: payment.created_at,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StatusResponse {
	pub status: String,
}

impl StatusResponse {
	pub fn new(status: &str) -> Self {
		Self {
			status: status.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use rust_decimal_macros::dec;

	use super::*;

	fn request(order_id: &str, amount: Decimal, currency: &str) -> PaymentRequest {
		PaymentRequest {
			order_id: order_id.to_string(),
			amount,
			currency: currency.to_string(),
		}
	}

	fn codes(request: PaymentRequest) -> Vec<(String, String)> {
		let errors = request.into_command().unwrap_err();
		let mut codes: Vec<(String, String)> = errors
			.field_errors()
			.into_iter()
			.flat_map(|(field, errs)| {
				let field = field.to_string();
				errs.iter().map(move |e| (field.clone(), e.code.to_string()))
			})
			.collect();
		codes.sort();
		codes
	}

	#[test]
	fn test_valid_request_passes() {
		assert!(request("ORD123", dec!(10.5), "USD").into_command().is_ok());
		assert!(request("x", dec!(0.01), "GBP").into_command().is_ok());
		assert!(request("ORD123", MAX_AMOUNT, "EUR").into_command().is_ok());
	}

	#[test]
	fn test_non_positive_amounts_are_rejected() {
		for amount in [dec!(0), dec!(-1), dec!(-0.01), dec!(0.004)] {
			assert_eq!(
				codes(request("ORD123", amount, "USD")),
				vec![("amount".to_string(), "greater_than".to_string())],
				"amount {amount} should be rejected"
			);
		}
	}

	#[test]
	fn test_amount_above_column_bounds_is_rejected() {
		assert_eq!(
			codes(request("ORD123", dec!(10000000000), "USD")),
			vec![("amount".to_string(), "less_than_or_equal".to_string())]
		);
	}

	#[test]
	fn test_blank_order_id_is_rejected() {
		for order_id in ["", "   "] {
			assert_eq!(
				codes(request(order_id, dec!(1), "USD")),
				vec![("order_id".to_string(), "required".to_string())]
			);
		}
	}

	#[test]
	fn test_long_order_id_is_rejected() {
		let order_id = "A".repeat(MAX_ORDER_ID_LENGTH + 1);
		assert_eq!(
			codes(request(&order_id, dec!(1), "USD")),
			vec![("order_id".to_string(), "length".to_string())]
		);
		assert!(
			request(&"A".repeat(MAX_ORDER_ID_LENGTH), dec!(1), "USD")
				.into_command()
				.is_ok()
		);
	}

	#[test]
	fn test_unknown_currency_is_rejected() {
		assert_eq!(
			codes(request("ORD123", dec!(1), "JPY")),
			vec![("currency".to_string(), "currency".to_string())]
		);
	}

	#[test]
	fn test_all_violations_are_reported() {
		assert_eq!(codes(request("", dec!(-5), "XXX")), vec![
			("amount".to_string(), "greater_than".to_string()),
			("currency".to_string(), "currency".to_string()),
			("order_id".to_string(), "required".to_string()),
		]);
	}

	#[test]
	fn test_currency_defaults_to_usd() {
		let request: PaymentRequest =
			serde_json::from_str(r#"{"order_id":"ORD123","amount":10.5}"#).unwrap();
		assert_eq!(request.currency, "USD");
		assert_eq!(request.amount, dec!(10.5));
	}

	#[test]
	fn test_amount_must_be_a_json_number() {
		let integer: PaymentRequest =
			serde_json::from_str(r#"{"order_id":"ORD123","amount":10}"#).unwrap();
		assert_eq!(integer.amount, dec!(10));

		let quoted =
			serde_json::from_str::<PaymentRequest>(r#"{"order_id":"ORD123","amount":"10.5"}"#);
		assert!(quoted.is_err());
	}

	#[test]
	fn test_into_command_parses_currency() {
		let command = request("ORD123", dec!(3), "EUR").into_command().unwrap();
		assert_eq!(command.currency, Currency::Eur);
		assert_eq!(command.order_id, "ORD123");
	}

	#[test]
	fn test_into_command_keeps_order_id_unchanged() {
		let command = request(" ORD1 ", dec!(3), "USD").into_command().unwrap();
		assert_eq!(command.order_id, " ORD1 ");
	}

	#[test]
	fn test_payment_response_serializes_amount_as_number() {
		let response = PaymentResponse {
			id:         1,
			order_id:   "ORD123".to_string(),
			amount:     dec!(10.50),
			currency:   Currency::Usd,
			created_at: OffsetDateTime::UNIX_EPOCH,
		};

		let json = serde_json::to_value(&response).unwrap();

		assert_eq!(json["amount"], serde_json::json!(10.5));
		assert_eq!(json["currency"], "USD");
		assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
	}
}
