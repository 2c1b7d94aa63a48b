use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Largest amount that fits a NUMERIC(12, 2) column: 9_999_999_999.99.
pub const MAX_AMOUNT: Decimal =
	Decimal::from_parts(3_567_587_327, 232, 0, false, AMOUNT_SCALE);

/// Number of fractional digits kept for stored amounts.
pub const AMOUNT_SCALE: u32 = 2;

pub const MAX_ORDER_ID_LENGTH: usize = 64;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
	#[default]
	Usd,
	Eur,
	Gbp,
}

impl Currency {
	pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];

	pub fn code(&self) -> &'static str {
		match self {
			Currency::Usd => "USD",
			Currency::Eur => "EUR",
			Currency::Gbp => "GBP",
		}
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown currency: {}", self.0)
	}
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for Currency {
	type Err = UnknownCurrency;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Currency::ALL
			.into_iter()
			.find(|currency| currency.code() == s)
			.ok_or_else(|| UnknownCurrency(s.to_string()))
	}
}

/// Rounds an amount to the stored precision.
pub fn normalize_amount(amount: Decimal) -> Decimal {
	amount.round_dp(AMOUNT_SCALE)
}

/// A payment that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
	pub order_id: String,
	pub amount:   Decimal,
	pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
	pub id:         i64,
	pub order_id:   String,
	pub amount:     Decimal,
	pub currency:   Currency,
	pub created_at: OffsetDateTime,
}

impl Payment {
	pub fn from_new(id: i64, new_payment: NewPayment, created_at: OffsetDateTime) -> Self {
		Self {
			id,
			order_id: new_payment.order_id,
			amount: new_payment.amount,
			currency: new_payment.currency,
			created_at,
		}
	}
}
