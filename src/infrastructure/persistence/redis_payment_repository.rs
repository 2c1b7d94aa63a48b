use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::payment::{Currency, NewPayment, Payment};
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::redis::{PAYMENT_ID_SEQUENCE_KEY, payment_key};

#[derive(Debug)]
pub struct CorruptPaymentRecord {
	pub key:   String,
	pub field: &'static str,
}

impl std::fmt::Display for CorruptPaymentRecord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Payment record {} has a missing or invalid {}",
			self.key, self.field
		)
	}
}

impl std::error::Error for CorruptPaymentRecord {}

#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	fn payment_from_hash(
		id: i64,
		key: &str,
		map: &HashMap<String, String>,
	) -> Result<Payment, CorruptPaymentRecord> {
		let corrupt = |field| CorruptPaymentRecord {
			key: key.to_string(),
			field,
		};

		let order_id = map
			.get("order_id")
			.cloned()
			.ok_or_else(|| corrupt("order_id"))?;
		let amount = map
			.get("amount")
			.and_then(|s| Decimal::from_str(s).ok())
			.ok_or_else(|| corrupt("amount"))?;
		let currency = map
			.get("currency")
			.and_then(|s| Currency::from_str(s).ok())
			.ok_or_else(|| corrupt("currency"))?;
		let created_at = map
			.get("created_at")
			.and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
			.ok_or_else(|| corrupt("created_at"))?;

		Ok(Payment {
			id,
			order_id,
			amount,
			currency,
			created_at,
		})
	}
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn save(
		&self,
		payment: NewPayment,
	) -> Result<Payment, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let id: i64 = con
			.incr(PAYMENT_ID_SEQUENCE_KEY, 1)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let payment = Payment::from_new(id, payment, OffsetDateTime::now_utc());
		let created_at = payment
			.created_at
			.format(&Rfc3339)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		con.hset_multiple::<_, _, _, ()>(payment_key(id), &[
			("order_id", payment.order_id.clone()),
			("amount", payment.amount.to_string()),
			("currency", payment.currency.to_string()),
			("created_at", created_at),
		])
		.await
		.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		log::debug!("Stored payment under key: {}", payment_key(id));
		Ok(payment)
	}

	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let key = payment_key(id);
		let map: HashMap<String, String> = con
			.hgetall(&key)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		if map.is_empty() {
			return Ok(None);
		}

		Self::payment_from_hash(id, &key, &map)
			.map(Some)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}

	async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		redis::cmd("PING")
			.query_async::<String>(&mut con)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}
}
