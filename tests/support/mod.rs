#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use payments_intake::adapters::web::auth::ApiKeySettings;
use payments_intake::adapters::web::configure;
use payments_intake::domain::payment::{NewPayment, Payment};
use payments_intake::domain::repository::PaymentRepository;
use payments_intake::use_cases::SharedPaymentRepository;

pub mod redis_container;

pub const TEST_API_KEY: &str = "test-key";

/// Route setup used by the service, guarded by [`TEST_API_KEY`].
pub fn routes(
	payment_repo: SharedPaymentRepository,
) -> impl Fn(&mut web::ServiceConfig) + Clone {
	configure(payment_repo, ApiKeySettings::new(TEST_API_KEY))
}

/// Repository whose every call fails, as when the store goes away.
pub struct FailingPaymentRepository;

#[derive(Debug)]
struct StoreDown;

impl std::fmt::Display for StoreDown {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "store is down")
	}
}

impl std::error::Error for StoreDown {}

#[async_trait]
impl PaymentRepository for FailingPaymentRepository {
	async fn save(
		&self,
		_payment: NewPayment,
	) -> Result<Payment, Box<dyn std::error::Error + Send>> {
		Err(Box::new(StoreDown))
	}

	async fn find_by_id(
		&self,
		_id: i64,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>> {
		Err(Box::new(StoreDown))
	}

	async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		Err(Box::new(StoreDown))
	}
}

pub fn failing_repository() -> SharedPaymentRepository {
	Arc::new(FailingPaymentRepository)
}
