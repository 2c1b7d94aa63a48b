use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use log::{info, warn};

use crate::adapters::web::auth::ApiKeySettings;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::logging;
use crate::infrastructure::persistence::in_memory_payment_repository::InMemoryPaymentRepository;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::use_cases::SharedPaymentRepository;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

const IN_MEMORY_URL_SCHEME: &str = "memory://";

/// Picks the payment store for `database_url`: `memory://` keeps payments in
/// process, anything else must be a Redis URL.
pub fn payment_repository(
	database_url: &str,
) -> std::io::Result<SharedPaymentRepository> {
	if database_url.starts_with(IN_MEMORY_URL_SCHEME) {
		warn!("Using in-memory payment storage; payments are lost on restart");
		return Ok(Arc::new(InMemoryPaymentRepository::new()));
	}

	let redis_client = redis::Client::open(database_url)
		.map_err(|e| std::io::Error::new(ErrorKind::InvalidInput, e))?;
	Ok(Arc::new(RedisPaymentRepository::new(redis_client)))
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	logging::init(&config.log_level);

	let payment_repo = payment_repository(&config.database_url)?;
	let routes = adapters::web::configure(
		payment_repo,
		ApiKeySettings::new(config.api_key.clone()),
	);

	info!(
		"service_started app={} env={} addr={}:{}",
		config.app_name, config.env, config.server_host, config.server_port
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.configure(routes.clone())
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
