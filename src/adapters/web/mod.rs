use actix_web::web;

use crate::adapters::web::auth::ApiKeySettings;
use crate::adapters::web::errors::ApiError;
use crate::use_cases::SharedPaymentRepository;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::readiness_check::ReadinessCheckUseCase;

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod health_handler;
pub mod index_handler;
pub mod payments_handler;
pub mod schema;

/// JSON extraction failures are reported as validation errors.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default()
		.error_handler(|err, _req| ApiError::from(err).into())
}

/// Path segments that do not parse (e.g. a non-numeric payment id) name no
/// resource.
pub fn path_config() -> web::PathConfig {
	web::PathConfig::default().error_handler(|_err, _req| ApiError::NotFound.into())
}

/// Registers shared state and every route of the service.
pub fn configure(
	payment_repo: SharedPaymentRepository,
	api_key: ApiKeySettings,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
	move |cfg: &mut web::ServiceConfig| {
		cfg.app_data(json_config())
			.app_data(path_config())
			.app_data(web::Data::new(api_key.clone()))
			.app_data(web::Data::new(CreatePaymentUseCase::new(
				payment_repo.clone(),
			)))
			.app_data(web::Data::new(GetPaymentUseCase::new(payment_repo.clone())))
			.app_data(web::Data::new(ReadinessCheckUseCase::new(
				payment_repo.clone(),
			)))
			.service(handlers::index)
			.service(handlers::health)
			.service(handlers::ready)
			.service(handlers::payments)
			.service(handlers::payment_by_id);
	}
}
