use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use log::error;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::StatusResponse;
use crate::use_cases::readiness_check::ReadinessCheckUseCase;

#[get("/health")]
pub async fn health() -> impl Responder {
	HttpResponse::Ok().json(StatusResponse::new("ok"))
}

#[get("/ready")]
pub async fn ready(
	readiness_check_use_case: web::Data<ReadinessCheckUseCase>,
) -> impl Responder {
	match readiness_check_use_case.execute().await {
		Ok(_) => HttpResponse::Ok().json(StatusResponse::new("ready")),
		Err(e) => {
			error!("readiness_check_failed: {e}");
			ApiError::StorageUnavailable.error_response()
		}
	}
}
