use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use log::{error, info, warn};

use crate::adapters::web::auth::ApiKey;
use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{PaymentRequest, PaymentResponse};
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;

#[post("/payments")]
pub async fn payments(
	_api_key: ApiKey,
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<CreatePaymentUseCase>,
) -> impl Responder {
	let payload = payload.into_inner();
	let order_id = payload.order_id.clone();

	let command = match payload.into_command() {
		Ok(command) => command,
		Err(errors) => {
			warn!("Rejected payment for order {order_id:?}: {errors}");
			return ApiError::from(errors).error_response();
		}
	};

	match create_payment_use_case.execute(command).await {
		Ok(payment) => {
			info!(
				"Payment {} stored for order {}: {} {}",
				payment.id, payment.order_id, payment.amount, payment.currency
			);
			HttpResponse::Created().json(PaymentResponse::from(payment))
		}
		Err(e) => {
			error!("Error storing payment: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}

#[get("/payments/{id}")]
pub async fn payment_by_id(
	_api_key: ApiKey,
	id: web::Path<i64>,
	get_payment_use_case: web::Data<GetPaymentUseCase>,
) -> impl Responder {
	let id = id.into_inner();

	match get_payment_use_case.execute(id).await {
		Ok(Some(payment)) => HttpResponse::Ok().json(PaymentResponse::from(payment)),
		Ok(None) => ApiError::NotFound.error_response(),
		Err(e) => {
			error!("Error loading payment {id}: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}
