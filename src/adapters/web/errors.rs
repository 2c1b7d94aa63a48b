use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldError {
	pub field:   String,
	pub code:    String,
	pub message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
	#[serde(skip_serializing_if = "Option::is_none")]
	details:     Option<Vec<FieldError>>,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Invalid or missing API key")]
	Unauthorized,
	#[display("Request data is invalid.")]
	ValidationError(#[error(not(source))] Vec<FieldError>),
	#[display("Payment not found.")]
	NotFound,
	#[display("Database not ready")]
	StorageUnavailable,
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::Unauthorized => "Unauthorized".to_string(),
			ApiError::ValidationError(_) => "Unprocessable Entity".to_string(),
			ApiError::NotFound => "Not Found".to_string(),
			ApiError::StorageUnavailable => "Service Unavailable".to_string(),
			ApiError::InternalServerError => "Internal Server Error".to_string(),
		}
	}

	pub fn field_errors(&self) -> Option<&[FieldError]> {
		match self {
			ApiError::ValidationError(errors) => Some(errors),
			_ => None,
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
				details:     self.field_errors().map(<[FieldError]>::to_vec),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
			ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::NotFound => StatusCode::NOT_FOUND,
			ApiError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<ValidationErrors> for ApiError {
	fn from(errors: ValidationErrors) -> Self {
		let mut details: Vec<FieldError> = errors
			.field_errors()
			.into_iter()
			.flat_map(|(field, field_errors)| {
				let field = field.to_string();
				field_errors.iter().map(move |e| FieldError {
					field:   field.clone(),
					code:    e.code.to_string(),
					message: e
						.message
						.as_ref()
						.map(|m| m.to_string())
						.unwrap_or_else(|| format!("{field} is invalid")),
				})
			})
			.collect();
		details.sort_by(|a, b| a.field.cmp(&b.field).then(a.code.cmp(&b.code)));

		ApiError::ValidationError(details)
	}
}

impl From<JsonPayloadError> for ApiError {
	fn from(err: JsonPayloadError) -> Self {
		ApiError::ValidationError(vec![FieldError {
			field:   "body".to_string(),
			code:    "parse".to_string(),
			message: err.to_string(),
		}])
	}
}
