use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use log::{error, warn};

use crate::adapters::web::errors::ApiError;

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Secret callers must present in the `X-API-KEY` header.
#[derive(Clone)]
pub struct ApiKeySettings {
	expected: String,
}

impl ApiKeySettings {
	pub fn new(expected: impl Into<String>) -> Self {
		Self {
			expected: expected.into(),
		}
	}

	pub fn verify(&self, provided: Option<&str>) -> Result<(), ApiError> {
		match provided {
			Some(key) if !key.trim().is_empty() && key == self.expected => Ok(()),
			_ => Err(ApiError::Unauthorized),
		}
	}
}

/// Extractor proving the request carried a valid API key.
///
/// List it before any body extractor so that authentication is decided
/// before the payload is parsed.
#[derive(Debug)]
pub struct ApiKey;

impl FromRequest for ApiKey {
	type Error = ApiError;
	type Future = Ready<Result<Self, Self::Error>>;

	fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
		ready(authenticate(req))
	}
}

fn authenticate(req: &HttpRequest) -> Result<ApiKey, ApiError> {
	let Some(settings) = req.app_data::<web::Data<ApiKeySettings>>() else {
		error!("API key settings are not registered for {}", req.path());
		return Err(ApiError::InternalServerError);
	};

	let provided = req
		.headers()
		.get(API_KEY_HEADER)
		.and_then(|value| value.to_str().ok());

	settings.verify(provided).inspect_err(|_| {
		warn!("Rejected request to {}: invalid or missing API key", req.path());
	})?;

	Ok(ApiKey)
}
