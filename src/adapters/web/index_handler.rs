use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get};

const PAYMENT_FORM: &str = include_str!("../../../static/index.html");

/// Serves the manual payment form.
#[get("/")]
pub async fn index() -> impl Responder {
	HttpResponse::Ok()
		.content_type(ContentType::html())
		.body(PAYMENT_FORM)
}
