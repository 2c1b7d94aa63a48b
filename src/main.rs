use std::sync::Arc;

use payments_intake::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		payments_intake::infrastructure::config::settings::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
