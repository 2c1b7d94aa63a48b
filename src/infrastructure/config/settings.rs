use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub app_name:         String,
	pub env:              String,
	pub log_level:        String,
	pub api_key:          String,
	pub database_url:     String,
	pub server_host:      String,
	pub server_port:      u16,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_from(config::Environment::default())
	}

	pub fn load_from(
		environment: config::Environment,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("app_name", "payments-service")?
			.set_default("env", "development")?
			.set_default("log_level", "INFO")?
			.set_default("api_key", "dev-secret")?
			.set_default("database_url", "redis://127.0.0.1:6379/")?
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 8000)?
			.set_default("server_keepalive", 75)?
			.add_source(environment)
			.build()?;

		config_builder.try_deserialize()
	}
}
