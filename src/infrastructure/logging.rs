use std::io::Write;

use env_logger::Builder;
use log::Record;
use serde_json::json;
use time::OffsetDateTime;
use time::macros::format_description;

/// Installs a JSON line logger filtered by `level` (e.g. `INFO`,
/// `debug`, `payments_intake=trace`).
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init(level: &str) {
	let _ = Builder::new()
		.parse_filters(level)
		.format(|buf, record| writeln!(buf, "{}", format_record(record)))
		.try_init();
}

pub fn format_record(record: &Record) -> String {
	let timestamp = OffsetDateTime::now_utc()
		.format(format_description!(
			"[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
		))
		.unwrap_or_default();

	json!({
		"timestamp": timestamp,
		"level": record.level().as_str(),
		"logger": record.target(),
		"message": record.args().to_string(),
	})
	.to_string()
}
