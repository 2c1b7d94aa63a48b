pub const PAYMENT_ID_SEQUENCE_KEY: &str = "payments:id_seq";

pub fn payment_key(id: i64) -> String {
	format!("payment:{id}")
}
