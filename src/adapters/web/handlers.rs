pub use crate::adapters::web::health_handler::{health, ready};
pub use crate::adapters::web::index_handler::index;
pub use crate::adapters::web::payments_handler::{payment_by_id, payments};
