use std::sync::Arc;

use crate::domain::repository::PaymentRepository;

pub mod create_payment;
pub mod dto;
pub mod get_payment;
pub mod readiness_check;

pub type SharedPaymentRepository = Arc<dyn PaymentRepository>;
