pub mod in_memory_payment_repository;
pub mod redis_payment_repository;
