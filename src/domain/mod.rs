pub mod payment;
pub mod repository;
