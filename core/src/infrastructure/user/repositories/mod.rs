pub mod user_condition_repository;
pub mod user_repository;
