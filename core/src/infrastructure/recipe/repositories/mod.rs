pub mod favorite_repository;
pub mod recipe_repository;
pub mod recommendation_log_repository;
