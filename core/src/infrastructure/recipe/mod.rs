pub mod mappers;
pub mod repositories;

pub use repositories::{
    favorite_repository::PostgresFavoriteRepository, recipe_repository::PostgresRecipeRepository,
    recommendation_log_repository::PostgresRecommendationLogRepository,
};
