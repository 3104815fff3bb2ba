pub mod get_favorites;
pub mod get_recipe;
pub mod get_recommendation_history;
pub mod search_recipes;
