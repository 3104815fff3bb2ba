use super::handlers::get_favorites::{__path_get_favorites, get_favorites};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recommendation_history::{
    __path_get_recommendation_history, get_recommendation_history,
};
use super::handlers::search_recipes::{__path_search_recipes, search_recipes};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, get_recipe, get_favorites, get_recommendation_history))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/recipes/search", root_path),
            get(search_recipes),
        )
        .route(
            &format!("{}/recipes/favorites/{{user_id}}", root_path),
            get(get_favorites),
        )
        .route(
            &format!("{}/recipes/recommendations/history/{{user_id}}", root_path),
            get(get_recommendation_history),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe),
        )
}
