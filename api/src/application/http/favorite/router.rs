use super::handlers::add_favorite::{__path_add_favorite, add_favorite};
use super::handlers::remove_favorite::{__path_remove_favorite, remove_favorite};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(add_favorite, remove_favorite))]
pub struct FavoriteApiDoc;

pub fn favorite_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/favorites", root_path), post(add_favorite))
        .route(
            &format!("{}/favorites/{{user_id}}/{{recipe_id}}", root_path),
            delete(remove_favorite),
        )
}
