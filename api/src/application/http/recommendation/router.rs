use super::handlers::{__path_get_recommendations, get_recommendations};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recommendations", state.args.server.root_path),
        get(get_recommendations),
    )
}
