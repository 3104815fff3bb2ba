use axum::extract::{Path, State};
use nourish_core::domain::recipe::{entities::FavoriteRecipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFavoritesResponse {
    pub success: bool,
    pub favorites: Vec<FavoriteRecipe>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/favorites/{user_id}",
    tag = "recipe",
    summary = "Get favorite recipes",
    description = "The user's favorited recipes, most recently favorited first.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetFavoritesResponse)
    )
)]
pub async fn get_favorites(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetFavoritesResponse>, ApiError> {
    let favorites = state
        .service
        .get_favorites(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFavoritesResponse {
        success: true,
        count: favorites.len(),
        favorites,
    }))
}
