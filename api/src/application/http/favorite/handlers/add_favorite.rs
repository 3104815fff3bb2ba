use axum::extract::State;
use nourish_core::domain::recipe::{
    entities::Favorite, ports::RecipeService, value_objects::FavoriteInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    favorite::validators::AddFavoriteValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddFavoriteResponse {
    pub success: bool,
    pub favorite: Favorite,
}

#[utoipa::path(
    post,
    path = "",
    tag = "favorite",
    summary = "Favorite a recipe",
    description = "Idempotent: favoriting the same recipe again returns the existing favorite.",
    request_body = AddFavoriteValidator,
    responses(
        (status = 201, body = AddFavoriteResponse),
        (status = 400, body = ApiErrorResponse, description = "userId or recipeId missing"),
        (status = 404, body = ApiErrorResponse, description = "Recipe not found")
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddFavoriteValidator>,
) -> Result<Response<AddFavoriteResponse>, ApiError> {
    let favorite = state
        .service
        .add_favorite(FavoriteInput {
            user_id: payload.user_id,
            recipe_id: payload.recipe_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddFavoriteResponse {
        success: true,
        favorite,
    }))
}
