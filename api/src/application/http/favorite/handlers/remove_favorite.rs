use axum::extract::{Path, State};
use nourish_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
    user::handlers::remove_user_condition::MessageResponse,
};

#[utoipa::path(
    delete,
    path = "/{user_id}/{recipe_id}",
    tag = "favorite",
    summary = "Unfavorite a recipe",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, body = ApiErrorResponse, description = "Recipe was not favorited")
    )
)]
pub async fn remove_favorite(
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .remove_favorite(user_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse {
        success: true,
        message: "Recipe removed from favorites".to_string(),
    }))
}
