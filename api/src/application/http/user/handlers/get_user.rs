use axum::extract::{Path, State};
use nourish_core::domain::user::{entities::UserProfile, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    description = "Returns the user together with their medical conditions.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = UserProfileResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<UserProfileResponse>, ApiError> {
    let user = state
        .service
        .get_user_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserProfileResponse {
        success: true,
        user,
    }))
}
