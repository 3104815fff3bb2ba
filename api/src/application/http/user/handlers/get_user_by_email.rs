use axum::extract::{Path, State};
use nourish_core::domain::user::ports::UserService;

use super::create_user::UserResponse;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/email/{email}",
    tag = "user",
    summary = "Get user by email",
    params(
        ("email" = String, Path, description = "Email address"),
    ),
    responses(
        (status = 200, body = UserResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_user_by_email(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .get_user_by_email(email)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse {
        success: true,
        user,
    }))
}
