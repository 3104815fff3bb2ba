use axum::extract::{Path, State};
use nourish_core::domain::user::{ports::UserService, value_objects::UpdateUserInput};
use uuid::Uuid;

use super::create_user::UserResponse;
use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpdateUserValidator,
};

#[utoipa::path(
    put,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Updates the name and/or email. Omitted fields are left unchanged.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = UserResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse, description = "Email already in use")
    )
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .update_user(UpdateUserInput {
            user_id,
            name: payload.name,
            email: payload.email,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse {
        success: true,
        user,
    }))
}
