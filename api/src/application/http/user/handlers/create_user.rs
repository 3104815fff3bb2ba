use axum::extract::State;
use nourish_core::domain::user::{
    entities::User, ports::UserService, value_objects::CreateUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::CreateUserValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = UserResponse),
        (status = 400, body = ApiErrorResponse, description = "Email or name missing"),
        (status = 409, body = ApiErrorResponse, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .create_user(CreateUserInput {
            email: payload.email,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UserResponse {
        success: true,
        user,
    }))
}
