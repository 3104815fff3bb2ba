use axum::extract::{Path, State};
use nourish_core::domain::user::{ports::UserService, value_objects::RemoveUserConditionInput};
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
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{user_id}/conditions/{condition_id}",
    tag = "user",
    summary = "Remove medical condition",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("condition_id" = Uuid, Path, description = "Medical condition ID"),
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, body = ApiErrorResponse, description = "The user does not have this condition")
    )
)]
pub async fn remove_user_condition(
    Path((user_id, condition_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .remove_medical_condition(RemoveUserConditionInput {
            user_id,
            condition_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse {
        success: true,
        message: "Medical condition removed".to_string(),
    }))
}
