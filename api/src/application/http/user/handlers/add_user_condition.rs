use axum::extract::{Path, State};
use nourish_core::domain::user::{
    entities::UserCondition, ports::UserService, value_objects::AddUserConditionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::AddConditionValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddUserConditionResponse {
    pub success: bool,
    pub condition: UserCondition,
}

#[utoipa::path(
    post,
    path = "/{user_id}/conditions",
    tag = "user",
    summary = "Add medical condition",
    description = "Attaches a catalog condition to the user. Severity defaults to moderate and the diagnosis date to today.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    request_body = AddConditionValidator,
    responses(
        (status = 201, body = AddUserConditionResponse),
        (status = 400, body = ApiErrorResponse, description = "conditionId missing"),
        (status = 404, body = ApiErrorResponse, description = "Unknown user or condition"),
        (status = 409, body = ApiErrorResponse, description = "User already has this condition")
    )
)]
pub async fn add_user_condition(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddConditionValidator>,
) -> Result<Response<AddUserConditionResponse>, ApiError> {
    let condition = state
        .service
        .add_medical_condition(AddUserConditionInput {
            user_id,
            condition_id: payload.condition_id,
            severity: payload.severity,
            diagnosed_at: payload.diagnosed_at,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddUserConditionResponse {
        success: true,
        condition,
    }))
}
