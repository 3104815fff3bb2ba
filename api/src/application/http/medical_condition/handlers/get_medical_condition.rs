use axum::extract::{Path, State};
use nourish_core::domain::medical_condition::{
    entities::MedicalCondition, ports::MedicalConditionService,
};
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
pub struct MedicalConditionResponse {
    pub success: bool,
    pub condition: MedicalCondition,
}

#[utoipa::path(
    get,
    path = "/{condition_id}",
    tag = "medical-condition",
    summary = "Get medical condition",
    params(
        ("condition_id" = Uuid, Path, description = "Medical condition ID"),
    ),
    responses(
        (status = 200, body = MedicalConditionResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_medical_condition(
    Path(condition_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<MedicalConditionResponse>, ApiError> {
    let condition = state
        .service
        .get_medical_condition(condition_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MedicalConditionResponse {
        success: true,
        condition,
    }))
}
