use axum::extract::State;
use nourish_core::domain::medical_condition::{
    entities::MedicalCondition, ports::MedicalConditionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MedicalConditionsResponse {
    pub success: bool,
    pub conditions: Vec<MedicalCondition>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "medical-condition",
    summary = "List medical conditions",
    description = "The full condition catalog ordered by name.",
    responses(
        (status = 200, body = MedicalConditionsResponse)
    )
)]
pub async fn get_medical_conditions(
    State(state): State<AppState>,
) -> Result<Response<MedicalConditionsResponse>, ApiError> {
    let conditions = state
        .service
        .get_medical_conditions()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MedicalConditionsResponse {
        success: true,
        count: conditions.len(),
        conditions,
    }))
}
