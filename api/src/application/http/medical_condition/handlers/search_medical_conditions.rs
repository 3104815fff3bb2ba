use axum::extract::{Query, State};
use nourish_core::domain::medical_condition::ports::MedicalConditionService;
use serde::Deserialize;
use utoipa::IntoParams;

use super::get_medical_conditions::MedicalConditionsResponse;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchConditionsQuery {
    /// Matched against name and description, case-insensitively.
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "medical-condition",
    summary = "Search medical conditions",
    params(SearchConditionsQuery),
    responses(
        (status = 200, body = MedicalConditionsResponse),
        (status = 400, body = ApiErrorResponse, description = "Search term missing")
    )
)]
pub async fn search_medical_conditions(
    Query(query): Query<SearchConditionsQuery>,
    State(state): State<AppState>,
) -> Result<Response<MedicalConditionsResponse>, ApiError> {
    let conditions = state
        .service
        .search_medical_conditions(query.q)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MedicalConditionsResponse {
        success: true,
        count: conditions.len(),
        conditions,
    }))
}
