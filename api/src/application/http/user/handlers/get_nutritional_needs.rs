use axum::extract::{Path, State};
use nourish_core::domain::{
    nutrition::NutrientProfile,
    user::{entities::MatchedCondition, ports::UserService},
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
#[serde(rename_all = "camelCase")]
pub struct NutritionalNeedsResponse {
    pub success: bool,
    pub conditions: Vec<MatchedCondition>,
    pub nutritional_needs: NutrientProfile,
}

#[utoipa::path(
    get,
    path = "/{user_id}/nutritional-needs",
    tag = "user",
    summary = "Get nutritional needs",
    description = "Merges the nutrient maps of the user's conditions, keeping the highest priority per nutrient.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = NutritionalNeedsResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_nutritional_needs(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<NutritionalNeedsResponse>, ApiError> {
    let needs = state
        .service
        .get_nutritional_needs(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NutritionalNeedsResponse {
        success: true,
        conditions: needs.conditions,
        nutritional_needs: needs.nutritional_needs,
    }))
}
