use axum::extract::{Query, State};
use nourish_core::domain::{
    nutrition::NutrientProfile, recipe::entities::Recipe,
    recommendation::ports::RecommendationService, user::entities::MatchedCondition,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{
    context::Ctx,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::parse_user_id,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GetRecommendationsQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetRecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<Recipe>,
    pub matched_conditions: Vec<MatchedCondition>,
    pub nutritional_needs: NutrientProfile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recommendation",
    summary = "Get recommendations",
    description = "Returns up to ten recipes that fit the nutrient needs derived from the user's medical conditions. New recipes are generated when the catalog has too few matches.",
    params(GetRecommendationsQuery),
    responses(
        (status = 200, body = GetRecommendationsResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing userId or the user has no medical conditions"),
        (status = 500, body = ApiErrorResponse, description = "Recipe generation failed")
    )
)]
pub async fn get_recommendations(
    Query(query): Query<GetRecommendationsQuery>,
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    let user_id = parse_user_id(query.user_id.as_deref())?;

    let set = state
        .service
        .get_recommendations(ctx, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecommendationsResponse {
        success: true,
        recommendations: set.recommendations,
        matched_conditions: set.matched_conditions,
        nutritional_needs: set.nutritional_needs,
    }))
}
