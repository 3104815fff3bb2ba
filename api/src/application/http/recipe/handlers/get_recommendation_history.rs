use axum::extract::{Path, Query, State};
use nourish_core::domain::recipe::{
    entities::RecommendationHistoryEntry, ports::RecipeService,
    value_objects::GetRecommendationHistoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendationHistoryResponse {
    pub success: bool,
    pub history: Vec<RecommendationHistoryEntry>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/recommendations/history/{user_id}",
    tag = "recipe",
    summary = "Get recommendation history",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        HistoryQuery
    ),
    responses(
        (status = 200, body = RecommendationHistoryResponse)
    )
)]
pub async fn get_recommendation_history(
    Path(user_id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> Result<Response<RecommendationHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_recommendation_history(GetRecommendationHistoryInput {
            user_id,
            limit: query.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendationHistoryResponse {
        success: true,
        count: history.len(),
        history,
    }))
}
