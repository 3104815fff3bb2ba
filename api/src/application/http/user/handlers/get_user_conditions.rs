use axum::extract::{Path, State};
use nourish_core::domain::user::{entities::UserConditionDetail, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserConditionsResponse {
    pub success: bool,
    pub conditions: Vec<UserConditionDetail>,
}

#[utoipa::path(
    get,
    path = "/{user_id}/conditions",
    tag = "user",
    summary = "Get user conditions",
    description = "Lists the user's medical conditions with their catalog details, newest first.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetUserConditionsResponse)
    )
)]
pub async fn get_user_conditions(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetUserConditionsResponse>, ApiError> {
    let conditions = state
        .service
        .get_user_conditions(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserConditionsResponse {
        success: true,
        conditions,
    }))
}
