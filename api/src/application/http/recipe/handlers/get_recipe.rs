use axum::extract::{Path, Query, State};
use nourish_core::domain::recipe::{
    entities::RecipeDetail, ports::RecipeService, value_objects::GetRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::parse_optional_user_id,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GetRecipeQuery {
    /// When present, the response reports whether this user favorited the recipe.
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub success: bool,
    pub recipe: RecipeDetail,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
        GetRecipeQuery
    ),
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    Query(query): Query<GetRecipeQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let user_id = parse_optional_user_id(query.user_id.as_deref())?;

    let recipe = state
        .service
        .get_recipe(GetRecipeInput { recipe_id, user_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse {
        success: true,
        recipe,
    }))
}
