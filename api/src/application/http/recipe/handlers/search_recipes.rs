use axum::extract::{Query, State};
use nourish_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::SearchRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchRecipesQuery {
    /// Case-insensitive match on title or description.
    pub q: Option<String>,
    /// Comma-separated tags; a recipe must carry all of them. Overrides `q`.
    pub tags: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub success: bool,
    pub recipes: Vec<Recipe>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "recipe",
    summary = "Search recipes",
    description = "Searches by tags first, then by text. Without either, lists the newest recipes.",
    params(SearchRecipesQuery),
    responses(
        (status = 200, body = SearchRecipesResponse)
    )
)]
pub async fn search_recipes(
    Query(query): Query<SearchRecipesQuery>,
    State(state): State<AppState>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .search_recipes(SearchRecipesInput {
            query: query.q,
            tags: query.tags,
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse {
        success: true,
        count: recipes.len(),
        recipes,
    }))
}
