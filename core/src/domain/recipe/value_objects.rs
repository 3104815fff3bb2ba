use uuid::Uuid;

/// Result cap for tag-based catalog lookups.
pub const TAG_MATCH_LIMIT: u64 = 20;
pub const DEFAULT_SEARCH_LIMIT: u64 = 20;
pub const MAX_SEARCH_LIMIT: u64 = 100;
pub const DEFAULT_HISTORY_LIMIT: u64 = 20;

#[derive(Debug, Clone, Default)]
pub struct SearchRecipesInput {
    pub query: Option<String>,
    /// Comma-separated; takes precedence over `query`.
    pub tags: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl SearchRecipesInput {
    pub fn limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT)
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

pub struct GetRecipeInput {
    pub recipe_id: Uuid,
    pub user_id: Option<Uuid>,
}

pub struct FavoriteInput {
    pub user_id: Option<Uuid>,
    pub recipe_id: Option<Uuid>,
}

pub struct GetRecommendationHistoryInput {
    pub user_id: Uuid,
    pub limit: Option<u64>,
}
