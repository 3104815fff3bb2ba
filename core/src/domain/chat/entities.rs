use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::generation::entities::ChatMessage;

/// The recipe the user is cooking while asking questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeContext {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub ingredients: Option<serde_json::Value>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct CookingAssistanceInput {
    pub messages: Vec<ChatMessage>,
    pub recipe_context: Option<RecipeContext>,
}

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub model: String,
    pub max_attempts: u32,
    pub retry_delay: std::time::Duration,
}
