use nourish_core::domain::{chat::entities::RecipeContext, generation::entities::ChatMessage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "messages are required"))]
    pub messages: Vec<ChatMessage>,

    #[serde(default)]
    pub recipe_context: Option<RecipeContext>,
}
