use std::future::Future;

use crate::domain::{
    common::{context::RequestContext, entities::app_errors::CoreError},
    generation::entities::{ChatMessage, GenerationRequest},
    recipe::entities::RecipeDraft,
};

/// Text-generation backend.
///
/// Rate-limit responses must surface as `CoreError::RateLimited` so callers
/// can tell them apart from terminal failures.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        model: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn chat(
        &self,
        model: String,
        system_instruction: String,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Produces recipe drafts for a nutrient profile. Returns at most
/// `request.count` drafts or a terminal `GenerationFailure`.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGenerator: Send + Sync {
    fn generate(
        &self,
        ctx: RequestContext,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<Vec<RecipeDraft>, CoreError>> + Send;
}
