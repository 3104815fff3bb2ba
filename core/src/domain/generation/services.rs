use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::{
    common::{context::RequestContext, entities::app_errors::CoreError},
    generation::{
        entities::GenerationRequest,
        helpers::{build_recipe_prompt, parse_recipe_drafts},
        ports::{LLMClient, RecipeGenerator},
        schema::get_recipe_schema,
    },
    recipe::entities::RecipeDraft,
};

/// Recipe generator backed by an LLM, walking a chain of models.
///
/// Each model gets `max_attempts` calls. Rate limits back off and retry the
/// same model; exhausted attempts or unusable output move on to the next
/// model; any other backend error ends generation immediately.
pub struct LlmRecipeGenerator<L: LLMClient> {
    llm_client: Arc<L>,
    models: Vec<String>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<L: LLMClient> Clone for LlmRecipeGenerator<L> {
    fn clone(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
            models: self.models.clone(),
            max_attempts: self.max_attempts,
            retry_delay: self.retry_delay,
        }
    }
}

impl<L: LLMClient> LlmRecipeGenerator<L> {
    pub fn new(
        llm_client: Arc<L>,
        models: Vec<String>,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> Self {
        Self {
            llm_client,
            models,
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }
}

impl<L: LLMClient> RecipeGenerator for LlmRecipeGenerator<L> {
    async fn generate(
        &self,
        ctx: RequestContext,
        request: GenerationRequest,
    ) -> Result<Vec<RecipeDraft>, CoreError> {
        if self.models.is_empty() {
            return Err(CoreError::GenerationFailure(
                "no recipe models configured".to_string(),
            ));
        }

        let prompt = build_recipe_prompt(&request);
        let schema = get_recipe_schema();
        let mut last_error: Option<CoreError> = None;

        for model in &self.models {
            for attempt in 1..=self.max_attempts {
                let response = self
                    .llm_client
                    .generate_with_text(model.clone(), prompt.clone(), schema.clone())
                    .await;

                match response {
                    Ok(raw) => match parse_recipe_drafts(&raw, request.count) {
                        Ok(drafts) => {
                            info!(
                                trace_id = %ctx.trace_id,
                                model = %model,
                                count = drafts.len(),
                                "Generated recipes"
                            );
                            return Ok(drafts);
                        }
                        Err(e) => {
                            warn!(
                                trace_id = %ctx.trace_id,
                                model = %model,
                                "Unusable recipe output: {}", e
                            );
                            last_error = Some(e);
                            break;
                        }
                    },
                    Err(e) if e.is_retryable() => {
                        warn!(
                            trace_id = %ctx.trace_id,
                            model = %model,
                            attempt,
                            "Recipe model rate limited: {}", e
                        );
                        last_error = Some(e);
                        if attempt < self.max_attempts {
                            tokio::time::sleep(self.retry_delay * attempt).await;
                        }
                    }
                    Err(e) => {
                        error!(
                            trace_id = %ctx.trace_id,
                            model = %model,
                            "Recipe generation aborted: {}", e
                        );
                        return Err(CoreError::GenerationFailure(e.to_string()));
                    }
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no model produced recipes".to_string());
        error!(trace_id = %ctx.trace_id, "All recipe models exhausted: {}", reason);

        Err(CoreError::GenerationFailure(format!(
            "all models exhausted: {}",
            reason
        )))
    }
}
