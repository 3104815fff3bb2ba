use tracing::{error, info, warn};

use crate::domain::{
    chat::{
        entities::CookingAssistanceInput,
        helpers::{build_system_instruction, validate_assistance_input},
        ports::CookingAssistantService,
    },
    common::{context::RequestContext, entities::app_errors::CoreError, services::Service},
    generation::{
        entities::ChatMessage,
        ports::{LLMClient, RecipeGenerator},
    },
    health::ports::HealthCheckRepository,
    medical_condition::ports::MedicalConditionRepository,
    recipe::ports::{FavoriteRepository, RecipeRepository, RecommendationLogRepository},
    user::ports::{UserConditionRepository, UserRepository},
};

impl<U, UC, MC, R, F, RL, G, L, HC> CookingAssistantService
    for Service<U, UC, MC, R, F, RL, G, L, HC>
where
    U: UserRepository,
    UC: UserConditionRepository,
    MC: MedicalConditionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    RL: RecommendationLogRepository,
    G: RecipeGenerator,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_cooking_assistance(
        &self,
        ctx: RequestContext,
        input: CookingAssistanceInput,
    ) -> Result<ChatMessage, CoreError> {
        let title = validate_assistance_input(&input)?.to_string();
        let system_instruction =
            build_system_instruction(input.recipe_context.as_ref().unwrap_or(&Default::default()));

        let config = &self.assistant_config;
        let max_attempts = config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let response = self
                .llm_client
                .chat(
                    config.model.clone(),
                    system_instruction.clone(),
                    input.messages.clone(),
                )
                .await;

            match response {
                Ok(content) => {
                    info!(
                        trace_id = %ctx.trace_id,
                        recipe = %title,
                        attempt,
                        "Cooking assistant answered"
                    );
                    return Ok(ChatMessage::assistant(content));
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        trace_id = %ctx.trace_id,
                        attempt,
                        "Cooking assistant rate limited, retrying: {}", e
                    );
                    tokio::time::sleep(config.retry_delay).await;
                }
                Err(e) => {
                    error!(trace_id = %ctx.trace_id, "Cooking assistant failed: {}", e);
                    return Err(match e {
                        CoreError::ExternalServiceError(_) => e,
                        other => CoreError::ExternalServiceError(other.to_string()),
                    });
                }
            }
        }

        Err(CoreError::ExternalServiceError(
            "Failed to get cooking assistance".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        chat::entities::RecipeContext,
        testing::{FakeGenerator, InMemoryDb, ScriptedLlm, service},
    };

    fn input(messages: Vec<ChatMessage>) -> CookingAssistanceInput {
        CookingAssistanceInput {
            messages,
            recipe_context: Some(RecipeContext {
                title: Some("Lentil Soup".to_string()),
                ..Default::default()
            }),
        }
    }

    fn rate_limited() -> Result<String, CoreError> {
        Err(CoreError::RateLimited("429".to_string()))
    }

    #[tokio::test]
    async fn test_answer_is_assistant_message() {
        let llm = Arc::new(ScriptedLlm::new(vec![Ok("Simmer 25 minutes.".to_string())]));
        let svc = service(&InMemoryDb::new(), FakeGenerator::returning(vec![]), llm.clone());

        let reply = svc
            .get_cooking_assistance(
                RequestContext::default(),
                input(vec![ChatMessage::user("How long?")]),
            )
            .await
            .unwrap();

        assert_eq!(reply, ChatMessage::assistant("Simmer 25 minutes."));
        assert_eq!(llm.calls(), vec!["chat-model"]);
    }

    #[tokio::test]
    async fn test_rate_limit_is_retried() {
        let llm = Arc::new(ScriptedLlm::new(vec![
            rate_limited(),
            rate_limited(),
            Ok("Use less salt.".to_string()),
        ]));
        let svc = service(&InMemoryDb::new(), FakeGenerator::returning(vec![]), llm.clone());

        let reply = svc
            .get_cooking_assistance(
                RequestContext::default(),
                input(vec![ChatMessage::user("Too salty?")]),
            )
            .await
            .unwrap();

        assert_eq!(reply.content, "Use less salt.");
        assert_eq!(llm.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_retries_are_external_failure() {
        let llm = Arc::new(ScriptedLlm::new(vec![
            rate_limited(),
            rate_limited(),
            rate_limited(),
        ]));
        let svc = service(&InMemoryDb::new(), FakeGenerator::returning(vec![]), llm.clone());

        let err = svc
            .get_cooking_assistance(
                RequestContext::default(),
                input(vec![ChatMessage::user("Help")]),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
        assert_eq!(llm.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_conversation_never_reaches_model() {
        let llm = Arc::new(ScriptedLlm::default());
        let svc = service(&InMemoryDb::new(), FakeGenerator::returning(vec![]), llm.clone());

        let err = svc
            .get_cooking_assistance(
                RequestContext::default(),
                input(vec![ChatMessage::assistant("Hello")]),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(llm.calls().is_empty());
    }
}
