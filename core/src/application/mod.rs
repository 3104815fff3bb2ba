use std::sync::Arc;

use tracing::info;

use crate::domain::{
    chat::entities::AssistantConfig,
    common::{NourishConfig, services::Service},
    generation::LlmRecipeGenerator,
};
use crate::infrastructure::{
    db::postgres::Postgres,
    health::PostgresHealthCheckRepository,
    llm::GeminiLLMClient,
    medical_condition::PostgresMedicalConditionRepository,
    recipe::{
        PostgresFavoriteRepository, PostgresRecipeRepository, PostgresRecommendationLogRepository,
    },
    user::{PostgresUserConditionRepository, PostgresUserRepository},
};

pub type NourishService = Service<
    PostgresUserRepository,
    PostgresUserConditionRepository,
    PostgresMedicalConditionRepository,
    PostgresRecipeRepository,
    PostgresFavoriteRepository,
    PostgresRecommendationLogRepository,
    LlmRecipeGenerator<GeminiLLMClient>,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, runs migrations and wires every adapter into the service.
pub async fn create_service(config: NourishConfig) -> Result<NourishService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let llm_client = Arc::new(GeminiLLMClient::new(config.llm.gemini_api_key.clone()));
    let recipe_generator = LlmRecipeGenerator::new(
        llm_client.clone(),
        config.llm.recipe_models.clone(),
        config.llm.max_attempts,
        config.llm.retry_delay,
    );

    info!(
        recipe_models = ?config.llm.recipe_models,
        chat_model = %config.llm.chat_model,
        "Recipe generation configured"
    );

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresUserConditionRepository::new(db.clone()),
        PostgresMedicalConditionRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresFavoriteRepository::new(db.clone()),
        PostgresRecommendationLogRepository::new(db.clone()),
        recipe_generator,
        llm_client,
        PostgresHealthCheckRepository::new(db),
        AssistantConfig {
            model: config.llm.chat_model,
            max_attempts: config.llm.max_attempts,
            retry_delay: config.llm.retry_delay,
        },
    ))
}
