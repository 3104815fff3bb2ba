use std::sync::Arc;

use crate::domain::chat::entities::AssistantConfig;

/// Application service wiring every port together.
///
/// Each domain implements its service trait for this type in its own
/// `services.rs`.
pub struct Service<U, UC, MC, R, F, RL, G, L, HC> {
    pub(crate) user_repository: Arc<U>,
    pub(crate) user_condition_repository: Arc<UC>,
    pub(crate) medical_condition_repository: Arc<MC>,
    pub(crate) recipe_repository: Arc<R>,
    pub(crate) favorite_repository: Arc<F>,
    pub(crate) recommendation_log_repository: Arc<RL>,
    pub(crate) recipe_generator: Arc<G>,
    pub(crate) llm_client: Arc<L>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) assistant_config: AssistantConfig,
}

impl<U, UC, MC, R, F, RL, G, L, HC> Service<U, UC, MC, R, F, RL, G, L, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        user_condition_repository: UC,
        medical_condition_repository: MC,
        recipe_repository: R,
        favorite_repository: F,
        recommendation_log_repository: RL,
        recipe_generator: G,
        llm_client: Arc<L>,
        health_check_repository: HC,
        assistant_config: AssistantConfig,
    ) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
            user_condition_repository: Arc::new(user_condition_repository),
            medical_condition_repository: Arc::new(medical_condition_repository),
            recipe_repository: Arc::new(recipe_repository),
            favorite_repository: Arc::new(favorite_repository),
            recommendation_log_repository: Arc::new(recommendation_log_repository),
            recipe_generator: Arc::new(recipe_generator),
            llm_client,
            health_check_repository: Arc::new(health_check_repository),
            assistant_config,
        }
    }
}

impl<U, UC, MC, R, F, RL, G, L, HC> Clone for Service<U, UC, MC, R, F, RL, G, L, HC> {
    fn clone(&self) -> Self {
        Self {
            user_repository: self.user_repository.clone(),
            user_condition_repository: self.user_condition_repository.clone(),
            medical_condition_repository: self.medical_condition_repository.clone(),
            recipe_repository: self.recipe_repository.clone(),
            favorite_repository: self.favorite_repository.clone(),
            recommendation_log_repository: self.recommendation_log_repository.clone(),
            recipe_generator: self.recipe_generator.clone(),
            llm_client: self.llm_client.clone(),
            health_check_repository: self.health_check_repository.clone(),
            assistant_config: self.assistant_config.clone(),
        }
    }
}
