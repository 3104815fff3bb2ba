use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::{LLMClient, RecipeGenerator},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    medical_condition::ports::MedicalConditionRepository,
    recipe::ports::{FavoriteRepository, RecipeRepository, RecommendationLogRepository},
    user::ports::{UserConditionRepository, UserRepository},
};

impl<U, UC, MC, R, F, RL, G, L, HC> HealthCheckService for Service<U, UC, MC, R, F, RL, G, L, HC>
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
