use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::{LLMClient, RecipeGenerator},
    health::ports::HealthCheckRepository,
    medical_condition::{
        entities::MedicalCondition,
        ports::{MedicalConditionRepository, MedicalConditionService},
    },
    recipe::ports::{FavoriteRepository, RecipeRepository, RecommendationLogRepository},
    user::ports::{UserConditionRepository, UserRepository},
};

impl<U, UC, MC, R, F, RL, G, L, HC> MedicalConditionService
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
    async fn get_medical_conditions(&self) -> Result<Vec<MedicalCondition>, CoreError> {
        self.medical_condition_repository.fetch_all().await
    }

    async fn search_medical_conditions(
        &self,
        term: Option<String>,
    ) -> Result<Vec<MedicalCondition>, CoreError> {
        let term = term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoreError::Validation("Search term is required".to_string()))?;

        self.medical_condition_repository.search(term).await
    }

    async fn get_medical_condition(
        &self,
        condition_id: Uuid,
    ) -> Result<MedicalCondition, CoreError> {
        self.medical_condition_repository
            .get_by_id(condition_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Medical condition not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        nutrition::NutrientPriority,
        testing::{FakeGenerator, InMemoryDb, new_id, service},
    };

    fn catalog() -> InMemoryDb {
        let db = InMemoryDb::new();
        db.seed_condition("Hypertension", &[("sodium", NutrientPriority::Low)]);
        db.seed_condition("Diabetes", &[("sugar", NutrientPriority::Low)]);
        db
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let db = catalog();
        let svc = service(&db, FakeGenerator::returning(vec![]), Arc::default());

        let names: Vec<_> = svc
            .get_medical_conditions()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Diabetes", "Hypertension"]);
    }

    #[tokio::test]
    async fn test_search_requires_term() {
        let svc = service(&catalog(), FakeGenerator::returning(vec![]), Arc::default());

        let err = svc
            .search_medical_conditions(Some("   ".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let svc = service(&catalog(), FakeGenerator::returning(vec![]), Arc::default());

        let found = svc
            .search_medical_conditions(Some("TENSION".to_string()))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Hypertension");
    }

    #[tokio::test]
    async fn test_unknown_condition_is_not_found() {
        let svc = service(&catalog(), FakeGenerator::returning(vec![]), Arc::default());

        let err = svc.get_medical_condition(new_id()).await.unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
