use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::{LLMClient, RecipeGenerator},
    health::ports::HealthCheckRepository,
    medical_condition::ports::MedicalConditionRepository,
    nutrition::compute_needs,
    recipe::ports::{FavoriteRepository, RecipeRepository, RecommendationLogRepository},
    user::{
        entities::{
            MatchedCondition, NutritionalNeeds, User, UserCondition, UserConditionDetail,
            UserProfile,
        },
        ports::{UserConditionRepository, UserRepository, UserService},
        value_objects::{
            AddUserConditionInput, CreateUserInput, RemoveUserConditionInput, UpdateUserInput,
        },
    },
};

/// Resolves a user's conditions and merges their nutrient maps.
///
/// A user without conditions yields an empty profile; callers decide whether
/// that is an error.
pub(crate) async fn load_nutritional_needs<UC: UserConditionRepository>(
    repository: &UC,
    user_id: Uuid,
) -> Result<NutritionalNeeds, CoreError> {
    let details = repository.get_by_user(user_id).await?;

    let nutritional_needs = compute_needs(details.iter().map(|d| &d.recommended_nutrients));
    let conditions = details.iter().map(MatchedCondition::from).collect();

    Ok(NutritionalNeeds {
        conditions,
        nutritional_needs,
    })
}

fn required(value: String, field: &str) -> Result<String, CoreError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{} is required", field)));
    }
    Ok(value)
}

impl<U, UC, MC, R, F, RL, G, L, HC> Service<U, UC, MC, R, F, RL, G, L, HC>
where
    U: UserRepository,
{
    async fn require_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("User not found".to_string()))
    }
}

impl<U, UC, MC, R, F, RL, G, L, HC> UserService for Service<U, UC, MC, R, F, RL, G, L, HC>
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
    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        let email = required(input.email, "email")?;
        let name = required(input.name, "name")?;

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = self.user_repository.create_user(User::new(email, name)).await?;
        info!(user_id = %user.id, "User created");

        Ok(user)
    }

    async fn get_user_profile(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        let user = self.require_user(user_id).await?;
        let medical_conditions = self.user_condition_repository.get_by_user(user_id).await?;

        Ok(UserProfile {
            user,
            medical_conditions,
        })
    }

    async fn get_user_by_email(&self, email: String) -> Result<User, CoreError> {
        self.user_repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| CoreError::NotFound("User not found".to_string()))
    }

    async fn update_user(&self, input: UpdateUserInput) -> Result<User, CoreError> {
        let mut user = self.require_user(input.user_id).await?;

        let email = input.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());
        if let Some(email) = email.as_ref().filter(|e| **e != user.email) {
            let taken = self
                .user_repository
                .get_by_email(email.clone())
                .await?
                .is_some_and(|other| other.id != user.id);
            if taken {
                return Err(CoreError::Conflict("Email already in use".to_string()));
            }
        }

        let name = input.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        user.update(name, email);

        self.user_repository.update_user(user).await
    }

    async fn add_medical_condition(
        &self,
        input: AddUserConditionInput,
    ) -> Result<UserCondition, CoreError> {
        let condition_id = input
            .condition_id
            .ok_or_else(|| CoreError::Validation("Condition ID is required".to_string()))?;

        self.require_user(input.user_id).await?;

        let condition = self
            .medical_condition_repository
            .get_by_id(condition_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Medical condition not found".to_string()))?;

        let user_condition = UserCondition::new(
            input.user_id,
            condition.id,
            input.severity.unwrap_or_default(),
            input.diagnosed_at,
            input.notes,
        );

        let created = self
            .user_condition_repository
            .add_condition(user_condition)
            .await
            .inspect_err(|e| {
                if matches!(e, CoreError::Conflict(_)) {
                    warn!(
                        user_id = %input.user_id,
                        condition = %condition.name,
                        "Condition already attached to user"
                    );
                }
            })?;

        info!(
            user_id = %created.user_id,
            condition = %condition.name,
            severity = %created.severity,
            "Medical condition added"
        );

        Ok(created)
    }

    async fn get_user_conditions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserConditionDetail>, CoreError> {
        self.user_condition_repository.get_by_user(user_id).await
    }

    async fn remove_medical_condition(
        &self,
        input: RemoveUserConditionInput,
    ) -> Result<(), CoreError> {
        self.user_condition_repository
            .remove_condition(input.user_id, input.condition_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Condition not found for user".to_string()))?;

        info!(
            user_id = %input.user_id,
            condition_id = %input.condition_id,
            "Medical condition removed"
        );

        Ok(())
    }

    async fn get_nutritional_needs(&self, user_id: Uuid) -> Result<NutritionalNeeds, CoreError> {
        self.require_user(user_id).await?;
        load_nutritional_needs(self.user_condition_repository.as_ref(), user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        nutrition::NutrientPriority,
        testing::{FakeGenerator, InMemoryDb, TestService, new_id, service, today},
        user::entities::Severity,
    };

    fn setup() -> (InMemoryDb, TestService) {
        let db = InMemoryDb::new();
        let svc = service(&db, FakeGenerator::returning(vec![]), Arc::default());
        (db, svc)
    }

    fn add_input(user_id: Uuid, condition_id: Uuid) -> AddUserConditionInput {
        AddUserConditionInput {
            user_id,
            condition_id: Some(condition_id),
            severity: None,
            diagnosed_at: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let (db, svc) = setup();
        db.seed_user("ada@example.com");

        let err = svc
            .create_user(CreateUserInput {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_user_requires_name() {
        let (_, svc) = setup();

        let err = svc
            .create_user(CreateUserInput {
                email: "ada@example.com".to_string(),
                name: " ".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Validation("name is required".to_string()));
    }

    #[tokio::test]
    async fn test_update_user_rejects_taken_email() {
        let (db, svc) = setup();
        db.seed_user("taken@example.com");
        let user_id = db.seed_user("ada@example.com");

        let err = svc
            .update_user(UpdateUserInput {
                user_id,
                name: None,
                email: Some("taken@example.com".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_add_condition_applies_defaults() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");
        let condition_id = db.seed_condition("Diabetes", &[("sugar", NutrientPriority::High)]);

        let created = svc
            .add_medical_condition(add_input(user_id, condition_id))
            .await
            .unwrap();

        assert_eq!(created.severity, Severity::Moderate);
        assert_eq!(created.diagnosed_at, today());
        assert_eq!(created.medical_condition_id, condition_id);
    }

    #[tokio::test]
    async fn test_duplicate_condition_conflicts_and_keeps_single_row() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");
        let condition_id = db.seed_condition("Diabetes", &[("sugar", NutrientPriority::High)]);

        svc.add_medical_condition(add_input(user_id, condition_id))
            .await
            .unwrap();
        let err = svc
            .add_medical_condition(add_input(user_id, condition_id))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
        assert_eq!(svc.get_user_conditions(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_condition_requires_known_condition() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");

        let err = svc
            .add_medical_condition(add_input(user_id, new_id()))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_condition_requires_condition_id() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");

        let err = svc
            .add_medical_condition(AddUserConditionInput {
                condition_id: None,
                ..add_input(user_id, new_id())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_missing_condition_is_not_found() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");

        let err = svc
            .remove_medical_condition(RemoveUserConditionInput {
                user_id,
                condition_id: new_id(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_nutritional_needs_take_highest_priority() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");
        let diabetes = db.seed_condition("Diabetes", &[("sugar", NutrientPriority::High)]);
        let hypertension = db.seed_condition(
            "Hypertension",
            &[
                ("sodium", NutrientPriority::High),
                ("sugar", NutrientPriority::Medium),
            ],
        );
        for condition_id in [diabetes, hypertension] {
            svc.add_medical_condition(add_input(user_id, condition_id))
                .await
                .unwrap();
        }

        let needs = svc.get_nutritional_needs(user_id).await.unwrap();

        assert_eq!(needs.conditions.len(), 2);
        assert_eq!(needs.nutritional_needs.len(), 2);
        assert_eq!(needs.nutritional_needs.get("sugar"), Some(NutrientPriority::High));
        assert_eq!(needs.nutritional_needs.get("sodium"), Some(NutrientPriority::High));
    }

    #[tokio::test]
    async fn test_profile_includes_conditions() {
        let (db, svc) = setup();
        let user_id = db.seed_user("ada@example.com");
        let condition_id = db.seed_condition("Celiac", &[("gluten", NutrientPriority::Low)]);
        svc.add_medical_condition(add_input(user_id, condition_id))
            .await
            .unwrap();

        let profile = svc.get_user_profile(user_id).await.unwrap();

        assert_eq!(profile.user.id, user_id);
        assert_eq!(profile.medical_conditions[0].condition_name, "Celiac");
    }
}
