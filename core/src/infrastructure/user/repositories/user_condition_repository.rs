use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{UserCondition, UserConditionDetail},
        ports::UserConditionRepository,
    },
};
use crate::entity::{
    medical_conditions::Entity as MedicalConditionEntity,
    user_medical_conditions::{
        ActiveModel as UserConditionActiveModel, Column as UserConditionColumn,
        Entity as UserConditionEntity,
    },
};
use crate::infrastructure::{db::errors::map_write_error, user::mappers::to_condition_detail};

#[derive(Debug, Clone)]
pub struct PostgresUserConditionRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserConditionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserConditionRepository for PostgresUserConditionRepository {
    async fn add_condition(&self, condition: UserCondition) -> Result<UserCondition, CoreError> {
        UserConditionEntity::insert(UserConditionActiveModel {
            id: Set(condition.id),
            user_id: Set(condition.user_id),
            medical_condition_id: Set(condition.medical_condition_id),
            severity: Set(condition.severity.to_string()),
            diagnosed_at: Set(condition.diagnosed_at),
            notes: Set(condition.notes),
            created_at: Set(condition.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(UserCondition::from)
        .map_err(|e| {
            map_write_error(
                e,
                "Failed to add user condition",
                "User already has this medical condition",
            )
        })
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<UserConditionDetail>, CoreError> {
        let rows = UserConditionEntity::find()
            .filter(UserConditionColumn::UserId.eq(user_id))
            .find_also_related(MedicalConditionEntity)
            .order_by_desc(UserConditionColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user conditions: {}", e);
                CoreError::InternalServerError
            })?;

        let details = rows
            .into_iter()
            .filter_map(|(row, condition)| match condition {
                Some(condition) => Some(to_condition_detail(row, condition)),
                None => {
                    warn!(user_condition_id = %row.id, "User condition without catalog entry");
                    None
                }
            })
            .collect();

        Ok(details)
    }

    async fn remove_condition(
        &self,
        user_id: Uuid,
        condition_id: Uuid,
    ) -> Result<Option<UserCondition>, CoreError> {
        let existing = UserConditionEntity::find()
            .filter(UserConditionColumn::UserId.eq(user_id))
            .filter(UserConditionColumn::MedicalConditionId.eq(condition_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find user condition: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let removed = UserCondition::from(existing.clone());
        existing.delete(&self.db).await.map_err(|e| {
            error!("Failed to remove user condition: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Some(removed))
    }
}
