use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Func, extension::postgres::PgExpr};
use sea_orm::{Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    medical_condition::{
        entities::MedicalCondition, ports::MedicalConditionRepository,
        value_objects::CreateMedicalConditionInput,
    },
};
use crate::entity::medical_conditions::{
    ActiveModel as MedicalConditionActiveModel, Column as MedicalConditionColumn,
    Entity as MedicalConditionEntity,
};
use crate::infrastructure::{
    db::errors::map_write_error, medical_condition::mappers::nutrient_map_to_json,
};

#[derive(Debug, Clone)]
pub struct PostgresMedicalConditionRepository {
    pub db: DatabaseConnection,
}

impl PostgresMedicalConditionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MedicalConditionRepository for PostgresMedicalConditionRepository {
    async fn fetch_all(&self) -> Result<Vec<MedicalCondition>, CoreError> {
        let conditions = MedicalConditionEntity::find()
            .order_by_asc(MedicalConditionColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch medical conditions: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MedicalCondition::from)
            .collect();

        Ok(conditions)
    }

    async fn get_by_id(&self, condition_id: Uuid) -> Result<Option<MedicalCondition>, CoreError> {
        let condition = MedicalConditionEntity::find_by_id(condition_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get medical condition by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(MedicalCondition::from);

        Ok(condition)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<MedicalCondition>, CoreError> {
        let condition = MedicalConditionEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(MedicalConditionColumn::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get medical condition by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(MedicalCondition::from);

        Ok(condition)
    }

    async fn search(&self, term: String) -> Result<Vec<MedicalCondition>, CoreError> {
        let pattern = format!("%{}%", term);

        let conditions = MedicalConditionEntity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(MedicalConditionColumn::Name).ilike(pattern.clone()))
                    .add(Expr::col(MedicalConditionColumn::Description).ilike(pattern)),
            )
            .order_by_asc(MedicalConditionColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search medical conditions: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MedicalCondition::from)
            .collect();

        Ok(conditions)
    }

    async fn create(
        &self,
        input: CreateMedicalConditionInput,
    ) -> Result<MedicalCondition, CoreError> {
        let condition =
            MedicalCondition::new(input.name, input.description, input.recommended_nutrients);

        MedicalConditionEntity::insert(MedicalConditionActiveModel {
            id: Set(condition.id),
            name: Set(condition.name.clone()),
            description: Set(condition.description.clone()),
            recommended_nutrients: Set(nutrient_map_to_json(&condition.recommended_nutrients)),
            created_at: Set(condition.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(MedicalCondition::from)
        .map_err(|e| {
            map_write_error(
                e,
                "Failed to create medical condition",
                "Medical condition already exists",
            )
        })
    }
}
