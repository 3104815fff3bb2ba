use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{RecommendationHistoryEntry, RecommendationLog},
        ports::RecommendationLogRepository,
    },
};
use crate::entity::{
    recipe_recommendations::{
        ActiveModel as RecommendationActiveModel, Column as RecommendationColumn,
        Entity as RecommendationEntity,
    },
    recipes::Entity as RecipeEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRecommendationLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecommendationLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecommendationLogRepository for PostgresRecommendationLogRepository {
    async fn log_recommendation(
        &self,
        log: RecommendationLog,
    ) -> Result<RecommendationLog, CoreError> {
        RecommendationEntity::insert(RecommendationActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            recipe_id: Set(log.recipe_id),
            matched_conditions: Set(serde_json::json!(log.matched_conditions)),
            created_at: Set(log.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(RecommendationLog::from)
        .map_err(|e| {
            error!("Failed to log recommendation: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn get_user_recommendations(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<RecommendationHistoryEntry>, CoreError> {
        let rows = RecommendationEntity::find()
            .filter(RecommendationColumn::UserId.eq(user_id))
            .find_also_related(RecipeEntity)
            .order_by_desc(RecommendationColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recommendation history: {}", e);
                CoreError::InternalServerError
            })?;

        let history = rows
            .into_iter()
            .filter_map(|(log, recipe)| {
                let recipe = recipe?;
                Some(RecommendationHistoryEntry {
                    log: RecommendationLog::from(log),
                    recipe_title: recipe.title,
                    recipe_description: recipe.description,
                })
            })
            .collect();

        Ok(history)
    }
}
