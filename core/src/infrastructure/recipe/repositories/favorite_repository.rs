use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Favorite, FavoriteRecipe, Recipe},
        ports::FavoriteRepository,
    },
};
use crate::entity::{
    recipes::Entity as RecipeEntity,
    user_favorites::{
        ActiveModel as FavoriteActiveModel, Column as FavoriteColumn, Entity as FavoriteEntity,
        Model as FavoriteModel,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresFavoriteRepository {
    pub db: DatabaseConnection,
}

impl PostgresFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_pair(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<FavoriteModel>, CoreError> {
        FavoriteEntity::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .filter(FavoriteColumn::RecipeId.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find favorite: {}", e);
                CoreError::InternalServerError
            })
    }
}

impl FavoriteRepository for PostgresFavoriteRepository {
    async fn add_favorite(&self, favorite: Favorite) -> Result<Favorite, CoreError> {
        FavoriteEntity::insert(FavoriteActiveModel {
            id: Set(favorite.id),
            user_id: Set(favorite.user_id),
            recipe_id: Set(favorite.recipe_id),
            created_at: Set(favorite.created_at.naive_utc()),
        })
        .on_conflict(
            OnConflict::columns([FavoriteColumn::UserId, FavoriteColumn::RecipeId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to add favorite: {}", e);
            CoreError::InternalServerError
        })?;

        self.find_pair(favorite.user_id, favorite.recipe_id)
            .await?
            .map(Favorite::from)
            .ok_or(CoreError::InternalServerError)
    }

    async fn remove_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<Favorite>, CoreError> {
        let Some(existing) = self.find_pair(user_id, recipe_id).await? else {
            return Ok(None);
        };

        FavoriteEntity::delete_by_id(existing.id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(Favorite::from(existing)))
    }

    async fn get_user_favorites(&self, user_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        let rows = FavoriteEntity::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .find_also_related(RecipeEntity)
            .order_by_desc(FavoriteColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user favorites: {}", e);
                CoreError::InternalServerError
            })?;

        let favorites = rows
            .into_iter()
            .filter_map(|(favorite, recipe)| {
                let Some(recipe) = recipe else {
                    warn!(favorite_id = %favorite.id, "Favorite without recipe");
                    return None;
                };
                Some(FavoriteRecipe {
                    recipe: Recipe::from(recipe),
                    favorited_at: Favorite::from(favorite).created_at,
                })
            })
            .collect();

        Ok(favorites)
    }

    async fn is_favorited(&self, user_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.find_pair(user_id, recipe_id).await?.is_some())
    }
}
