use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::db::errors::map_write_error;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(user: &User) -> UserActiveModel {
    UserActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        name: Set(user.name.clone()),
        created_at: Set(user.created_at.naive_utc()),
        updated_at: Set(user.updated_at.naive_utc()),
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        UserEntity::insert(active_model(&user))
            .exec_with_returning(&self.db)
            .await
            .map(User::from)
            .map_err(|e| {
                map_write_error(
                    e,
                    "Failed to create user",
                    "User with this email already exists",
                )
            })
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        UserEntity::update(active_model(&user))
            .filter(UserColumn::Id.eq(user.id))
            .exec(&self.db)
            .await
            .map(User::from)
            .map_err(|e| map_write_error(e, "Failed to update user", "Email already in use"))
    }
}
