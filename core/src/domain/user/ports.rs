use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{NutritionalNeeds, User, UserCondition, UserConditionDetail, UserProfile},
        value_objects::{
            AddUserConditionInput, CreateUserInput, RemoveUserConditionInput, UpdateUserInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the email is taken.
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserConditionRepository: Send + Sync {
    /// Fails with `Conflict` when the user already has the condition.
    fn add_condition(
        &self,
        condition: UserCondition,
    ) -> impl Future<Output = Result<UserCondition, CoreError>> + Send;

    /// The user's conditions joined with the catalog, newest first.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UserConditionDetail>, CoreError>> + Send;

    /// Returns the removed row, `None` if the user did not have the condition.
    fn remove_condition(
        &self,
        user_id: Uuid,
        condition_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserCondition>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_user_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn add_medical_condition(
        &self,
        input: AddUserConditionInput,
    ) -> impl Future<Output = Result<UserCondition, CoreError>> + Send;

    fn get_user_conditions(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UserConditionDetail>, CoreError>> + Send;

    fn remove_medical_condition(
        &self,
        input: RemoveUserConditionInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_nutritional_needs(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<NutritionalNeeds, CoreError>> + Send;
}
