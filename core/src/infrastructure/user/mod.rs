pub mod mappers;
pub mod repositories;

pub use repositories::{
    user_condition_repository::PostgresUserConditionRepository,
    user_repository::PostgresUserRepository,
};
