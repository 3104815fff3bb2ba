//! sea-orm models for the Postgres schema in `core/migrations`.

pub mod prelude;

pub mod medical_conditions;
pub mod recipe_recommendations;
pub mod recipes;
pub mod user_favorites;
pub mod user_medical_conditions;
pub mod users;
