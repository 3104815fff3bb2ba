pub mod db;
pub mod health;
pub mod llm;
pub mod medical_condition;
pub mod recipe;
pub mod user;
