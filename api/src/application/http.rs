pub mod chat;
pub mod favorite;
pub mod health;
pub mod medical_condition;
pub mod recipe;
pub mod recommendation;
pub mod server;
pub mod user;
