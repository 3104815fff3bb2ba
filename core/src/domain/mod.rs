pub mod chat;
pub mod common;
pub mod generation;
pub mod health;
pub mod medical_condition;
pub mod nutrition;
pub mod recipe;
pub mod recommendation;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;
