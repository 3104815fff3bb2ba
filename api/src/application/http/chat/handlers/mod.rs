pub mod get_cooking_assistance;

pub use get_cooking_assistance::{__path_get_cooking_assistance, get_cooking_assistance};
