pub mod get_recommendations;

pub use get_recommendations::{__path_get_recommendations, get_recommendations};
