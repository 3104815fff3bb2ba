pub mod entities;
pub mod helpers;

pub use entities::*;
pub use helpers::*;
