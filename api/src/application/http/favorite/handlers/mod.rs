pub mod add_favorite;
pub mod remove_favorite;
