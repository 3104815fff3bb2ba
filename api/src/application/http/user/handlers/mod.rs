pub mod add_user_condition;
pub mod create_user;
pub mod get_nutritional_needs;
pub mod get_user;
pub mod get_user_by_email;
pub mod get_user_conditions;
pub mod remove_user_condition;
pub mod update_user;
