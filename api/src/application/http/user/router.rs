use super::handlers::add_user_condition::{__path_add_user_condition, add_user_condition};
use super::handlers::create_user::{__path_create_user, create_user};
use super::handlers::get_nutritional_needs::{__path_get_nutritional_needs, get_nutritional_needs};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_user_by_email::{__path_get_user_by_email, get_user_by_email};
use super::handlers::get_user_conditions::{__path_get_user_conditions, get_user_conditions};
use super::handlers::remove_user_condition::{__path_remove_user_condition, remove_user_condition};
use super::handlers::update_user::{__path_update_user, update_user};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_user,
    get_user,
    update_user,
    get_user_by_email,
    get_user_conditions,
    add_user_condition,
    remove_user_condition,
    get_nutritional_needs
))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/users", root_path), post(create_user))
        .route(
            &format!("{}/users/{{user_id}}", root_path),
            get(get_user).put(update_user),
        )
        .route(
            &format!("{}/users/email/{{email}}", root_path),
            get(get_user_by_email),
        )
        .route(
            &format!("{}/users/{{user_id}}/conditions", root_path),
            get(get_user_conditions).post(add_user_condition),
        )
        .route(
            &format!("{}/users/{{user_id}}/conditions/{{condition_id}}", root_path),
            delete(remove_user_condition),
        )
        .route(
            &format!("{}/users/{{user_id}}/nutritional-needs", root_path),
            get(get_nutritional_needs),
        )
}
