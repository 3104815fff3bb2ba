use super::handlers::get_medical_condition::{__path_get_medical_condition, get_medical_condition};
use super::handlers::get_medical_conditions::{
    __path_get_medical_conditions, get_medical_conditions,
};
use super::handlers::search_medical_conditions::{
    __path_search_medical_conditions, search_medical_conditions,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_medical_conditions, search_medical_conditions, get_medical_condition))]
pub struct MedicalConditionApiDoc;

pub fn medical_condition_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/medical-conditions", root_path),
            get(get_medical_conditions),
        )
        .route(
            &format!("{}/medical-conditions/search", root_path),
            get(search_medical_conditions),
        )
        .route(
            &format!("{}/medical-conditions/{{condition_id}}", root_path),
            get(get_medical_condition),
        )
}
