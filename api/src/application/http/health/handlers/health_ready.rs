use axum::extract::State;
use nourish_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use tracing::warn;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the database and reports its latency.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = ApiErrorResponse, description = "Database unreachable")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(|e| {
        warn!("Readiness check failed: {}", e);
        ApiError::ServiceUnavailable("Database unavailable".to_string())
    })?;

    Ok(Response::OK(status))
}
