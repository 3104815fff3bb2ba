use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nourish_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::NoConditions => ApiError::BadRequest(error.to_string()),
            CoreError::GenerationFailure(_) => ApiError::InternalServerError(
                "Failed to generate recommendations".to_string(),
            ),
            CoreError::RateLimited(_) => ApiError::TooManyRequests(
                "Upstream model is rate limited, please retry later".to_string(),
            ),
            CoreError::ExternalServiceError(_) => {
                ApiError::BadGateway("Failed to get a response from the assistant".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees
/// the payload. Both malformed JSON and failed rules are a `400`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value.validate().map_err(|e| {
            let message = e
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .collect::<Vec<_>>()
                .join(", ");

            ApiError::BadRequest(if message.is_empty() {
                e.to_string()
            } else {
                message
            })
        })?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (CoreError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (CoreError::Conflict("dup".into()), StatusCode::CONFLICT),
            (CoreError::NoConditions, StatusCode::BAD_REQUEST),
            (
                CoreError::GenerationFailure("all models failed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::RateLimited("429".into()),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                CoreError::ExternalServiceError("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_no_conditions_keeps_its_message() {
        let err = ApiError::from(CoreError::NoConditions);

        assert!(err.to_string().contains("no medical conditions"));
    }

    #[test]
    fn test_response_body_shape() {
        let response = ApiError::NotFound("Recipe not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = serde_json::to_value(ApiErrorResponse {
            success: false,
            error: "Recipe not found".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Recipe not found"})
        );
    }
}
