use chrono::NaiveDate;
use nourish_core::domain::user::entities::Severity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Parses a `userId` query parameter, which is required and must be a UUID.
pub fn parse_user_id(raw: Option<&str>) -> Result<Uuid, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest("userId is required".to_string()))?;

    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("userId must be a valid UUID".to_string()))
}

/// Like [`parse_user_id`] but a missing value is allowed.
pub fn parse_optional_user_id(raw: Option<&str>) -> Result<Option<Uuid>, ApiError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_user_id(Some(value)).map(Some),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddConditionValidator {
    #[serde(default)]
    pub condition_id: Option<Uuid>,

    #[serde(default)]
    pub severity: Option<Severity>,

    #[serde(default)]
    pub diagnosed_at: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_must_be_present_and_valid() {
        assert!(matches!(parse_user_id(None), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_user_id(Some("  ")), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_user_id(Some("abc")), Err(ApiError::BadRequest(_))));

        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(Some(&id.to_string())), Ok(id));
    }

    #[test]
    fn test_optional_user_id() {
        assert_eq!(parse_optional_user_id(None), Ok(None));
        assert_eq!(parse_optional_user_id(Some("")), Ok(None));
        assert!(parse_optional_user_id(Some("nope")).is_err());
    }

    #[test]
    fn test_condition_body_is_camel_case() {
        let id = Uuid::new_v4();
        let body: AddConditionValidator = serde_json::from_value(serde_json::json!({
            "conditionId": id,
            "severity": "severe",
            "diagnosedAt": "2024-03-01"
        }))
        .unwrap();

        assert_eq!(body.condition_id, Some(id));
        assert_eq!(body.severity, Some(Severity::Severe));
        assert_eq!(body.diagnosed_at, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_missing_user_fields_fail_validation() {
        let body: CreateUserValidator =
            serde_json::from_value(serde_json::json!({ "email": "a@b.co" })).unwrap();

        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
