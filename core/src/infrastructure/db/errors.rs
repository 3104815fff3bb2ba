use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// Maps a write failure, reporting unique violations as `Conflict`.
pub fn map_write_error(e: DbErr, context: &str, conflict: &str) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        tracing::warn!("{}: unique violation: {}", context, detail);
        return CoreError::Conflict(conflict.to_string());
    }

    error!("{}: {}", context, e);
    CoreError::InternalServerError
}

#[cfg(test)]
mod tests {
    use sea_orm::RuntimeErr;

    use super::*;

    #[test]
    fn test_non_unique_failures_are_internal() {
        let errors = [
            DbErr::Custom("connection reset".to_string()),
            DbErr::Exec(RuntimeErr::Internal("deadlock detected".to_string())),
            DbErr::RecordNotInserted,
        ];

        for e in errors {
            assert_eq!(
                map_write_error(e, "Failed to add condition", "already added"),
                CoreError::InternalServerError
            );
        }
    }
}
