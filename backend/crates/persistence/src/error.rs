//! Storage Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Storage result type alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures reported by a [`Gateway`](crate::gateway::Gateway)
#[derive(Debug, Error)]
pub enum StorageError {
    /// A unique index rejected the row
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// A referenced parent row does not exist
    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    /// Backend unreachable (pool timeout, closed pool, I/O)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl StorageError {
    /// Whether this is a unique violation of `constraint`
    pub fn is_unique_violation_of(&self, constraint: &str) -> bool {
        matches!(self, StorageError::UniqueViolation { constraint: c } if c == constraint)
    }

    /// Every storage failure surfaces as a 500; only `/health` reports 503
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Convert to AppError. The message stays server-side.
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    pub fn log(&self) {
        match self {
            StorageError::UniqueViolation { constraint }
            | StorageError::ForeignKeyViolation { constraint } => {
                tracing::warn!(%constraint, "Storage constraint rejected write");
            }
            StorageError::Unavailable(msg) => {
                tracing::error!(message = %msg, "Storage unavailable");
            }
            StorageError::Database(e) => {
                tracing::error!(error = %e, "Storage database error");
            }
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StorageError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or_default().to_owned(),
                }
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                StorageError::ForeignKeyViolation {
                    constraint: db_err.constraint().unwrap_or_default().to_owned(),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StorageError::Unavailable(err.to_string())
            }
            _ => StorageError::Database(err),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        err.log();
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_match() {
        let err = StorageError::UniqueViolation {
            constraint: "users_email_key".into(),
        };
        assert!(err.is_unique_violation_of("users_email_key"));
        assert!(!err.is_unique_violation_of("transaksi_kode_invoice_key"));
    }

    #[test]
    fn test_never_leaks_detail() {
        let err = StorageError::Unavailable("10.0.0.3:5432 refused".into());
        let app: AppError = err.into();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.public_message(), "Internal server error");

        let app: AppError = StorageError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(app.status_code(), 500);
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err: StorageError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_every_variant_is_internal() {
        let errors = [
            StorageError::UniqueViolation {
                constraint: "users_email_key".into(),
            },
            StorageError::ForeignKeyViolation {
                constraint: "toko_id_user_fkey".into(),
            },
            StorageError::Unavailable("pool closed".into()),
            StorageError::Database(sqlx::Error::RowNotFound),
        ];
        for err in errors {
            assert_eq!(err.to_app_error().status_code(), 500, "{err}");
        }
    }
}
