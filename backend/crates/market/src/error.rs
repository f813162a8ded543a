//! Market Error Types
//!
//! Errors raised by resource operations; they render through
//! `kernel::error::AppError` like every other crate's errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use persistence::StorageError;
use thiserror::Error;

/// Market-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

#[derive(Debug, Error)]
pub enum MarketError {
    /// Request field missing, blank, non-numeric or out of range
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Store not found")]
    StoreNotFound,

    /// Session is valid but does not own the resource
    #[error("You do not have access to this resource")]
    Forbidden,

    /// Every candidate slug for the product name is taken in this store
    #[error("Product slug '{slug}' is already taken in this store")]
    SlugExhausted { slug: String },

    /// Invoice generation kept colliding
    #[error("Could not allocate a unique invoice code after {attempts} attempts")]
    InvoiceCodeExhausted { attempts: u32 },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketError {
    pub fn invalid_input(field: &'static str, reason: impl std::fmt::Display) -> Self {
        MarketError::InvalidInput {
            field,
            reason: reason.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::InvalidInput { .. } => ErrorKind::BadRequest,
            MarketError::UserNotFound | MarketError::StoreNotFound => ErrorKind::NotFound,
            MarketError::Forbidden => ErrorKind::Forbidden,
            MarketError::SlugExhausted { .. } => ErrorKind::Conflict,
            MarketError::Storage(e) => e.kind(),
            MarketError::InvoiceCodeExhausted { .. } | MarketError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            MarketError::InvalidInput { field, reason } => AppError::invalid_input(field, reason),
            MarketError::Storage(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            MarketError::Storage(e) => e.log(),
            MarketError::InvoiceCodeExhausted { attempts } => {
                tracing::error!(attempts, "Invoice code generation exhausted");
            }
            MarketError::Internal(msg) => {
                tracing::error!(message = %msg, "Market internal error");
            }
            MarketError::Forbidden => {
                tracing::warn!("Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Market error");
            }
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
