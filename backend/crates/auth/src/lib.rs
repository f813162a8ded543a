//! Auth (Identity & Credential) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects for credentials and profile input
//! - `application/` - Register, login and token verification use cases
//! - `presentation/` - HTTP handlers, DTOs, router, and the session gate
//!
//! Storage goes through `persistence::Gateway`; there is no auth-specific
//! repository.
//!
//! ## Features
//! - Account registration with an auto-created default store
//! - Email + password login
//! - Stateless signed session tokens (HMAC-SHA256, 24h default lifetime)
//! - Bearer gate that exposes verified `SessionClaims` to handlers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional server-side pepper
//! - Unknown email and wrong password give the same response, and both run
//!   one Argon2 verification
//! - Email uniqueness enforced by the storage unique index

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use platform::token::SessionClaims;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{SessionGate, require_session};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::*;
    pub use crate::presentation::dto::*;
}
