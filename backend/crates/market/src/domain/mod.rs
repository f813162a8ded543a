//! Domain Layer
//!
//! Input rules shared by every resource and the capability check that ties a
//! session to the resource owner.

pub mod actor;
pub mod field;

// Re-exports
pub use actor::Actor;
