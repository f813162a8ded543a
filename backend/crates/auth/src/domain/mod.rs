//! Domain Layer
//!
//! Value objects for registration and login input. Stored entities live in
//! the `persistence` crate.

pub mod value_object;

// Re-exports
pub use value_object::{
    birth_date::parse_birth_date,
    email::{Email, EmailError},
    user_password::{RawPassword, UserPassword},
};
