//! Value Object Module

pub mod birth_date;
pub mod email;
pub mod user_password;
