//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random secrets)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed session tokens
//! - Slug and invoice-code generators

pub mod crypto;
pub mod invoice;
pub mod password;
pub mod slug;
pub mod token;
