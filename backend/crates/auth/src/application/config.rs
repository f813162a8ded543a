//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::crypto::{SECRET_LEN, random_secret};
use platform::token::{DEFAULT_TOKEN_TTL_SECS, TokenError, TokenSigner};

/// Name given to the store created alongside every new account
pub const DEFAULT_STORE_NAME: &str = "Default Store";

/// Placeholder URL of the default store
pub const DEFAULT_STORE_URL: &str = "https://example.com";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for session tokens (process-wide, read-only after startup)
    pub token_secret: Vec<u8>,
    /// Session token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    pub default_store_name: String,
    pub default_store_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; SECRET_LEN],
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS as u64),
            password_pepper: None,
            default_store_name: DEFAULT_STORE_NAME.to_string(),
            default_store_url: DEFAULT_STORE_URL.to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    ///
    /// Tokens stop verifying after a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: random_secret().to_vec(),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build the token signer for this configuration
    pub fn token_signer(&self) -> Result<TokenSigner, TokenError> {
        let ttl = chrono::Duration::from_std(self.token_ttl)
            .unwrap_or_else(|_| platform::token::default_ttl());
        TokenSigner::new(&self.token_secret, ttl)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("default_store_name", &self.default_store_name)
            .field("default_store_url", &self.default_store_url)
            .finish()
    }
}
