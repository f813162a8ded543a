//! Session Token
//!
//! Stateless bearer token proving a prior successful login:
//!
//! ```text
//! base64url(claims_json) "." base64url(hmac_sha256(secret, first_segment))
//! ```
//!
//! The signature covers the encoded claims segment exactly as transmitted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::{self, HmacSha256};

/// Default token lifetime in seconds (24 h)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

pub fn default_ttl() -> Duration {
    Duration::seconds(DEFAULT_TOKEN_TTL_SECS)
}

/// Verified (or about to be signed) claim set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject email
    pub sub: String,
    /// Subject user id
    pub uid: i64,
    /// Admin flag at issuance
    #[serde(default)]
    pub adm: bool,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expires at (seconds since epoch)
    pub exp: i64,
}

impl SessionClaims {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not match")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("signing key must not be empty")]
    EmptyKey,

    #[error("claims could not be encoded: {0}")]
    Encode(String),
}

/// Signs and verifies session tokens with one process-wide key
#[derive(Clone)]
pub struct TokenSigner {
    key: HmacSha256,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        let key = crypto::hmac_key(secret).ok_or(TokenError::EmptyKey)?;
        Ok(Self { key, ttl })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid from now
    pub fn issue(&self, email: &str, user_id: i64, is_admin: bool) -> Result<String, TokenError> {
        self.issue_at(email, user_id, is_admin, Utc::now())
    }

    /// Issue a token as if signed at `now`
    pub fn issue_at(
        &self,
        email: &str,
        user_id: i64,
        is_admin: bool,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = SessionClaims {
            sub: email.to_owned(),
            uid: user_id,
            adm: is_admin,
            iat,
            exp: iat + self.ttl.num_seconds(),
        };
        self.sign(&claims)
    }

    pub fn sign(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        let json = serde_json::to_vec(claims).map_err(|e| TokenError::Encode(e.to_string()))?;
        let payload = crypto::to_base64_url(&json);
        let signature = crypto::hmac_sign(&self.key, payload.as_bytes());

        Ok(format!("{}.{}", payload, crypto::to_base64_url(&signature)))
    }

    /// Verify signature and expiry against the current time
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let (payload, signature_b64) = token.trim().split_once('.').ok_or(TokenError::Malformed)?;
        if payload.is_empty() || signature_b64.contains('.') {
            return Err(TokenError::Malformed);
        }

        let signature =
            crypto::from_base64_url(signature_b64).map_err(|_| TokenError::Malformed)?;
        if !crypto::hmac_verify(&self.key, payload.as_bytes(), &signature) {
            return Err(TokenError::BadSignature);
        }

        let json = crypto::from_base64_url(payload).map_err(|_| TokenError::Malformed)?;
        let claims: SessionClaims =
            serde_json::from_slice(&json).map_err(|_| TokenError::Malformed)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
