//! Verify Token Use Case
//!
//! Turns a raw `Authorization` header value into verified session claims.

use std::sync::Arc;

use platform::token::{SessionClaims, TokenSigner};

use crate::error::{AuthError, AuthResult};

/// Optional scheme prefix; the bare token is the canonical form
const BEARER_PREFIX: &str = "Bearer ";

pub struct VerifyTokenUseCase {
    signer: Arc<TokenSigner>,
}

impl VerifyTokenUseCase {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }

    /// `header` is the whole header value, absent if the header was not sent
    pub fn execute(&self, header: Option<&str>) -> AuthResult<SessionClaims> {
        let token = header
            .map(str::trim)
            .map(|v| v.strip_prefix(BEARER_PREFIX).unwrap_or(v).trim())
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.signer.verify(token)?;
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use platform::token::default_ttl;

    fn signer() -> Arc<TokenSigner> {
        Arc::new(TokenSigner::new(&[3u8; 32], default_ttl()).unwrap())
    }

    #[test]
    fn test_missing() {
        let uc = VerifyTokenUseCase::new(signer());
        assert!(matches!(uc.execute(None), Err(AuthError::MissingToken)));
        assert!(matches!(uc.execute(Some("  ")), Err(AuthError::MissingToken)));
    }

    #[test]
    fn test_whole_value_and_bearer_prefix() {
        let signer = signer();
        let token = signer.issue("a@example.com", 1, false).unwrap();
        let uc = VerifyTokenUseCase::new(signer);

        assert_eq!(uc.execute(Some(token.as_str())).unwrap().uid, 1);
        assert_eq!(uc.execute(Some(format!("Bearer {token}").as_str())).unwrap().uid, 1);
    }

    #[test]
    fn test_invalid_and_expired() {
        let signer = signer();
        let old = signer
            .issue_at("a@example.com", 1, false, Utc::now() - Duration::hours(25))
            .unwrap();
        let uc = VerifyTokenUseCase::new(signer);

        assert!(matches!(uc.execute(Some("garbage")), Err(AuthError::InvalidToken(_))));
        assert!(matches!(uc.execute(Some(old.as_str())), Err(AuthError::InvalidToken(_))));
    }
}
