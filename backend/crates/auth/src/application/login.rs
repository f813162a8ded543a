//! Login Use Case
//!
//! Verifies an email/password pair against the stored hash and issues a
//! session token. A token is never issued without a successful verification.
//!
//! An unknown email still pays for one Argon2 verification, against a fixed
//! hash, so response time does not reveal which emails are registered.

use std::sync::{Arc, LazyLock};

use persistence::entity::user::{COL_EMAIL, User};
use persistence::{Filter, Gateway};
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::domain::{Email, RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    /// `kata_sandi`
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

/// Verified in place of a stored hash when no account matches
pub(crate) static ABSENT_ACCOUNT_HASH: LazyLock<Option<UserPassword>> = LazyLock::new(|| {
    let raw = RawPassword::new("Akun-Tidak-Dikenal#7".to_owned()).ok()?;
    UserPassword::from_raw(&raw, None).ok()
});

#[cfg(test)]
thread_local! {
    pub(crate) static VERIFICATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Run exactly one Argon2 verification. Without a stored hash the fixed
/// hash is checked instead and the result is always `false`.
pub(crate) fn verify_credentials(
    stored: Option<&UserPassword>,
    raw: &RawPassword,
    pepper: Option<&[u8]>,
) -> bool {
    #[cfg(test)]
    VERIFICATIONS.with(|n| n.set(n.get() + 1));

    match stored {
        Some(hash) => hash.verify(raw, pepper),
        None => {
            if let Some(hash) = ABSENT_ACCOUNT_HASH.as_ref() {
                hash.verify(raw, pepper);
            }
            false
        }
    }
}

/// Login use case
pub struct LoginUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    signer: Arc<TokenSigner>,
    config: Arc<AuthConfig>,
}

impl<G> LoginUseCase<G>
where
    G: Gateway,
{
    pub fn new(gateway: Arc<G>, signer: Arc<TokenSigner>, config: Arc<AuthConfig>) -> Self {
        Self {
            gateway,
            signer,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Input that could never have been registered fails like a wrong password
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .gateway
            .find_where::<User>(&Filter::by(COL_EMAIL, email.as_str()))
            .await?
            .into_iter()
            .next();

        let stored = user
            .as_ref()
            .map(|user| {
                UserPassword::from_phc_string(user.password_hash.clone()).map_err(|e| {
                    AuthError::Internal(format!("stored hash for user {} unreadable: {e}", user.id))
                })
            })
            .transpose()?;

        let pepper = self.config.password_pepper.clone();
        let verified = tokio::task::spawn_blocking(move || {
            verify_credentials(stored.as_ref(), &raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = match user {
            Some(user) if verified => user,
            Some(user) => {
                tracing::warn!(user_id = %user.id, "Password verification failed");
                return Err(AuthError::InvalidCredentials);
            }
            None => {
                tracing::debug!("Login for unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.signer.issue(&user.email, user.id.get(), user.is_admin)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { token, user })
    }
}
