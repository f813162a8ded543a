//! Register Use Case
//!
//! Creates a user account together with its default store, then issues a
//! session token.

use std::sync::Arc;

use persistence::entity::store::{NewStore, Store};
use persistence::entity::user::{COL_EMAIL, EMAIL_KEY, NewUser, User};
use persistence::{Filter, Gateway};
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::domain::{Email, RawPassword, UserPassword, parse_birth_date};
use crate::error::{AuthError, AuthResult};

/// Register input (wire field names in comments)
#[derive(Default)]
pub struct RegisterInput {
    /// `nama`
    pub name: String,
    /// `kata_sandi`
    pub password: String,
    /// `no_telp`
    pub phone: String,
    /// `tanggal_lahir`
    pub birth_date: Option<String>,
    /// `jenis_kelamin`
    pub gender: String,
    /// `tentang`
    pub bio: String,
    /// `pekerjaan`
    pub occupation: String,
    pub email: String,
    /// `id_provinsi`
    pub province_id: String,
    /// `id_kota`
    pub city_id: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub token: String,
    pub user: User,
    pub store: Store,
}

/// Register use case
pub struct RegisterUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    signer: Arc<TokenSigner>,
    config: Arc<AuthConfig>,
}

impl<G> RegisterUseCase<G>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(&input.email).map_err(|e| AuthError::invalid_input("email", e))?;
        let raw_password =
            RawPassword::new(input.password).map_err(|e| AuthError::invalid_input("kata_sandi", e))?;
        let birth_date = parse_birth_date(input.birth_date.as_deref())
            .map_err(|e| AuthError::invalid_input("tanggal_lahir", e))?;

        // Early exit only; the unique index decides under concurrency
        let existing = self
            .gateway
            .count_where::<User>(&Filter::by(COL_EMAIL, email.as_str()))
            .await?;
        if existing > 0 {
            return Err(AuthError::DuplicateEmail);
        }

        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        let new_user = NewUser {
            name: input.name.trim().to_string(),
            password_hash: password_hash.into_phc_string(),
            phone: input.phone.trim().to_string(),
            birth_date,
            gender: input.gender.trim().to_string(),
            bio: input.bio,
            occupation: input.occupation.trim().to_string(),
            email: email.into_inner(),
            province_id: input.province_id.trim().to_string(),
            city_id: input.city_id.trim().to_string(),
            is_admin: false,
        };

        let store_name = self.config.default_store_name.clone();
        let store_url = self.config.default_store_url.clone();

        let (user, store) = self
            .gateway
            .insert_with_child(new_user, move |user: &User| NewStore {
                user_id: user.id,
                name: store_name,
                url: store_url,
            })
            .await
            .map_err(|e| match e {
                e if e.is_unique_violation_of(EMAIL_KEY) => AuthError::DuplicateEmail,
                e => AuthError::Storage(e),
            })?;

        let token = self.signer.issue(&user.email, user.id.get(), user.is_admin)?;

        tracing::info!(
            user_id = %user.id,
            store_id = %store.id,
            "User registered"
        );

        Ok(RegisterOutput { token, user, store })
    }
}

