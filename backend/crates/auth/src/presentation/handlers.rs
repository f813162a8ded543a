//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use persistence::Gateway;
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::{LoginUseCase, RegisterUseCase};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::presentation::middleware::SessionGate;

/// Shared state for auth handlers
pub struct AuthAppState<G>
where
    G: Gateway + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub signer: Arc<TokenSigner>,
    pub config: Arc<AuthConfig>,
}

impl<G> Clone for AuthAppState<G>
where
    G: Gateway + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            signer: self.signer.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G> AuthAppState<G>
where
    G: Gateway + Sync + 'static,
{
    /// Build state; fails only if the configured token secret is unusable
    pub fn new(gateway: Arc<G>, config: AuthConfig) -> AuthResult<Self> {
        let signer = Arc::new(config.token_signer()?);
        Ok(Self {
            gateway,
            signer,
            config: Arc::new(config),
        })
    }

    /// Gate sharing this state's signing key
    pub fn gate(&self) -> SessionGate {
        SessionGate::new(self.signer.clone())
    }
}

/// Unwrap a JSON body, reporting a bad body as invalid input
fn json_body<T>(json: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    json.map(|Json(body)| body)
        .map_err(|rejection| AuthError::invalid_input("body", rejection.body_text()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<G>(
    State(state): State<AuthAppState<G>>,
    req: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Json<RegisterResponse>>
where
    G: Gateway + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.gateway.clone(),
        state.signer.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(json_body(req)?.into()).await?;

    Ok(Json(RegisterResponse {
        token: output.token,
        user: output.user,
        store: output.store,
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<G>(
    State(state): State<AuthAppState<G>>,
    req: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    G: Gateway + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.gateway.clone(),
        state.signer.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(json_body(req)?.into()).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}
