//! Auth Middleware
//!
//! Authorization gate for mutating routes. The whole `Authorization` header
//! value is the token; a `Bearer ` prefix is tolerated.
//!
//! ```ignore
//! let gate = auth_state.gate();
//! post(create_store).route_layer(from_fn_with_state(gate, require_session))
//! ```

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use platform::token::{TokenError, TokenSigner};

use crate::application::VerifyTokenUseCase;
use crate::error::AuthError;

/// Middleware state: the process-wide token signer
#[derive(Clone)]
pub struct SessionGate {
    signer: Arc<TokenSigner>,
}

impl SessionGate {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }
}

/// Middleware that requires a valid session token
///
/// On success the verified `SessionClaims` are inserted into the request
/// extensions and the request is forwarded unchanged.
pub async fn require_session(
    State(gate): State<SessionGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AuthError::InvalidToken(TokenError::Malformed))?,
        ),
        None => None,
    };

    let claims = VerifyTokenUseCase::new(gate.signer.clone()).execute(header)?;

    tracing::debug!(user_id = claims.uid, "Session verified");

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
