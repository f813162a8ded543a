//! Auth Router

use axum::{Router, routing::post};

use persistence::{Gateway, PgGateway};

use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL gateway
pub fn auth_router(state: AuthAppState<PgGateway>) -> Router {
    auth_router_generic(state)
}

/// Create a generic Auth router for any gateway implementation
pub fn auth_router_generic<G>(state: AuthAppState<G>) -> Router
where
    G: Gateway + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<G>))
        .route("/login", post(handlers::login::<G>))
        .with_state(state)
}
