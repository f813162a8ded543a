//! Market Router

use axum::middleware::from_fn_with_state;
use axum::{Router, routing::post};

use auth::{SessionGate, require_session};
use persistence::{Gateway, PgGateway};

use crate::presentation::handlers::{self, MarketAppState};

/// Create the Market router with the PostgreSQL gateway
pub fn market_router(state: MarketAppState<PgGateway>, gate: SessionGate) -> Router {
    market_router_generic(state, gate)
}

/// Create a generic Market router for any gateway implementation
///
/// Only the POST half of each route passes through `require_session`.
pub fn market_router_generic<G>(state: MarketAppState<G>, gate: SessionGate) -> Router
where
    G: Gateway + Sync + 'static,
{
    let session = || from_fn_with_state(gate.clone(), require_session);

    Router::new()
        .route(
            "/users/{id}/store",
            post(handlers::create_store::<G>)
                .route_layer(session())
                .get(handlers::get_store::<G>),
        )
        .route(
            "/users/{id}/address",
            post(handlers::create_address::<G>)
                .route_layer(session())
                .get(handlers::get_addresses::<G>),
        )
        .route(
            "/categories",
            post(handlers::create_category::<G>)
                .route_layer(session())
                .get(handlers::get_categories::<G>),
        )
        .route(
            "/stores/{id}/products",
            post(handlers::create_product::<G>)
                .route_layer(session())
                .get(handlers::get_products::<G>),
        )
        .route(
            "/users/{id}/transactions",
            post(handlers::create_transaction::<G>)
                .route_layer(session())
                .get(handlers::get_transactions::<G>),
        )
        .with_state(state)
}
