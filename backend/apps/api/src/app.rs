//! Router assembly

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

use auth::{AuthAppState, AuthConfig, auth_router_generic};
use kernel::error::app_error::{AppError, AppResult};
use market::{MarketAppState, MarketConfig, market_router_generic};
use persistence::Gateway;

/// All routes over one storage backend; HTTP layers are added by the caller
pub fn build_app<G>(
    gateway: Arc<G>,
    auth_config: AuthConfig,
    market_config: MarketConfig,
) -> anyhow::Result<Router>
where
    G: Gateway + Sync + 'static,
{
    let auth_state = AuthAppState::new(gateway.clone(), auth_config)?;
    let gate = auth_state.gate();
    let market_state = MarketAppState::new(gateway.clone(), market_config);

    Ok(Router::new()
        .route("/", get(home))
        .route("/health", get(health::<G>))
        .with_state(gateway)
        .merge(auth_router_generic(auth_state))
        .merge(market_router_generic(market_state, gate)))
}

/// Serve `app` on `listener` until the process stops
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app).await
}

async fn home() -> &'static str {
    "Welcome to the homepage!"
}

async fn health<G>(State(gateway): State<Arc<G>>) -> AppResult<Json<Value>>
where
    G: Gateway + Sync + 'static,
{
    gateway.ping().await.map_err(|e| {
        e.log();
        AppError::service_unavailable("Storage unavailable")
    })?;
    Ok(Json(json!({ "status": "ok" })))
}
