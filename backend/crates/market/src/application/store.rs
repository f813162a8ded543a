//! Store Use Cases

use std::sync::Arc;

use kernel::id::UserId;
use persistence::entity::store::{COL_ID_USER, NewStore, Store};
use persistence::{Filter, Gateway};

use crate::application::config::MarketConfig;
use crate::application::owner::resolve_user;
use crate::domain::Actor;
use crate::error::{MarketError, MarketResult};

/// Create store input
#[derive(Debug, Clone)]
pub struct CreateStoreInput {
    pub user_id: UserId,
    /// `nama_toko`
    pub name: String,
    /// `url_toko`
    pub url: String,
}

/// Create store use case
///
/// Always inserts a new row; users may hold several stores.
pub struct CreateStoreUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    config: Arc<MarketConfig>,
}

impl<G> CreateStoreUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>, config: Arc<MarketConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, actor: Actor, input: CreateStoreInput) -> MarketResult<Store> {
        let user = resolve_user(self.gateway.as_ref(), input.user_id).await?;
        actor.ensure_can_act_for(user.id, self.config.enforce_ownership)?;

        let store = self
            .gateway
            .insert(NewStore {
                user_id: user.id,
                name: input.name,
                url: input.url,
            })
            .await?;

        tracing::info!(user_id = %user.id, store_id = %store.id, "Store created");

        Ok(store)
    }
}

/// Get store use case
pub struct GetStoreUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
}

impl<G> GetStoreUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Lowest-id store owned by the user
    pub async fn execute(&self, user_id: UserId) -> MarketResult<Store> {
        let user = resolve_user(self.gateway.as_ref(), user_id).await?;

        self.gateway
            .find_where::<Store>(&Filter::by(COL_ID_USER, user.id))
            .await?
            .into_iter()
            .next()
            .ok_or(MarketError::StoreNotFound)
    }
}
