//! Address Use Cases

use std::sync::Arc;

use kernel::id::UserId;
use persistence::entity::address::{Address, COL_ID_USER, NewAddress};
use persistence::{Filter, Gateway};

use crate::application::config::MarketConfig;
use crate::application::owner::resolve_user;
use crate::domain::Actor;
use crate::error::MarketResult;

/// Create address input
#[derive(Debug, Clone)]
pub struct CreateAddressInput {
    pub user_id: UserId,
    /// `judul_alamat`
    pub title: String,
    /// `nama_penerima`
    pub recipient: String,
    /// `no_telp`
    pub phone: String,
    /// `detail_alamat`
    pub detail: String,
}

/// Create address use case
pub struct CreateAddressUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    config: Arc<MarketConfig>,
}

impl<G> CreateAddressUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>, config: Arc<MarketConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, actor: Actor, input: CreateAddressInput) -> MarketResult<Address> {
        let user = resolve_user(self.gateway.as_ref(), input.user_id).await?;
        actor.ensure_can_act_for(user.id, self.config.enforce_ownership)?;

        let address = self
            .gateway
            .insert(NewAddress {
                user_id: user.id,
                title: input.title,
                recipient: input.recipient,
                phone: input.phone,
                detail: input.detail,
            })
            .await?;

        tracing::info!(user_id = %user.id, address_id = %address.id, "Address created");

        Ok(address)
    }
}

/// List addresses use case
pub struct GetAddressesUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
}

impl<G> GetAddressesUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Possibly empty; only a missing user is an error
    pub async fn execute(&self, user_id: UserId) -> MarketResult<Vec<Address>> {
        let user = resolve_user(self.gateway.as_ref(), user_id).await?;

        let addresses = self
            .gateway
            .find_where::<Address>(&Filter::by(COL_ID_USER, user.id))
            .await?;
        Ok(addresses)
    }
}
