//! Owner resolution
//!
//! Parent lookups run before any write so a missing parent never leaves a
//! partial row behind.

use kernel::id::{StoreId, UserId};
use persistence::Gateway;
use persistence::entity::{store::Store, user::User};

use crate::error::{MarketError, MarketResult};

pub(crate) async fn resolve_user<G: Gateway>(gateway: &G, id: UserId) -> MarketResult<User> {
    gateway
        .get_by_id::<User>(id)
        .await?
        .ok_or(MarketError::UserNotFound)
}

pub(crate) async fn resolve_store<G: Gateway>(gateway: &G, id: StoreId) -> MarketResult<Store> {
    gateway
        .get_by_id::<Store>(id)
        .await?
        .ok_or(MarketError::StoreNotFound)
}
