//! Acting user
//!
//! Derived from verified session claims. Admin sessions may act on any
//! resource; everyone else only on resources owned by their user id.

use kernel::id::UserId;
use platform::token::SessionClaims;

use crate::error::{MarketError, MarketResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub is_admin: bool,
}

impl Actor {
    pub fn new(user_id: UserId, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// Check that this actor may write under `owner`.
    /// With `enforce == false` any authenticated actor passes.
    pub fn ensure_can_act_for(&self, owner: UserId, enforce: bool) -> MarketResult<()> {
        if !enforce || self.is_admin || self.user_id == owner {
            return Ok(());
        }
        tracing::warn!(
            actor_id = %self.user_id,
            owner_id = %owner,
            "Write on another user's resource rejected"
        );
        Err(MarketError::Forbidden)
    }
}

impl From<&SessionClaims> for Actor {
    fn from(claims: &SessionClaims) -> Self {
        Self::new(UserId::new(claims.uid), claims.adm)
    }
}
