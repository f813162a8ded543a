//! Transaction Use Cases
//!
//! Each transaction gets an invoice code from the configured generator
//! (`platform::invoice` by default). The storage unique index on
//! `kode_invoice` is authoritative; a collision regenerates the code.

use std::sync::Arc;

use kernel::id::{AddressId, UserId};
use persistence::entity::transaction::{
    COL_ID_USER, COL_KODE_INVOICE, INVOICE_KEY, NewTransaction, Transaction,
};
use persistence::{Filter, Gateway};

use crate::application::config::MarketConfig;
use crate::application::owner::resolve_user;
use crate::domain::Actor;
use crate::error::{MarketError, MarketResult};

/// Create transaction input
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub user_id: UserId,
    /// `id_alamat`; not checked against the user's addresses
    pub address_id: AddressId,
    /// `harga_total`
    pub total_price: i64,
    /// `metode_pembayaran`
    pub payment_method: String,
}

/// Create transaction use case
pub struct CreateTransactionUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    config: Arc<MarketConfig>,
}

impl<G> CreateTransactionUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>, config: Arc<MarketConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(
        &self,
        actor: Actor,
        input: CreateTransactionInput,
    ) -> MarketResult<Transaction> {
        let user = resolve_user(self.gateway.as_ref(), input.user_id).await?;
        actor.ensure_can_act_for(user.id, self.config.enforce_ownership)?;

        let attempts = self.config.invoice_max_attempts.max(1);

        for attempt in 1..=attempts {
            let code = self.config.next_invoice_code();

            let taken = self
                .gateway
                .count_where::<Transaction>(&Filter::by(COL_KODE_INVOICE, code.as_str()))
                .await?;
            if taken > 0 {
                tracing::debug!(attempt, "Invoice code already issued");
                continue;
            }

            let new_transaction = NewTransaction {
                user_id: user.id,
                address_id: input.address_id,
                total_price: input.total_price,
                invoice_code: code,
                payment_method: input.payment_method.clone(),
            };

            match self.gateway.insert(new_transaction).await {
                Ok(transaction) => {
                    tracing::info!(
                        user_id = %user.id,
                        transaction_id = %transaction.id,
                        invoice_code = %transaction.invoice_code,
                        "Transaction created"
                    );
                    return Ok(transaction);
                }
                Err(e) if e.is_unique_violation_of(INVOICE_KEY) => {
                    tracing::debug!(attempt, "Invoice code collision on insert");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(MarketError::InvoiceCodeExhausted { attempts })
    }
}

/// List transactions use case
pub struct GetTransactionsUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
}

impl<G> GetTransactionsUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, user_id: UserId) -> MarketResult<Vec<Transaction>> {
        let user = resolve_user(self.gateway.as_ref(), user_id).await?;

        let transactions = self
            .gateway
            .find_where::<Transaction>(&Filter::by(COL_ID_USER, user.id))
            .await?;
        Ok(transactions)
    }
}
