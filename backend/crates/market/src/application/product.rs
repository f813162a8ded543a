//! Product Use Cases

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{CategoryId, StoreId};
use persistence::entity::product::{COL_ID_TOKO, COL_SLUG, NewProduct, Product, STORE_SLUG_KEY};
use persistence::{Filter, Gateway};
use platform::slug;

use crate::application::config::MarketConfig;
use crate::application::owner::resolve_store;
use crate::domain::Actor;
use crate::error::{MarketError, MarketResult};

/// Create product input
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub store_id: StoreId,
    /// Not checked against existing categories
    pub category_id: CategoryId,
    /// `nama_produk`
    pub name: String,
    /// `harga_reseller`
    pub reseller_price: i64,
    /// `harga_konsumen`
    pub consumer_price: i64,
    /// `stok`
    pub stock: i64,
    /// `deskripsi`
    pub description: String,
}

/// Create product use case
pub struct CreateProductUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    config: Arc<MarketConfig>,
}

impl<G> CreateProductUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>, config: Arc<MarketConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, actor: Actor, input: CreateProductInput) -> MarketResult<Product> {
        let store = resolve_store(self.gateway.as_ref(), input.store_id).await?;
        actor.ensure_can_act_for(store.user_id, self.config.enforce_ownership)?;

        let base = slug::slugify(&input.name);
        let now = Utc::now();

        for attempt in 1..=self.config.slug_max_attempts.max(1) {
            let candidate = slug::with_suffix(&base, attempt);

            let taken = self
                .gateway
                .count_where::<Product>(
                    &Filter::by(COL_ID_TOKO, store.id).and(COL_SLUG, candidate.as_str()),
                )
                .await?;
            if taken > 0 {
                continue;
            }

            let new_product = NewProduct {
                store_id: store.id,
                category_id: input.category_id,
                name: input.name.clone(),
                slug: candidate,
                reseller_price: input.reseller_price,
                consumer_price: input.consumer_price,
                stock: input.stock,
                description: input.description.clone(),
                created_at: now,
                updated_at: now,
            };

            match self.gateway.insert(new_product).await {
                Ok(product) => {
                    tracing::info!(
                        store_id = %store.id,
                        product_id = %product.id,
                        slug = %product.slug,
                        "Product created"
                    );
                    return Ok(product);
                }
                // Lost a race for this slug; try the next suffix
                Err(e) if e.is_unique_violation_of(STORE_SLUG_KEY) => {
                    tracing::debug!(store_id = %store.id, attempt, "Slug collision");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(MarketError::SlugExhausted { slug: base })
    }
}

/// List products use case
pub struct GetProductsUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
}

impl<G> GetProductsUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, store_id: StoreId) -> MarketResult<Vec<Product>> {
        let store = resolve_store(self.gateway.as_ref(), store_id).await?;

        let products = self
            .gateway
            .find_where::<Product>(&Filter::by(COL_ID_TOKO, store.id))
            .await?;
        Ok(products)
    }
}
