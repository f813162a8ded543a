//! Category Use Cases
//!
//! Categories are a global lookup list with no owner.

use std::sync::Arc;

use persistence::entity::category::{Category, NewCategory};
use persistence::{Filter, Gateway};

use crate::error::MarketResult;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// `nama_kategori`
    pub name: String,
}

pub struct CreateCategoryUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
}

impl<G> CreateCategoryUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: CreateCategoryInput) -> MarketResult<Category> {
        let category = self
            .gateway
            .insert(NewCategory { name: input.name })
            .await?;

        tracing::info!(category_id = %category.id, "Category created");

        Ok(category)
    }
}

pub struct GetCategoriesUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
}

impl<G> GetCategoriesUseCase<G>
where
    G: Gateway + Sync,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> MarketResult<Vec<Category>> {
        let categories = self.gateway.find_where::<Category>(&Filter::all()).await?;
        Ok(categories)
    }
}
