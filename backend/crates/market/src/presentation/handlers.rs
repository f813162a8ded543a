//! HTTP Handlers
//!
//! Create handlers sit behind the session gate and receive the verified
//! claims as a request extension. List handlers are public.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::{Extension, Form, Json};
use std::sync::Arc;

use kernel::id::{StoreId, UserId};
use persistence::Gateway;
use persistence::entity::{
    address::Address, category::Category, product::Product, store::Store,
    transaction::Transaction,
};
use platform::token::SessionClaims;

use crate::application::config::MarketConfig;
use crate::application::{
    CreateAddressUseCase, CreateCategoryUseCase, CreateProductUseCase, CreateStoreUseCase,
    CreateTransactionUseCase, GetAddressesUseCase, GetCategoriesUseCase, GetProductsUseCase,
    GetStoreUseCase, GetTransactionsUseCase,
};
use crate::domain::Actor;
use crate::domain::field::path_id;
use crate::error::{MarketError, MarketResult};
use crate::presentation::dto::{AddressForm, CategoryForm, ProductForm, StoreForm, TransactionForm};

/// Shared state for market handlers
pub struct MarketAppState<G>
where
    G: Gateway + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub config: Arc<MarketConfig>,
}

impl<G> Clone for MarketAppState<G>
where
    G: Gateway + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G> MarketAppState<G>
where
    G: Gateway + Sync + 'static,
{
    pub fn new(gateway: Arc<G>, config: MarketConfig) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }
}

/// Unwrap a form body, reporting a bad body as invalid input
fn form_body<T>(form: Result<Form<T>, FormRejection>) -> MarketResult<T> {
    form.map(|Form(body)| body)
        .map_err(|rejection| MarketError::invalid_input("body", rejection.body_text()))
}

// ============================================================================
// Store
// ============================================================================

/// POST /users/{id}/store
pub async fn create_store<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
    Extension(claims): Extension<SessionClaims>,
    form: Result<Form<StoreForm>, FormRejection>,
) -> MarketResult<Json<Store>>
where
    G: Gateway + Sync + 'static,
{
    let user_id: UserId = path_id(&id)?;
    let input = form_body(form)?.into_input(user_id)?;

    let use_case = CreateStoreUseCase::new(state.gateway.clone(), state.config.clone());
    let store = use_case.execute(Actor::from(&claims), input).await?;

    Ok(Json(store))
}

/// GET /users/{id}/store
pub async fn get_store<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
) -> MarketResult<Json<Store>>
where
    G: Gateway + Sync + 'static,
{
    let user_id: UserId = path_id(&id)?;
    let store = GetStoreUseCase::new(state.gateway.clone())
        .execute(user_id)
        .await?;
    Ok(Json(store))
}

// ============================================================================
// Address
// ============================================================================

/// POST /users/{id}/address
pub async fn create_address<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
    Extension(claims): Extension<SessionClaims>,
    form: Result<Form<AddressForm>, FormRejection>,
) -> MarketResult<Json<Address>>
where
    G: Gateway + Sync + 'static,
{
    let user_id: UserId = path_id(&id)?;
    let input = form_body(form)?.into_input(user_id)?;

    let use_case = CreateAddressUseCase::new(state.gateway.clone(), state.config.clone());
    let address = use_case.execute(Actor::from(&claims), input).await?;

    Ok(Json(address))
}

/// GET /users/{id}/address
pub async fn get_addresses<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
) -> MarketResult<Json<Vec<Address>>>
where
    G: Gateway + Sync + 'static,
{
    let user_id: UserId = path_id(&id)?;
    let addresses = GetAddressesUseCase::new(state.gateway.clone())
        .execute(user_id)
        .await?;
    Ok(Json(addresses))
}

// ============================================================================
// Category
// ============================================================================

/// POST /categories
pub async fn create_category<G>(
    State(state): State<MarketAppState<G>>,
    form: Result<Form<CategoryForm>, FormRejection>,
) -> MarketResult<Json<Category>>
where
    G: Gateway + Sync + 'static,
{
    let input = form_body(form)?.into_input()?;
    let category = CreateCategoryUseCase::new(state.gateway.clone())
        .execute(input)
        .await?;
    Ok(Json(category))
}

/// GET /categories
pub async fn get_categories<G>(
    State(state): State<MarketAppState<G>>,
) -> MarketResult<Json<Vec<Category>>>
where
    G: Gateway + Sync + 'static,
{
    let categories = GetCategoriesUseCase::new(state.gateway.clone())
        .execute()
        .await?;
    Ok(Json(categories))
}

// ============================================================================
// Product
// ============================================================================

/// POST /stores/{id}/products
pub async fn create_product<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
    Extension(claims): Extension<SessionClaims>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> MarketResult<Json<Product>>
where
    G: Gateway + Sync + 'static,
{
    let store_id: StoreId = path_id(&id)?;
    let input = form_body(form)?.into_input(store_id)?;

    let use_case = CreateProductUseCase::new(state.gateway.clone(), state.config.clone());
    let product = use_case.execute(Actor::from(&claims), input).await?;

    Ok(Json(product))
}

/// GET /stores/{id}/products
pub async fn get_products<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
) -> MarketResult<Json<Vec<Product>>>
where
    G: Gateway + Sync + 'static,
{
    let store_id: StoreId = path_id(&id)?;
    let products = GetProductsUseCase::new(state.gateway.clone())
        .execute(store_id)
        .await?;
    Ok(Json(products))
}

// ============================================================================
// Transaction
// ============================================================================

/// POST /users/{id}/transactions
pub async fn create_transaction<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
    Extension(claims): Extension<SessionClaims>,
    form: Result<Form<TransactionForm>, FormRejection>,
) -> MarketResult<Json<Transaction>>
where
    G: Gateway + Sync + 'static,
{
    let user_id: UserId = path_id(&id)?;
    let input = form_body(form)?.into_input(user_id)?;

    let use_case = CreateTransactionUseCase::new(state.gateway.clone(), state.config.clone());
    let transaction = use_case.execute(Actor::from(&claims), input).await?;

    Ok(Json(transaction))
}

/// GET /users/{id}/transactions
pub async fn get_transactions<G>(
    State(state): State<MarketAppState<G>>,
    Path(id): Path<String>,
) -> MarketResult<Json<Vec<Transaction>>>
where
    G: Gateway + Sync + 'static,
{
    let user_id: UserId = path_id(&id)?;
    let transactions = GetTransactionsUseCase::new(state.gateway.clone())
        .execute(user_id)
        .await?;
    Ok(Json(transactions))
}
