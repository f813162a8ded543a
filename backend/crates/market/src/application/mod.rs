//! Application Layer
//!
//! Use cases, one create/list pair per resource.

pub mod address;
pub mod category;
pub mod config;
mod owner;
pub mod product;
pub mod store;
pub mod transaction;

// Re-exports
pub use address::{CreateAddressInput, CreateAddressUseCase, GetAddressesUseCase};
pub use category::{CreateCategoryInput, CreateCategoryUseCase, GetCategoriesUseCase};
pub use config::{InvoiceGenerator, MarketConfig};
pub use product::{CreateProductInput, CreateProductUseCase, GetProductsUseCase};
pub use store::{CreateStoreInput, CreateStoreUseCase, GetStoreUseCase};
pub use transaction::{CreateTransactionInput, CreateTransactionUseCase, GetTransactionsUseCase};
