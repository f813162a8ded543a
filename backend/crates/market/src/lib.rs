//! Market Backend Module
//!
//! Resource operations of the marketplace: stores, addresses, categories,
//! products and transactions.
//!
//! Clean Architecture structure:
//! - `domain/` - Field validation and the acting-user capability check
//! - `application/` - One create/list use case pair per resource
//! - `presentation/` - Form DTOs, HTTP handlers, router
//!
//! Every create operation resolves its parent (user or store) before
//! writing, so a rejected request never leaves a partial row behind.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{InvoiceGenerator, MarketConfig};
pub use error::{MarketError, MarketResult};
pub use presentation::handlers::MarketAppState;
pub use presentation::router::{market_router, market_router_generic};

#[cfg(test)]
mod tests;
