//! Application Configuration
//!
//! Configuration for the Market application layer.

use std::fmt;
use std::sync::Arc;

use platform::invoice;

/// Source of candidate invoice codes
pub type InvoiceGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Market application configuration
#[derive(Clone)]
pub struct MarketConfig {
    /// Invoice codes generated per transaction before giving up
    pub invoice_max_attempts: u32,
    /// Slug candidates (`kaos-polos`, `kaos-polos-2`, ...) tried per product
    pub slug_max_attempts: u32,
    /// Require the session user to own the resource being written
    pub enforce_ownership: bool,
    /// Defaults to `platform::invoice::generate`
    pub invoice_generator: InvoiceGenerator,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            invoice_max_attempts: 5,
            slug_max_attempts: 20,
            enforce_ownership: true,
            invoice_generator: Arc::new(invoice::generate),
        }
    }
}

impl fmt::Debug for MarketConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketConfig")
            .field("invoice_max_attempts", &self.invoice_max_attempts)
            .field("slug_max_attempts", &self.slug_max_attempts)
            .field("enforce_ownership", &self.enforce_ownership)
            .finish_non_exhaustive()
    }
}

impl MarketConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }

    /// Any valid session may write under any user or store
    pub fn without_ownership_check() -> Self {
        Self {
            enforce_ownership: false,
            ..Default::default()
        }
    }

    /// Replace the invoice code source
    pub fn with_invoice_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.invoice_generator = Arc::new(generator);
        self
    }

    /// Next candidate invoice code
    pub fn next_invoice_code(&self) -> String {
        (self.invoice_generator)()
    }
}
