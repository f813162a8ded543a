//! Persistence Crate - Persistence Gateway
//!
//! Durable storage of the marketplace entity graph behind one uniform
//! contract:
//! - `entity`: the six stored types (`User`, `Store`, `Address`, `Category`,
//!   `Product`, `Transaction`) and their insertable counterparts
//! - `filter`: equality predicates for `find_where` / `count_where`
//! - `gateway`: the `Gateway` trait injected into use cases
//! - `infra`: PostgreSQL and in-memory implementations
//!
//! Unique and foreign-key constraints are enforced by storage; application
//! pre-checks are only an early exit.

pub mod entity;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod infra;

pub use error::{StorageError, StorageResult};
pub use filter::{Filter, Value};
pub use gateway::Gateway;
pub use infra::{memory::MemoryGateway, postgres::PgGateway};
