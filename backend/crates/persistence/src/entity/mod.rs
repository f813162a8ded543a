//! Persisted entities
//!
//! One table per entity, keyed by `BIGSERIAL id`. Struct fields use English
//! names; columns and JSON keys keep the marketplace's wire names
//! (`nama_toko`, `id_user`, ...).

pub mod address;
pub mod category;
pub mod product;
pub mod store;
pub mod transaction;
pub mod user;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use sqlx::{FromRow, postgres::PgRow};

use crate::filter::Value;

/// Column shared by every table
pub const COL_ID: &str = "id";

/// A unique index declared by an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueKey {
    /// Constraint name, identical to the PostgreSQL one
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// A foreign key declared by an entity (`column` -> `table.id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: &'static str,
    pub column: &'static str,
    pub table: &'static str,
}

/// A row type stored by a [`Gateway`](crate::gateway::Gateway)
pub trait Entity: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Id marker, so `get_by_id::<Store>` only accepts a `StoreId`
    type Marker: 'static;

    const TABLE: &'static str;

    const UNIQUE: &'static [UniqueKey] = &[];

    const FOREIGN: &'static [ForeignKey] = &[];

    fn id(&self) -> Id<Self::Marker>;

    /// Column value by name, used to evaluate filters and constraints
    fn column(&self, name: &str) -> Option<Value>;
}

/// An entity that has not been persisted yet
pub trait NewEntity: Send + Sync + 'static {
    type Entity: Entity;

    /// Columns to insert; `id` and defaulted timestamps are left out
    fn values(&self) -> Vec<(&'static str, Value)>;

    /// Materialize the stored row for backends that assign ids themselves
    fn into_entity(self, id: Id<<Self::Entity as Entity>::Marker>, now: DateTime<Utc>)
    -> Self::Entity;

    fn value(&self, column: &str) -> Option<Value> {
        self.values()
            .into_iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }
}
