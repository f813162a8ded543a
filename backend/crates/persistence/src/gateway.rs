//! Gateway Trait
//!
//! Uniform storage contract shared by all six entity types. Implementations
//! live in the infrastructure layer and may write the methods as `async fn`.

use std::future::Future;

use kernel::id::Id;

use crate::entity::{Entity, NewEntity};
use crate::error::StorageResult;
use crate::filter::Filter;

/// Storage handle injected into every use case
///
/// Callers name the entity type at each call (`count_where::<User>`).
pub trait Gateway: Send + Sync {
    /// Insert a row and return it as stored (id and timestamps assigned)
    fn insert<N: NewEntity>(
        &self,
        new: N,
    ) -> impl Future<Output = StorageResult<N::Entity>> + Send;

    /// Insert a parent and a child built from the stored parent as one unit.
    ///
    /// Either both rows are persisted or neither is.
    fn insert_with_child<P, C, F>(
        &self,
        parent: P,
        child: F,
    ) -> impl Future<Output = StorageResult<(P::Entity, C::Entity)>> + Send
    where
        P: NewEntity,
        C: NewEntity,
        F: FnOnce(&P::Entity) -> C + Send;

    /// Fetch a row by primary key
    fn get_by_id<E: Entity>(
        &self,
        id: Id<E::Marker>,
    ) -> impl Future<Output = StorageResult<Option<E>>> + Send;

    /// All rows matching `filter`, ordered by ascending id
    fn find_where<E: Entity>(
        &self,
        filter: &Filter,
    ) -> impl Future<Output = StorageResult<Vec<E>>> + Send;

    /// Number of rows matching `filter`
    fn count_where<E: Entity>(
        &self,
        filter: &Filter,
    ) -> impl Future<Output = StorageResult<i64>> + Send;

    /// Round-trip to the backend (health check)
    fn ping(&self) -> impl Future<Output = StorageResult<()>> + Send;
}
