//! In-memory Gateway Implementation
//!
//! Mirrors the PostgreSQL schema's unique and foreign-key constraints, so
//! use cases behave the same under test as in production. All tables sit
//! behind one async mutex; every operation is atomic.

use std::any::Any;
use std::collections::HashMap;

use chrono::Utc;
use kernel::id::Id;
use tokio::sync::Mutex;

use crate::entity::{Entity, NewEntity};
use crate::error::{StorageError, StorageResult};
use crate::filter::Filter;
use crate::gateway::Gateway;

/// Type-erased stored row
trait Row: Send + Sync {
    fn row_id(&self) -> i64;
    fn as_any(&self) -> &dyn Any;
}

impl<E: Entity> Row for E {
    fn row_id(&self) -> i64 {
        self.id().get()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Default)]
struct Table {
    /// Last id handed out; ids are never reused, like a sequence
    last_id: i64,
    rows: Vec<Box<dyn Row>>,
}

impl Table {
    fn typed<E: Entity>(&self) -> impl Iterator<Item = &E> {
        self.rows.iter().filter_map(|r| r.as_any().downcast_ref::<E>())
    }
}

type Tables = HashMap<&'static str, Table>;

/// Gateway keeping every table in process memory
#[derive(Default)]
pub struct MemoryGateway {
    tables: Mutex<Tables>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_constraints<N: NewEntity>(tables: &Tables, new: &N) -> StorageResult<()> {
    for key in <N::Entity as Entity>::UNIQUE {
        let candidate: Vec<_> = key.columns.iter().map(|c| new.value(c)).collect();
        let taken = tables
            .get(<N::Entity as Entity>::TABLE)
            .into_iter()
            .flat_map(|t| t.typed::<N::Entity>())
            .any(|row| {
                key.columns
                    .iter()
                    .zip(&candidate)
                    .all(|(c, v)| v.is_some() && row.column(c) == *v)
            });
        if taken {
            return Err(StorageError::UniqueViolation {
                constraint: key.name.to_owned(),
            });
        }
    }

    for fk in <N::Entity as Entity>::FOREIGN {
        let parent_id = match new.value(fk.column) {
            Some(crate::filter::Value::Int(id)) => id,
            _ => continue,
        };
        let exists = tables
            .get(fk.table)
            .is_some_and(|t| t.rows.iter().any(|r| r.row_id() == parent_id));
        if !exists {
            return Err(StorageError::ForeignKeyViolation {
                constraint: fk.name.to_owned(),
            });
        }
    }

    Ok(())
}

fn insert_locked<N: NewEntity>(tables: &mut Tables, new: N) -> StorageResult<N::Entity> {
    check_constraints(tables, &new)?;

    let table = tables.entry(<N::Entity as Entity>::TABLE).or_default();
    table.last_id += 1;
    let row = new.into_entity(Id::new(table.last_id), Utc::now());
    table.rows.push(Box::new(row.clone()));
    Ok(row)
}

impl Gateway for MemoryGateway {
    async fn insert<N: NewEntity>(&self, new: N) -> StorageResult<N::Entity> {
        let mut tables = self.tables.lock().await;
        insert_locked(&mut tables, new)
    }

    async fn insert_with_child<P, C, F>(
        &self,
        parent: P,
        child: F,
    ) -> StorageResult<(P::Entity, C::Entity)>
    where
        P: NewEntity,
        C: NewEntity,
        F: FnOnce(&P::Entity) -> C + Send,
    {
        let mut tables = self.tables.lock().await;

        let parent = insert_locked(&mut tables, parent)?;
        match insert_locked(&mut tables, child(&parent)) {
            Ok(child) => Ok((parent, child)),
            Err(e) => {
                // Roll the parent back; its id stays consumed
                if let Some(table) = tables.get_mut(<P::Entity as Entity>::TABLE) {
                    table.rows.retain(|r| r.row_id() != parent.id().get());
                }
                Err(e)
            }
        }
    }

    async fn get_by_id<E: Entity>(&self, id: Id<E::Marker>) -> StorageResult<Option<E>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .get(E::TABLE)
            .and_then(|t| t.typed::<E>().find(|row| row.id() == id).cloned()))
    }

    async fn find_where<E: Entity>(&self, filter: &Filter) -> StorageResult<Vec<E>> {
        let tables = self.tables.lock().await;
        // Rows are appended in id order
        Ok(tables
            .get(E::TABLE)
            .map(|t| t.typed::<E>().filter(|row| filter.matches(*row)).cloned().collect())
            .unwrap_or_default())
    }

    async fn count_where<E: Entity>(&self, filter: &Filter) -> StorageResult<i64> {
        let tables = self.tables.lock().await;
        let count = tables
            .get(E::TABLE)
            .map(|t| t.typed::<E>().filter(|row| filter.matches(*row)).count())
            .unwrap_or(0);
        Ok(count as i64)
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }
}
