//! PostgreSQL Gateway Implementation

use kernel::id::Id;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::entity::{COL_ID, Entity, NewEntity};
use crate::error::StorageResult;
use crate::filter::{Filter, Value};
use crate::gateway::Gateway;

/// PostgreSQL-backed gateway
#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ============================================================================
// Query building
// ============================================================================

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: Value) {
    match value {
        Value::Int(v) => qb.push_bind(v),
        Value::Text(v) => qb.push_bind(v),
        Value::Bool(v) => qb.push_bind(v),
        Value::Date(v) => qb.push_bind(v),
        Value::Timestamp(v) => qb.push_bind(v),
    };
}

fn push_where(qb: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    for (i, (column, value)) in filter.terms().iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        qb.push(*column);
        qb.push(" = ");
        push_value(qb, value.clone());
    }
}

fn insert_query<N: NewEntity>(new: &N) -> QueryBuilder<'static, Postgres> {
    let values = new.values();

    let mut qb = QueryBuilder::new("INSERT INTO ");
    qb.push(N::Entity::TABLE);
    qb.push(" (");
    for (i, (column, _)) in values.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(*column);
    }
    qb.push(") VALUES (");
    for (i, (_, value)) in values.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(") RETURNING *");
    qb
}

async fn insert_on<N: NewEntity>(conn: &mut PgConnection, new: &N) -> StorageResult<N::Entity> {
    let row = insert_query(new)
        .build_query_as::<N::Entity>()
        .fetch_one(conn)
        .await?;
    Ok(row)
}

// ============================================================================
// Gateway Implementation
// ============================================================================

impl Gateway for PgGateway {
    async fn insert<N: NewEntity>(&self, new: N) -> StorageResult<N::Entity> {
        let mut conn = self.pool.acquire().await?;
        let row = insert_on(&mut conn, &new).await?;

        tracing::debug!(table = N::Entity::TABLE, id = %row.id(), "Row inserted");
        Ok(row)
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
        let mut tx = self.pool.begin().await?;

        // Dropping `tx` on an early return rolls both inserts back
        let parent = insert_on(&mut tx, &parent).await?;
        let child = insert_on(&mut tx, &child(&parent)).await?;

        tx.commit().await?;

        tracing::debug!(
            parent_table = P::Entity::TABLE,
            parent_id = %parent.id(),
            child_table = C::Entity::TABLE,
            child_id = %child.id(),
            "Rows inserted in one transaction"
        );
        Ok((parent, child))
    }

    async fn get_by_id<E: Entity>(&self, id: Id<E::Marker>) -> StorageResult<Option<E>> {
        let mut qb = QueryBuilder::new("SELECT * FROM ");
        qb.push(E::TABLE);
        push_where(&mut qb, &Filter::by(COL_ID, id.get()));

        let row = qb.build_query_as::<E>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn find_where<E: Entity>(&self, filter: &Filter) -> StorageResult<Vec<E>> {
        let mut qb = QueryBuilder::new("SELECT * FROM ");
        qb.push(E::TABLE);
        push_where(&mut qb, filter);
        qb.push(" ORDER BY id ASC");

        let rows = qb.build_query_as::<E>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn count_where<E: Entity>(&self, filter: &Filter) -> StorageResult<i64> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM ");
        qb.push(E::TABLE);
        push_where(&mut qb, filter);

        let count = qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
