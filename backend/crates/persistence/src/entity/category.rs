//! Category Entity (`kategori`)

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, Id, markers};
use serde::Serialize;
use sqlx::FromRow;

use super::{COL_ID, Entity, NewEntity};
use crate::filter::Value;

pub const TABLE: &str = "kategori";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    #[sqlx(try_from = "i64")]
    pub id: CategoryId,

    #[serde(rename = "nama_kategori")]
    #[sqlx(rename = "nama_kategori")]
    pub name: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Category {
    type Marker = markers::Category;

    const TABLE: &'static str = TABLE;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name {
            COL_ID => self.id.into(),
            "nama_kategori" => self.name.as_str().into(),
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}

impl NewEntity for NewCategory {
    type Entity = Category;

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![("nama_kategori", self.name.as_str().into())]
    }

    fn into_entity(self, id: Id<markers::Category>, now: DateTime<Utc>) -> Category {
        Category {
            id,
            name: self.name,
            created_at: now,
            updated_at: now,
        }
    }
}
