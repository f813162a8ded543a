//! Store Entity (`toko`)

use chrono::{DateTime, Utc};
use kernel::id::{Id, StoreId, UserId, markers};
use serde::Serialize;
use sqlx::FromRow;

use super::{COL_ID, Entity, ForeignKey, NewEntity};
use crate::filter::Value;

pub const TABLE: &str = "toko";

pub const COL_ID_USER: &str = "id_user";
pub const COL_NAMA_TOKO: &str = "nama_toko";
pub const COL_URL_TOKO: &str = "url_toko";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Store {
    #[sqlx(try_from = "i64")]
    pub id: StoreId,

    #[serde(rename = "id_user")]
    #[sqlx(rename = "id_user", try_from = "i64")]
    pub user_id: UserId,

    #[serde(rename = "nama_toko")]
    #[sqlx(rename = "nama_toko")]
    pub name: String,

    #[serde(rename = "url_toko")]
    #[sqlx(rename = "url_toko")]
    pub url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Store {
    type Marker = markers::Store;

    const TABLE: &'static str = TABLE;

    const FOREIGN: &'static [ForeignKey] = &[ForeignKey {
        name: "toko_id_user_fkey",
        column: COL_ID_USER,
        table: super::user::TABLE,
    }];

    fn id(&self) -> StoreId {
        self.id
    }

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name {
            COL_ID => self.id.into(),
            COL_ID_USER => self.user_id.into(),
            COL_NAMA_TOKO => self.name.as_str().into(),
            COL_URL_TOKO => self.url.as_str().into(),
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewStore {
    pub user_id: UserId,
    pub name: String,
    pub url: String,
}

impl NewEntity for NewStore {
    type Entity = Store;

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            (COL_ID_USER, self.user_id.into()),
            (COL_NAMA_TOKO, self.name.as_str().into()),
            (COL_URL_TOKO, self.url.as_str().into()),
        ]
    }

    fn into_entity(self, id: Id<markers::Store>, now: DateTime<Utc>) -> Store {
        Store {
            id,
            user_id: self.user_id,
            name: self.name,
            url: self.url,
            created_at: now,
            updated_at: now,
        }
    }
}
