//! Address Entity (`alamat`)

use chrono::{DateTime, Utc};
use kernel::id::{AddressId, Id, UserId, markers};
use serde::Serialize;
use sqlx::FromRow;

use super::{COL_ID, Entity, ForeignKey, NewEntity};
use crate::filter::Value;

pub const TABLE: &str = "alamat";

pub const COL_ID_USER: &str = "id_user";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Address {
    #[sqlx(try_from = "i64")]
    pub id: AddressId,

    #[serde(rename = "id_user")]
    #[sqlx(rename = "id_user", try_from = "i64")]
    pub user_id: UserId,

    #[serde(rename = "judul_alamat")]
    #[sqlx(rename = "judul_alamat")]
    pub title: String,

    #[serde(rename = "nama_penerima")]
    #[sqlx(rename = "nama_penerima")]
    pub recipient: String,

    #[serde(rename = "no_telp")]
    #[sqlx(rename = "no_telp")]
    pub phone: String,

    #[serde(rename = "detail_alamat")]
    #[sqlx(rename = "detail_alamat")]
    pub detail: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Address {
    type Marker = markers::Address;

    const TABLE: &'static str = TABLE;

    const FOREIGN: &'static [ForeignKey] = &[ForeignKey {
        name: "alamat_id_user_fkey",
        column: COL_ID_USER,
        table: super::user::TABLE,
    }];

    fn id(&self) -> AddressId {
        self.id
    }

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name {
            COL_ID => self.id.into(),
            COL_ID_USER => self.user_id.into(),
            "judul_alamat" => self.title.as_str().into(),
            "nama_penerima" => self.recipient.as_str().into(),
            "no_telp" => self.phone.as_str().into(),
            "detail_alamat" => self.detail.as_str().into(),
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_id: UserId,
    pub title: String,
    pub recipient: String,
    pub phone: String,
    pub detail: String,
}

impl NewEntity for NewAddress {
    type Entity = Address;

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            (COL_ID_USER, self.user_id.into()),
            ("judul_alamat", self.title.as_str().into()),
            ("nama_penerima", self.recipient.as_str().into()),
            ("no_telp", self.phone.as_str().into()),
            ("detail_alamat", self.detail.as_str().into()),
        ]
    }

    fn into_entity(self, id: Id<markers::Address>, now: DateTime<Utc>) -> Address {
        Address {
            id,
            user_id: self.user_id,
            title: self.title,
            recipient: self.recipient,
            phone: self.phone,
            detail: self.detail,
            created_at: now,
            updated_at: now,
        }
    }
}
