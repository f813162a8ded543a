//! Transaction Entity (`transaksi`)

use chrono::{DateTime, Utc};
use kernel::id::{AddressId, Id, TransactionId, UserId, markers};
use serde::Serialize;
use sqlx::FromRow;

use super::{COL_ID, Entity, ForeignKey, NewEntity, UniqueKey};
use crate::filter::Value;

pub const TABLE: &str = "transaksi";

pub const COL_ID_USER: &str = "id_user";
pub const COL_ID_ALAMAT: &str = "id_alamat";
pub const COL_KODE_INVOICE: &str = "kode_invoice";

/// Unique index on `transaksi.kode_invoice`
pub const INVOICE_KEY: &str = "transaksi_kode_invoice_key";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Transaction {
    #[sqlx(try_from = "i64")]
    pub id: TransactionId,

    #[serde(rename = "id_user")]
    #[sqlx(rename = "id_user", try_from = "i64")]
    pub user_id: UserId,

    /// Not checked against the user's own addresses
    #[serde(rename = "id_alamat")]
    #[sqlx(rename = "id_alamat", try_from = "i64")]
    pub address_id: AddressId,

    #[serde(rename = "harga_total")]
    #[sqlx(rename = "harga_total")]
    pub total_price: i64,

    #[serde(rename = "kode_invoice")]
    #[sqlx(rename = "kode_invoice")]
    pub invoice_code: String,

    #[serde(rename = "metode_pembayaran")]
    #[sqlx(rename = "metode_pembayaran")]
    pub payment_method: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Transaction {
    type Marker = markers::Transaction;

    const TABLE: &'static str = TABLE;

    const UNIQUE: &'static [UniqueKey] = &[UniqueKey {
        name: INVOICE_KEY,
        columns: &[COL_KODE_INVOICE],
    }];

    const FOREIGN: &'static [ForeignKey] = &[ForeignKey {
        name: "transaksi_id_user_fkey",
        column: COL_ID_USER,
        table: super::user::TABLE,
    }];

    fn id(&self) -> TransactionId {
        self.id
    }

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name {
            COL_ID => self.id.into(),
            COL_ID_USER => self.user_id.into(),
            COL_ID_ALAMAT => self.address_id.into(),
            "harga_total" => self.total_price.into(),
            COL_KODE_INVOICE => self.invoice_code.as_str().into(),
            "metode_pembayaran" => self.payment_method.as_str().into(),
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub address_id: AddressId,
    pub total_price: i64,
    pub invoice_code: String,
    pub payment_method: String,
}

impl NewEntity for NewTransaction {
    type Entity = Transaction;

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            (COL_ID_USER, self.user_id.into()),
            (COL_ID_ALAMAT, self.address_id.into()),
            ("harga_total", self.total_price.into()),
            (COL_KODE_INVOICE, self.invoice_code.as_str().into()),
            ("metode_pembayaran", self.payment_method.as_str().into()),
        ]
    }

    fn into_entity(self, id: Id<markers::Transaction>, now: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            address_id: self.address_id,
            total_price: self.total_price,
            invoice_code: self.invoice_code,
            payment_method: self.payment_method,
            created_at: now,
            updated_at: now,
        }
    }
}
