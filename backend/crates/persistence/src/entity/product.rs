//! Product Entity (`produk`)

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, Id, ProductId, StoreId, markers};
use serde::Serialize;
use sqlx::FromRow;

use super::{COL_ID, Entity, ForeignKey, NewEntity, UniqueKey};
use crate::filter::Value;

pub const TABLE: &str = "produk";

pub const COL_ID_TOKO: &str = "id_toko";
pub const COL_ID_CATEGORY: &str = "id_category";
pub const COL_SLUG: &str = "slug";

/// Unique index on `(id_toko, slug)`
pub const STORE_SLUG_KEY: &str = "produk_id_toko_slug_key";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    #[sqlx(try_from = "i64")]
    pub id: ProductId,

    #[serde(rename = "id_toko")]
    #[sqlx(rename = "id_toko", try_from = "i64")]
    pub store_id: StoreId,

    /// Not checked against `kategori`
    #[serde(rename = "id_category")]
    #[sqlx(rename = "id_category", try_from = "i64")]
    pub category_id: CategoryId,

    #[serde(rename = "nama_produk")]
    #[sqlx(rename = "nama_produk")]
    pub name: String,

    pub slug: String,

    #[serde(rename = "harga_reseller")]
    #[sqlx(rename = "harga_reseller")]
    pub reseller_price: i64,

    #[serde(rename = "harga_konsumen")]
    #[sqlx(rename = "harga_konsumen")]
    pub consumer_price: i64,

    #[serde(rename = "stok")]
    #[sqlx(rename = "stok")]
    pub stock: i64,

    #[serde(rename = "deskripsi")]
    #[sqlx(rename = "deskripsi")]
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    type Marker = markers::Product;

    const TABLE: &'static str = TABLE;

    const UNIQUE: &'static [UniqueKey] = &[UniqueKey {
        name: STORE_SLUG_KEY,
        columns: &[COL_ID_TOKO, COL_SLUG],
    }];

    const FOREIGN: &'static [ForeignKey] = &[ForeignKey {
        name: "produk_id_toko_fkey",
        column: COL_ID_TOKO,
        table: super::store::TABLE,
    }];

    fn id(&self) -> ProductId {
        self.id
    }

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name {
            COL_ID => self.id.into(),
            COL_ID_TOKO => self.store_id.into(),
            COL_ID_CATEGORY => self.category_id.into(),
            "nama_produk" => self.name.as_str().into(),
            COL_SLUG => self.slug.as_str().into(),
            "harga_reseller" => self.reseller_price.into(),
            "harga_konsumen" => self.consumer_price.into(),
            "stok" => self.stock.into(),
            "deskripsi" => self.description.as_str().into(),
            _ => return None,
        })
    }
}

/// Product timestamps are set by the caller, not by storage defaults
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub store_id: StoreId,
    pub category_id: CategoryId,
    pub name: String,
    pub slug: String,
    pub reseller_price: i64,
    pub consumer_price: i64,
    pub stock: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewEntity for NewProduct {
    type Entity = Product;

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            (COL_ID_TOKO, self.store_id.into()),
            (COL_ID_CATEGORY, self.category_id.into()),
            ("nama_produk", self.name.as_str().into()),
            (COL_SLUG, self.slug.as_str().into()),
            ("harga_reseller", self.reseller_price.into()),
            ("harga_konsumen", self.consumer_price.into()),
            ("stok", self.stock.into()),
            ("deskripsi", self.description.as_str().into()),
            ("created_at", self.created_at.into()),
            ("updated_at", self.updated_at.into()),
        ]
    }

    fn into_entity(self, id: Id<markers::Product>, _now: DateTime<Utc>) -> Product {
        Product {
            id,
            store_id: self.store_id,
            category_id: self.category_id,
            name: self.name,
            slug: self.slug,
            reseller_price: self.reseller_price,
            consumer_price: self.consumer_price,
            stock: self.stock,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
