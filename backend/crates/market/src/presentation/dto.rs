//! Data Transfer Objects
//!
//! Urlencoded form bodies with the marketplace's wire field names. Every
//! field is optional at the parsing layer; `into_input` applies the rules
//! and reports the first offending field.

use kernel::id::{StoreId, UserId};
use serde::Deserialize;

use crate::application::{
    CreateAddressInput, CreateCategoryInput, CreateProductInput, CreateStoreInput,
    CreateTransactionInput,
};
use crate::domain::field::{non_negative, optional_text, positive_id, required_text};
use crate::error::MarketResult;

/// POST /users/{id}/store
#[derive(Debug, Default, Deserialize)]
pub struct StoreForm {
    pub nama_toko: Option<String>,
    pub url_toko: Option<String>,
}

impl StoreForm {
    pub fn into_input(self, user_id: UserId) -> MarketResult<CreateStoreInput> {
        Ok(CreateStoreInput {
            user_id,
            name: required_text("nama_toko", self.nama_toko)?,
            url: optional_text(self.url_toko),
        })
    }
}

/// POST /users/{id}/address
#[derive(Debug, Default, Deserialize)]
pub struct AddressForm {
    pub judul_alamat: Option<String>,
    pub nama_penerima: Option<String>,
    pub no_telp: Option<String>,
    pub detail_alamat: Option<String>,
}

impl AddressForm {
    pub fn into_input(self, user_id: UserId) -> MarketResult<CreateAddressInput> {
        Ok(CreateAddressInput {
            user_id,
            title: required_text("judul_alamat", self.judul_alamat)?,
            recipient: optional_text(self.nama_penerima),
            phone: optional_text(self.no_telp),
            detail: optional_text(self.detail_alamat),
        })
    }
}

/// POST /categories
#[derive(Debug, Default, Deserialize)]
pub struct CategoryForm {
    pub nama_kategori: Option<String>,
}

impl CategoryForm {
    pub fn into_input(self) -> MarketResult<CreateCategoryInput> {
        Ok(CreateCategoryInput {
            name: required_text("nama_kategori", self.nama_kategori)?,
        })
    }
}

/// POST /stores/{id}/products
#[derive(Debug, Default, Deserialize)]
pub struct ProductForm {
    pub id_category: Option<String>,
    pub nama_produk: Option<String>,
    pub harga_reseller: Option<String>,
    pub harga_konsumen: Option<String>,
    pub stok: Option<String>,
    pub deskripsi: Option<String>,
}

impl ProductForm {
    pub fn into_input(self, store_id: StoreId) -> MarketResult<CreateProductInput> {
        Ok(CreateProductInput {
            store_id,
            category_id: positive_id("id_category", self.id_category.as_deref())?,
            name: required_text("nama_produk", self.nama_produk)?,
            reseller_price: non_negative("harga_reseller", self.harga_reseller.as_deref())?,
            consumer_price: non_negative("harga_konsumen", self.harga_konsumen.as_deref())?,
            stock: non_negative("stok", self.stok.as_deref())?,
            description: optional_text(self.deskripsi),
        })
    }
}

/// POST /users/{id}/transactions
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    pub id_alamat: Option<String>,
    pub harga_total: Option<String>,
    pub metode_pembayaran: Option<String>,
}

impl TransactionForm {
    pub fn into_input(self, user_id: UserId) -> MarketResult<CreateTransactionInput> {
        Ok(CreateTransactionInput {
            user_id,
            address_id: positive_id("id_alamat", self.id_alamat.as_deref())?,
            total_price: non_negative("harga_total", self.harga_total.as_deref())?,
            payment_method: required_text("metode_pembayaran", self.metode_pembayaran)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;

    fn product_form() -> ProductForm {
        ProductForm {
            id_category: Some("1".into()),
            nama_produk: Some("Kaos Polos".into()),
            harga_reseller: Some("40000".into()),
            harga_konsumen: Some("50000".into()),
            stok: Some("10".into()),
            deskripsi: None,
        }
    }

    #[test]
    fn test_product_form_parses() {
        let input = product_form().into_input(StoreId::new(1)).unwrap();
        assert_eq!(input.category_id.get(), 1);
        assert_eq!(input.consumer_price, 50_000);
        assert_eq!(input.stock, 10);
        assert!(input.description.is_empty());
    }

    #[test]
    fn test_product_form_rejects_non_numeric_price() {
        let form = ProductForm {
            harga_konsumen: Some("lima puluh ribu".into()),
            ..product_form()
        };
        let err = form.into_input(StoreId::new(1)).unwrap_err();
        assert!(matches!(err, MarketError::InvalidInput { field: "harga_konsumen", .. }));
    }

    #[test]
    fn test_transaction_form_requires_payment_method() {
        let form = TransactionForm {
            id_alamat: Some("1".into()),
            harga_total: Some("150000".into()),
            metode_pembayaran: Some("  ".into()),
        };
        let err = form.into_input(UserId::new(1)).unwrap_err();
        assert!(matches!(err, MarketError::InvalidInput { field: "metode_pembayaran", .. }));
    }

    #[test]
    fn test_store_form_url_is_optional() {
        let input = StoreForm {
            nama_toko: Some("Toko Budi".into()),
            url_toko: None,
        }
        .into_input(UserId::new(1))
        .unwrap();
        assert!(input.url.is_empty());
    }
}
