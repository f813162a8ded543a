//! User Entity (`users`)

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{Id, UserId, markers};
use serde::Serialize;
use sqlx::FromRow;

use super::{COL_ID, Entity, NewEntity, UniqueKey};
use crate::filter::Value;

pub const TABLE: &str = "users";

pub const COL_EMAIL: &str = "email";
pub const COL_IS_ADMIN: &str = "is_admin";

/// Unique index on `users.email`
pub const EMAIL_KEY: &str = "users_email_key";

/// Registered account. The password hash is never serialized.
#[derive(Clone, Serialize, FromRow)]
pub struct User {
    #[sqlx(try_from = "i64")]
    pub id: UserId,

    #[serde(rename = "nama")]
    #[sqlx(rename = "nama")]
    pub name: String,

    /// Argon2id PHC string
    #[serde(skip_serializing)]
    #[sqlx(rename = "kata_sandi")]
    pub password_hash: String,

    #[serde(rename = "no_telp")]
    #[sqlx(rename = "no_telp")]
    pub phone: String,

    #[serde(rename = "tanggal_lahir")]
    #[sqlx(rename = "tanggal_lahir")]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "jenis_kelamin")]
    #[sqlx(rename = "jenis_kelamin")]
    pub gender: String,

    #[serde(rename = "tentang")]
    #[sqlx(rename = "tentang")]
    pub bio: String,

    #[serde(rename = "pekerjaan")]
    #[sqlx(rename = "pekerjaan")]
    pub occupation: String,

    pub email: String,

    #[serde(rename = "id_provinsi")]
    #[sqlx(rename = "id_provinsi")]
    pub province_id: String,

    #[serde(rename = "id_kota")]
    #[sqlx(rename = "id_kota")]
    pub city_id: String,

    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}

impl Entity for User {
    type Marker = markers::User;

    const TABLE: &'static str = TABLE;

    const UNIQUE: &'static [UniqueKey] = &[UniqueKey {
        name: EMAIL_KEY,
        columns: &[COL_EMAIL],
    }];

    fn id(&self) -> UserId {
        self.id
    }

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name {
            COL_ID => self.id.into(),
            "nama" => self.name.as_str().into(),
            "no_telp" => self.phone.as_str().into(),
            "tanggal_lahir" => self.birth_date.into(),
            "jenis_kelamin" => self.gender.as_str().into(),
            "tentang" => self.bio.as_str().into(),
            "pekerjaan" => self.occupation.as_str().into(),
            COL_EMAIL => self.email.as_str().into(),
            "id_provinsi" => self.province_id.as_str().into(),
            "id_kota" => self.city_id.as_str().into(),
            COL_IS_ADMIN => self.is_admin.into(),
            _ => return None,
        })
    }
}

/// Validated registration data, ready to insert
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: String,
    pub bio: String,
    pub occupation: String,
    pub email: String,
    pub province_id: String,
    pub city_id: String,
    pub is_admin: bool,
}

impl NewEntity for NewUser {
    type Entity = User;

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("nama", self.name.as_str().into()),
            ("kata_sandi", self.password_hash.as_str().into()),
            ("no_telp", self.phone.as_str().into()),
            ("tanggal_lahir", self.birth_date.into()),
            ("jenis_kelamin", self.gender.as_str().into()),
            ("tentang", self.bio.as_str().into()),
            ("pekerjaan", self.occupation.as_str().into()),
            (COL_EMAIL, self.email.as_str().into()),
            ("id_provinsi", self.province_id.as_str().into()),
            ("id_kota", self.city_id.as_str().into()),
            (COL_IS_ADMIN, self.is_admin.into()),
        ]
    }

    fn into_entity(self, id: Id<markers::User>, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            password_hash: self.password_hash,
            phone: self.phone,
            birth_date: self.birth_date,
            gender: self.gender,
            bio: self.bio,
            occupation: self.occupation,
            email: self.email,
            province_id: self.province_id,
            city_id: self.city_id,
            is_admin: self.is_admin,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = NewUser {
            name: "Ani".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            phone: "0812".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 31),
            gender: "P".into(),
            bio: String::new(),
            occupation: String::new(),
            email: "a@example.com".into(),
            province_id: "31".into(),
            city_id: "3171".into(),
            is_admin: false,
        }
        .into_entity(UserId::new(1), Utc::now());

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("kata_sandi").is_none());
        assert!(!json.to_string().contains("argon2"));
        assert_eq!(json["nama"], "Ani");
        assert_eq!(json["tanggal_lahir"], "1990-01-31");
        assert_eq!(json["id"], 1);
    }
}
