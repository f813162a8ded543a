//! Data Transfer Objects
//!
//! JSON bodies for `/register` and `/login`, using the marketplace's wire
//! field names.

use persistence::entity::{store::Store, user::User};
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{LoginInput, RegisterInput};

/// POST /register
///
/// `is_admin` is not accepted; unknown fields are ignored.
#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub kata_sandi: String,
    #[serde(default)]
    pub no_telp: String,
    #[serde(default)]
    pub tanggal_lahir: Option<String>,
    #[serde(default)]
    pub jenis_kelamin: String,
    #[serde(default)]
    pub tentang: String,
    #[serde(default)]
    pub pekerjaan: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id_provinsi: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id_kota: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        RegisterInput {
            name: req.nama,
            password: req.kata_sandi,
            phone: req.no_telp,
            birth_date: req.tanggal_lahir,
            gender: req.jenis_kelamin,
            bio: req.tentang,
            occupation: req.pekerjaan,
            email: req.email,
            province_id: req.id_provinsi,
            city_id: req.id_kota,
        }
    }
}

/// Response body for POST /register
#[derive(Serialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: User,
    pub store: Store,
}

/// POST /login
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub kata_sandi: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        LoginInput {
            email: req.email,
            password: req.kata_sandi,
        }
    }
}

/// Response body for POST /login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Region codes arrive as either `"31"` or `31`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}
