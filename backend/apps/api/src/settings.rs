//! Process configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::time::Duration;

use auth::AuthConfig;
use market::MarketConfig;
use platform::crypto::{SECRET_LEN, from_base64};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub market: MarketConfig,
    pub frontend_origins: Vec<HeaderValue>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `lookup` returns the raw variable; `dev` allows a random token secret
    pub fn from_lookup<F>(lookup: F, dev: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = var("BIND_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .trim()
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let mut auth = match var("TOKEN_SECRET") {
            Some(b64) => {
                let secret = from_base64(&b64).context("TOKEN_SECRET must be base64")?;
                if secret.len() != SECRET_LEN {
                    bail!("TOKEN_SECRET must decode to {SECRET_LEN} bytes");
                }
                AuthConfig {
                    token_secret: secret,
                    ..AuthConfig::default()
                }
            }
            None if dev => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret");
                AuthConfig::development()
            }
            None => bail!("TOKEN_SECRET must be set in production"),
        };

        if let Some(v) = var("TOKEN_TTL_SECS") {
            let secs: u64 = v
                .trim()
                .parse()
                .context("TOKEN_TTL_SECS must be a whole number of seconds")?;
            auth.token_ttl = Duration::from_secs(secs);
        }
        auth.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        let mut market = MarketConfig::default();
        if let Some(v) = var("ENFORCE_OWNERSHIP") {
            market.enforce_ownership = parse_flag(&v)
                .with_context(|| format!("ENFORCE_OWNERSHIP must be true or false, got {v:?}"))?;
        }

        let frontend_origins = var("FRONTEND_ORIGINS")
            .as_deref()
            .unwrap_or(DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            auth,
            market,
            frontend_origins,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let s = Settings::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/market")]), true)
            .unwrap();
        assert_eq!(s.bind_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(s.max_connections, 5);
        assert_eq!(s.auth.token_secret.len(), SECRET_LEN);
        assert_eq!(s.auth.token_ttl, Duration::from_secs(86_400));
        assert!(s.auth.password_pepper.is_none());
        assert!(s.market.enforce_ownership);
        assert_eq!(s.frontend_origins.len(), 2);
    }

    #[test]
    fn test_database_url_required() {
        assert!(Settings::from_lookup(lookup(&[]), true).is_err());
    }

    #[test]
    fn test_release_requires_token_secret() {
        let vars = [("DATABASE_URL", "postgres://localhost/market")];
        assert!(Settings::from_lookup(lookup(&vars), false).is_err());
    }

    #[test]
    fn test_token_secret_length_checked() {
        let short = platform::crypto::to_base64(&[7u8; 16]);
        let vars = [
            ("DATABASE_URL", "postgres://localhost/market"),
            ("TOKEN_SECRET", short.as_str()),
        ];
        assert!(Settings::from_lookup(lookup(&vars), false).is_err());
    }

    #[test]
    fn test_overrides() {
        let secret = platform::crypto::to_base64(&[7u8; SECRET_LEN]);
        let vars = [
            ("DATABASE_URL", "postgres://localhost/market"),
            ("TOKEN_SECRET", secret.as_str()),
            ("TOKEN_TTL_SECS", "3600"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("ENFORCE_OWNERSHIP", "false"),
            ("PASSWORD_PEPPER", "lada"),
        ];
        let s = Settings::from_lookup(lookup(&vars), false).unwrap();
        assert_eq!(s.auth.token_secret, vec![7u8; SECRET_LEN]);
        assert_eq!(s.auth.token_ttl, Duration::from_secs(3600));
        assert_eq!(s.bind_addr.port(), 9000);
        assert!(!s.market.enforce_ownership);
        assert_eq!(s.auth.password_pepper.as_deref(), Some(b"lada".as_slice()));
    }

    #[test]
    fn test_bad_flag() {
        let vars = [
            ("DATABASE_URL", "postgres://localhost/market"),
            ("ENFORCE_OWNERSHIP", "kadang"),
        ];
        assert!(Settings::from_lookup(lookup(&vars), true).is_err());
    }
}
