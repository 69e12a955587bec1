use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use axum::http::{HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

pub mod database;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set. Copy `.env.example` to `.env` and update credentials, or set it in your environment")]
    Missing(&'static str),

    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsSettings {
    #[default]
    Disabled,
    AnyOrigin,
    Origins(Vec<String>),
}

impl CorsSettings {
    /// Read `ENABLE_CORS` and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        Self::parse(
            env::var("ENABLE_CORS").ok().as_deref(),
            env::var("CORS_ALLOWED_ORIGINS").ok().as_deref(),
        )
    }

    /// An origin list wins over the enable flag; `*` means any origin.
    pub fn parse(enable: Option<&str>, allowed_origins: Option<&str>) -> Self {
        if let Some(list) = allowed_origins {
            if list.trim() == "*" {
                return CorsSettings::AnyOrigin;
            }
            let origins = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            return CorsSettings::Origins(origins);
        }

        match enable {
            Some("true") | Some("1") => CorsSettings::AnyOrigin,
            _ => CorsSettings::Disabled,
        }
    }

    pub fn layer(&self) -> Option<CorsLayer> {
        let base = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);

        match self {
            CorsSettings::Disabled => None,
            CorsSettings::AnyOrigin => Some(base.allow_origin(Any)),
            CorsSettings::Origins(list) => {
                let origins = list
                    .iter()
                    .filter_map(|s| HeaderValue::from_str(s).ok())
                    .collect::<Vec<HeaderValue>>();
                Some(base.allow_origin(AllowOrigin::list(origins)))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub cors: CorsSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: try_load("APP_PORT", "3002")?,
            database_url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            max_connections: try_load("DB_MAX_CONNECTIONS", "5")?,
            cors: CorsSettings::from_env(),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        match raw.parse::<SocketAddr>() {
            Ok(addr) => Ok(addr),
            Err(e) => Err(ConfigError::Invalid {
                key: "APP_HOST",
                reason: e.to_string(),
                value: raw,
            }),
        }
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
