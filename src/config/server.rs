use std::{env, net::SocketAddr, path::PathBuf};

use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/langify.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings for the HTTP server, read from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!(
                "DATABASE_URL not set; falling back to {}",
                DEFAULT_DATABASE_URL
            );
            defaults.database_url.clone()
        });

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = parse_var("PORT", "port number", defaults.port)?;
        let max_connections = parse_var(
            "DB_MAX_CONNECTIONS",
            "connection count",
            defaults.max_connections,
        )?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                expected: "positive connection count",
                value: "0".to_string(),
            });
        }

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
            static_dir,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "HOST",
                expected: "socket address host",
                value: self.host.clone(),
            })
    }
}

fn parse_var<T: std::str::FromStr>(
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key,
                expected,
                value: raw,
            })
        }
        _ => Ok(default),
    }
}
