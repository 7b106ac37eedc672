//! Server configuration
//!
//! Read from environment variables. `main` loads a `.env` file first, so
//! values there behave like exported variables.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind to (default: "127.0.0.1")
    pub host: String,

    /// Port to bind to (default: 8080)
    pub port: u16,

    /// MySQL connection URL. `None` selects the in-memory store.
    pub database_url: Option<String>,

    /// Debug logging (default: true)
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: None,
            debug: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let debug = lookup("DEBUG")
            .map(|raw| raw.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.debug);

        Ok(Self {
            host,
            port,
            database_url,
            debug,
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
