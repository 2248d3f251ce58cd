//! # Application State
//!
//! Server configuration and the state shared with request handlers.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use thiserror::Error;

/// Port used when neither `PORT` nor a CLI argument is given
pub const DEFAULT_PORT: u16 = 3001;

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid listen address {host}:{port}")]
    InvalidAddress { host: String, port: u16 },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the static test pages
    pub static_dir: PathBuf,
    /// Environment label (development, staging, ...)
    pub environment: String,
}

impl AppConfig {
    /// Load from `.env` and environment variables.
    ///
    /// A positional port argument wins over `PORT`, which is then not read.
    pub fn from_env(port_arg: Option<&str>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok(), port_arg)
    }

    /// Load from an arbitrary variable source
    pub fn from_vars<F>(var: F, port_arg: Option<&str>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match (port_arg, var("PORT")) {
            (Some(arg), _) => parse_port(arg)?,
            (None, Some(raw)) => parse_port(&raw)?,
            (None, None) => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    /// Builder: serve static pages from `dir`
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Resolve the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = || ConfigError::InvalidAddress {
            host: self.host.clone(),
            port: self.port,
        };

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }

    /// Path of the combined PayPal/Stripe page served at `/`
    pub fn unified_page(&self) -> PathBuf {
        self.static_dir.join("unified-payment.html")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("public"),
            environment: "development".to_string(),
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
