//! Configuration management for stackgraph
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! ## Platform connection
//! - `CF_API_URL`: platform API endpoint - **required**
//! - `CF_API_TOKEN`: OAuth bearer token for the platform API - **required**
//! - `STACKGRAPH_REQUEST_TIMEOUT`: per-request timeout in seconds - default: "30"
//!
//! ## HTTP surface
//! - `AUTH_USER` / `AUTH_PASS`: basic-auth credentials for the discovery
//!   endpoint - **required** when serving
//! - `HOST`: bind address - default: "0.0.0.0"
//! - `PORT`: bind port - default: "8080"
//!
//! ## Logging
//! - `STACKGRAPH_LOG_LEVEL`: logging level - default: "info" (`RUST_LOG`
//!   takes precedence when set)

use std::env;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// Failed to parse a configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: &'static str, error: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Connection settings for the platform API.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub api_url: String,
    pub api_token: String,
    pub request_timeout: Duration,
}

impl CloudConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = require_var("CF_API_URL")?;
        let api_token = require_var("CF_API_TOKEN")?;

        let request_timeout_secs = match env::var("STACKGRAPH_REQUEST_TIMEOUT") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::ParseError {
                field: "STACKGRAPH_REQUEST_TIMEOUT",
                error: e.to_string(),
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            api_token,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            return Err(ConfigError::ValidationFailed(format!(
                "CF_API_URL is not a valid URL: {}",
                self.api_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout > Duration::from_secs(600) {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the HTTP surface.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub auth_user: String,
    pub auth_pass: String,
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_user = require_var("AUTH_USER")?;
        let auth_pass = require_var("AUTH_PASS")?;

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::ParseError {
                field: "PORT",
                error: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            auth_user,
            auth_pass,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Full service configuration: platform connection plus HTTP surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cloud: CloudConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud: CloudConfig::from_env()?,
            http: HttpConfig::from_env()?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cloud.validate()
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
