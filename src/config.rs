//! Management API connection settings
//!
//! Values come from the environment (`TWIN_MANAGEMENT_BASE_URL`,
//! `TWIN_ACCESS_TOKEN`, `TWIN_HTTP_TIMEOUT_SECS`) or are set directly by the
//! host program.

use std::time::Duration;

use url::Url;

use crate::error::{ProvisionError, Result};

pub const BASE_URL_VAR: &str = "TWIN_MANAGEMENT_BASE_URL";
pub const ACCESS_TOKEN_VAR: &str = "TWIN_ACCESS_TOKEN";
pub const TIMEOUT_VAR: &str = "TWIN_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct TwinConfig {
    /// Always ends in `/` so relative paths join beneath it
    pub base_url: Url,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl TwinConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a config from any key lookup (environment, .env map, test fixture)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).ok_or_else(|| ProvisionError::Config {
            message: format!("{} environment variable not set", BASE_URL_VAR),
        })?;

        let mut config = Self::new(&base_url)?;

        if let Some(token) = lookup(ACCESS_TOKEN_VAR) {
            config = config.with_access_token(token);
        }

        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| ProvisionError::Config {
                message: format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_VAR, secs
                ),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| ProvisionError::Config {
        message: format!("invalid base URL '{}': {}", trimmed, e),
    })?;

    if url.cannot_be_a_base() {
        return Err(ProvisionError::Config {
            message: format!("base URL '{}' cannot have paths joined to it", trimmed),
        });
    }

    Ok(url)
}
