//! Client configuration loaded from the environment.

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "http://localhost:8080";
pub const DEFAULT_PAGE_SIZE: u64 = 6;

pub const HOST_VAR: &str = "ACCOUNTS_API_HOST";
pub const PAGE_SIZE_VAR: &str = "ACCOUNTS_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the accounts service, e.g. `http://localhost:8080`.
    pub host: String,
    /// Page size used by `AccountClient::gather_all_accounts`.
    pub page_size: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Read `ACCOUNTS_API_HOST` and `ACCOUNTS_PAGE_SIZE`, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: PAGE_SIZE_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(config)
    }
}
