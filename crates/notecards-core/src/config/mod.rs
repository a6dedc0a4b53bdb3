//! Note store configuration.
//!
//! The database location is read from the environment so builds are not tied
//! to a single hosted database.

use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the notes collection URL.
pub const DATABASE_URL_ENV: &str = "NOTECARDS_DATABASE_URL";

/// Optional environment variable bounding each store request, in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "NOTECARDS_REQUEST_TIMEOUT_SECS";

const URL_SCHEMES: [&str; 2] = ["https://", "http://"];

/// Where the notes collection lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Collection URL without the `.json` suffix, e.g.
    /// `https://example-default-rtdb.firebaseio.com/notes`
    pub database_url: String,
    /// `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl StoreConfig {
    /// Builds a config for an explicit collection URL.
    pub fn new(database_url: &str) -> Result<Self> {
        Ok(Self {
            database_url: normalize_database_url(database_url)?,
            request_timeout: None,
        })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Reads [`DATABASE_URL_ENV`] and [`REQUEST_TIMEOUT_ENV`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an injectable variable source.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let setting = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let Some(url) = setting(DATABASE_URL_ENV) else {
            return Err(Error::Config(format!("{DATABASE_URL_ENV} is not set")));
        };
        let config = Self::new(&url)?;

        match setting(REQUEST_TIMEOUT_ENV) {
            None => Ok(config),
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        Error::Config(format!(
                            "{REQUEST_TIMEOUT_ENV} must be a positive number of seconds, got '{raw}'"
                        ))
                    })?;
                Ok(config.with_request_timeout(Duration::from_secs(secs)))
            }
        }
    }
}

/// Normalizes a collection URL: requires an http(s) scheme and strips any
/// trailing `/` or `.json` suffix.
pub fn normalize_database_url(raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(Error::Config("database URL must not be empty".to_string()));
    }
    let Some(scheme) = URL_SCHEMES
        .into_iter()
        .find(|scheme| value.starts_with(scheme))
    else {
        return Err(Error::Config(format!(
            "database URL must include http:// or https://, got '{value}'"
        )));
    };

    let value = value.trim_end_matches('/');
    let value = value.strip_suffix(".json").unwrap_or(value);
    let value = value.trim_end_matches('/');
    if value.len() <= scheme.len() {
        return Err(Error::Config(format!(
            "database URL '{raw}' does not name a collection"
        )));
    }
    Ok(value.to_string())
}
