//! Client configuration.
//!
//! A [`Config`] is an explicit value owned by one [`HetznerDns`](crate::HetznerDns)
//! instance. Nothing is read from global state unless [`Config::from_env`] is
//! called.

use std::env;
use std::fmt;

use crate::error::{Error, ValidationError};
use crate::HttpClientConfig;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://dns.hetzner.com";

/// Default ceiling on the number of pages a zone listing may fetch.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "HETZNER_DNS_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "HETZNER_DNS_BASE_URL";

/// Settings for a [`HetznerDns`](crate::HetznerDns) client.
///
/// The base URL and token are checked when the client is built, not here.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use hetznerdns::{Config, HttpClientConfig};
///
/// let config = Config::new("token")
///     .base_url("http://127.0.0.1:8080")
///     .max_pages(50)
///     .http(HttpClientConfig::new().timeout(Duration::from_secs(5)));
/// assert_eq!(config.get_max_pages(), 50);
/// ```
#[derive(Clone)]
pub struct Config {
    pub(crate) token: String,
    pub(crate) base_url: String,
    pub(crate) http: HttpClientConfig,
    pub(crate) max_pages: u32,
}

impl Config {
    /// Creates a configuration for the production API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpClientConfig::default(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Reads the token from `HETZNER_DNS_API_TOKEN` and, if set, the base URL
    /// from `HETZNER_DNS_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        let token = env::var(TOKEN_ENV).map_err(|_| ValidationError::Missing {
            parameter: TOKEN_ENV,
        })?;
        let mut config = Self::new(token);
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config = config.base_url(base_url);
        }
        Ok(config)
    }

    /// Sets the API base URL. The `/api/v1` prefix is added per request.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the HTTP transport settings.
    pub fn http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Sets the maximum number of pages a zone listing may fetch.
    ///
    /// Values below 1 are raised to 1.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Returns the configured page ceiling.
    pub fn get_max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Returns the configured base URL.
    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}
