//! Typed async client for the [Hetzner DNS public API](https://dns.hetzner.com/api-docs).
//!
//! The client covers zones, records and zone files:
//!
//! - [`ZoneService`]: list (paginated), get, create, update, delete, plus zone
//!   file validation, export and import.
//! - [`RecordService`]: list by zone, get, create, update, delete, plus bulk
//!   create and update.
//!
//! Both services share one [`api::Client`] that owns the base URL and the API
//! token. Either may be changed at runtime through [`HetznerDns::set_base_url`]
//! and [`HetznerDns::set_token`]; the change applies to the next request.
//!
//! # Example
//!
//! ```no_run
//! use hetznerdns::{HetznerDns, Record, RecordType, ZoneRequest};
//!
//! # async fn example() -> Result<(), hetznerdns::Error> {
//! let dns = HetznerDns::new("your_api_token")?;
//!
//! // List all zones
//! for zone in dns.zones().list_all_zones().await? {
//!     println!("Zone: {} (ID: {})", zone.name, zone.id);
//! }
//!
//! // Create a zone and add a record to it
//! let zone = dns.zones().create_zone(&ZoneRequest::new("example.com").ttl(3600)).await?;
//! let record = Record::new(&zone.id, "www", RecordType::A, "192.0.2.1");
//! dns.records().create_record(&record).await?;
//!
//! // Back up the zone file
//! let zone_file = dns.zones().export_zone_file(&zone.id).await?;
//! println!("{zone_file}");
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`Error`]. Required identifiers are checked before
//! anything is sent, so a blank ID fails with [`Error::Validation`] without a
//! network round trip. Nothing is retried.
//!
//! # Logging
//!
//! Requests and responses are reported through [`tracing`] at `debug` level.
//! The API token is never logged.

pub mod api;
pub mod config;
pub mod error;
pub mod record;
pub mod types;
pub mod validation;
pub mod zone;

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

pub use config::Config;
pub use error::{ApiError, Error, ValidationError};
pub use record::RecordService;
pub use types::{
    Meta, Pagination, Record, RecordType, TxtVerification, Zone, ZoneFileValidation, ZonePage,
    ZoneRequest, ZoneStatus,
};
pub use zone::ZoneService;

/// HTTP transport settings applied when the underlying client is built.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use hetznerdns::HttpClientConfig;
///
/// let config = HttpClientConfig::new().timeout(Duration::from_secs(10));
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Local address outgoing connections are bound to.
    pub local_address: Option<IpAddr>,
    /// Network interface outgoing connections are bound to.
    ///
    /// Only honored on Linux-like targets.
    pub interface: Option<String>,
    /// Total request timeout. Defaults to 30 seconds when `None`.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Creates a configuration with every setting left at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds outgoing connections to `addr`.
    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.local_address = Some(addr);
        self
    }

    /// Binds outgoing connections to the named interface.
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    /// Sets the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Entry point of the Hetzner DNS API client.
///
/// Cloning is cheap: clones share the same transport, base URL and token.
#[derive(Debug, Clone)]
pub struct HetznerDns {
    api_client: Arc<api::Client>,
    zones: ZoneService,
    records: RecordService,
}

impl HetznerDns {
    /// Creates a client for the production API.
    ///
    /// # Arguments
    ///
    /// * `token` - Hetzner DNS API token, sent as `Auth-API-Token`
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_config(Config::new(token))
    }

    /// Creates a client with a custom API base URL.
    ///
    /// This is primarily useful for testing with mock servers. The fixed
    /// `/api/v1` prefix is appended to `base_url`.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, Error> {
        Self::with_config(Config::new(token).base_url(base_url))
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let api_client = Arc::new(api::Client::new(&config)?);
        Ok(Self {
            zones: ZoneService::new(Arc::clone(&api_client), config.max_pages),
            records: RecordService::new(Arc::clone(&api_client)),
            api_client,
        })
    }

    /// Replaces the API base URL.
    ///
    /// An unparsable URL is rejected and the previous one stays in effect.
    pub fn set_base_url(&self, base_url: &str) -> Result<(), Error> {
        self.api_client.set_base_url(base_url)
    }

    /// Replaces the API token used by every subsequent request.
    pub fn set_token(&self, token: &str) -> Result<(), Error> {
        self.api_client.set_token(token)
    }

    /// Returns the API base URL currently in effect.
    pub fn base_url(&self) -> Url {
        self.api_client.base_url()
    }

    /// Zone operations.
    pub fn zones(&self) -> &ZoneService {
        &self.zones
    }

    /// Record operations.
    pub fn records(&self) -> &RecordService {
        &self.records
    }

    /// The shared low-level client, for endpoints without a typed wrapper.
    pub fn api_client(&self) -> &api::Client {
        &self.api_client
    }
}
