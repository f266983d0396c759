//! Low-level Hetzner DNS API client.
//!
//! Every typed operation in [`ZoneService`](crate::ZoneService) and
//! [`RecordService`](crate::RecordService) goes through [`Client::execute`] or
//! [`Client::execute_json`]. Both can also be used directly for endpoints
//! without a typed wrapper.
//!
//! # API Reference
//!
//! - [Hetzner DNS Public API](https://dns.hetzner.com/api-docs)

use parking_lot::RwLock;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::validation::require_non_blank;

/// Versioned path prefix of every endpoint.
pub const API_BASE_PATH: &str = "/api/v1";

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "Auth-API-Token";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Encoding of a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Structured JSON body.
    Json,
    /// Raw text body, used for zone files.
    Text,
}

impl ContentType {
    /// Value of the `Content-Type` header.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json; charset=utf-8",
            ContentType::Text => "text/plain",
        }
    }
}

/// A single API request, built before it is handed to [`Client`].
///
/// By default only `200 OK` is accepted.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: Vec<String>,
    content_type: ContentType,
    accepted: Vec<StatusCode>,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a JSON request for `path` (relative to `/api/v1`).
    pub fn json(method: Method, path: &str) -> Self {
        Self::new(method, path, ContentType::Json)
    }

    /// Creates a plain-text request for `path` (relative to `/api/v1`).
    pub fn text(method: Method, path: &str) -> Self {
        Self::new(method, path, ContentType::Text)
    }

    fn new(method: Method, path: &str, content_type: ContentType) -> Self {
        Self {
            method,
            path: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            content_type,
            accepted: vec![StatusCode::OK],
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends one path segment.
    ///
    /// The segment is percent-encoded, so `/` or `?` inside an identifier
    /// cannot address a different endpoint.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.path.push(segment.into());
        self
    }

    /// Replaces the set of status codes treated as success.
    pub fn accept(mut self, statuses: &[StatusCode]) -> Self {
        self.accepted = statuses.to_vec();
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Sets a JSON body.
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Sets a raw text body, sent unmodified.
    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into().into_bytes());
        self
    }

    /// Returns the content type of the request.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Returns the status codes treated as success.
    pub fn accepted(&self) -> &[StatusCode] {
        &self.accepted
    }
}

#[derive(Debug)]
struct Settings {
    base_url: Url,
    token: HeaderValue,
}

/// Hetzner DNS API client.
///
/// Holds the HTTP client plus the base URL and token. The latter two sit
/// behind a lock; each request reads them once before it is sent.
#[derive(Debug)]
pub struct Client {
    http_client: reqwest::Client,
    settings: RwLock<Settings>,
}

impl Client {
    /// Creates a new API client from `config`.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let settings = Settings {
            base_url: Url::parse(&config.base_url)?,
            token: token_header(&config.token)?,
        };

        let mut builder = reqwest::Client::builder().timeout(
            config
                .http
                .timeout
                .unwrap_or(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        );

        if let Some(addr) = config.http.local_address {
            builder = builder.local_address(addr);
        }

        #[cfg(any(
            target_os = "android",
            target_os = "fuchsia",
            target_os = "linux",
            target_os = "macos",
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "illumos",
            target_os = "solaris",
        ))]
        if let Some(ref iface) = config.http.interface {
            builder = builder.interface(iface);
        }

        let http_client = builder.build().map_err(Error::Client)?;

        Ok(Self {
            http_client,
            settings: RwLock::new(settings),
        })
    }

    /// Returns the base URL currently in effect.
    pub fn base_url(&self) -> Url {
        self.settings.read().base_url.clone()
    }

    /// Parses and installs a new base URL.
    ///
    /// On a parse error the previous base URL is kept.
    pub fn set_base_url(&self, base_url: &str) -> Result<(), Error> {
        let parsed = Url::parse(base_url)?;
        self.settings.write().base_url = parsed;
        Ok(())
    }

    /// Installs a new API token.
    pub fn set_token(&self, token: &str) -> Result<(), Error> {
        let value = token_header(token)?;
        self.settings.write().token = value;
        Ok(())
    }

    /// Sends `request` and returns the raw response body.
    ///
    /// Fails with [`Error::UnexpectedStatus`] when the status code is not one
    /// of the request's accepted codes.
    pub async fn execute(&self, request: Request) -> Result<Vec<u8>, Error> {
        let accepted = request.accepted.clone();
        let (status, body) = self.send(request).await?;
        check_status(status, &accepted, &body)?;
        Ok(body)
    }

    /// Sends `request` and decodes the response body as JSON.
    ///
    /// The body is decoded before the status is checked, so malformed JSON is
    /// reported as [`Error::Serialization`] even when the status was accepted.
    pub async fn execute_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, Error> {
        let accepted = request.accepted.clone();
        let (status, body) = self.send(request).await?;
        let decoded = serde_json::from_slice(&body)?;
        check_status(status, &accepted, &body)?;
        Ok(decoded)
    }

    async fn send(&self, request: Request) -> Result<(StatusCode, Vec<u8>), Error> {
        let (url, token) = {
            let settings = self.settings.read();
            let url = request_url(&settings.base_url, &request.path, &request.query)?;
            (url, settings.token.clone())
        };

        debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self
            .http_client
            .request(request.method, url)
            .header(CONTENT_TYPE, request.content_type.as_str())
            .header(TOKEN_HEADER, token);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!(status = %status, "received response");
        trace!(body = %String::from_utf8_lossy(&body), "response body");

        Ok((status, body))
    }
}

fn token_header(token: &str) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(require_non_blank("token", token)?)?;
    value.set_sensitive(true);
    Ok(value)
}

fn request_url(
    base_url: &Url,
    path: &[String],
    query: &[(&'static str, String)],
) -> Result<Url, Error> {
    let mut url = base_url.join(API_BASE_PATH)?;
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .extend(path);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

fn check_status(status: StatusCode, accepted: &[StatusCode], body: &[u8]) -> Result<(), Error> {
    if accepted.contains(&status) {
        return Ok(());
    }
    debug!(status = %status, "unexpected status");
    Err(Error::UnexpectedStatus {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
