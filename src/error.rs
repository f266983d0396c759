//! Error types returned by the Hetzner DNS client.
//!
//! Every operation returns [`Error`]. The variants map one-to-one onto the
//! ways a call can fail:
//!
//! | Failure | Variant |
//! |---------|---------|
//! | Invalid base URL or token | [`Error::Url`], [`Error::InvalidToken`], [`Error::Client`] |
//! | Blank, absent or `.`/`..` required parameter | [`Error::Validation`] |
//! | Connection, TLS or timeout failure | [`Error::Request`] |
//! | Malformed JSON | [`Error::Serialization`] |
//! | Status code outside the accepted set | [`Error::UnexpectedStatus`] |
//! | Error object embedded in a 2xx body | [`Error::Api`] |
//!
//! None of them are retried by the client.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that may occur when interacting with the Hetzner DNS API.
#[derive(Debug, Error)]
pub enum Error {
    /// A base URL or request URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The API token cannot be sent as a header value.
    #[error("invalid API token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A required parameter was absent or blank. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An HTTP request error occurred.
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A JSON body could not be encoded or decoded.
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered with a status code the operation does not accept.
    ///
    /// Displays as the HTTP status line, e.g. `404 Not Found`.
    #[error("{status}")]
    UnexpectedStatus {
        /// Status returned by the server.
        status: StatusCode,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The server embedded an error object in an otherwise successful response.
    #[error("API error: {0}")]
    Api(ApiError),

    /// A response decoded cleanly but did not carry the expected object.
    #[error("response did not contain a {0}")]
    MissingPayload(&'static str),

    /// The zone listing did not reach its last page within the configured ceiling.
    #[error("zone listing exceeded the limit of {limit} pages")]
    PageLimitExceeded {
        /// The configured page ceiling.
        limit: u32,
    },

    /// A plain-text response body was not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Returns the HTTP status if this is an [`Error::UnexpectedStatus`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Request(err) => err.status(),
            _ => None,
        }
    }

    /// Returns `true` if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns `true` if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Error object embedded in a response body.
///
/// Hetzner reports some domain failures (an unparsable zone file, a zone
/// operation that was rejected) inside a 2xx JSON body instead of through the
/// status code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Error code.
    #[serde(default)]
    pub code: i64,
    /// Error message.
    #[serde(default, alias = "string")]
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

/// A required parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No value was provided.
    #[error("{parameter} is missing")]
    Missing {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// The value is empty or whitespace only.
    #[error("{parameter} is empty")]
    Blank {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// The value is `.` or `..` and cannot address a single resource.
    #[error("{parameter} is not a valid identifier")]
    DotSegment {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl ValidationError {
    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            ValidationError::Missing { parameter }
            | ValidationError::Blank { parameter }
            | ValidationError::DotSegment { parameter } => parameter,
        }
    }
}
