//! Wire types for the Hetzner DNS API.
//!
//! Field names follow the JSON documents exchanged with
//! `https://dns.hetzner.com/api/v1`. Everything the server may leave out is an
//! [`Option`], so "absent" and "zero" never collapse into the same value.

use core::fmt;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Zone Types
// =============================================================================

/// A DNS zone managed through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone ID assigned by the server.
    pub id: String,
    /// Domain name of the zone.
    pub name: String,
    /// Default TTL of the zone's records.
    #[serde(default)]
    pub ttl: Option<u32>,
    /// Authoritative name servers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ns: Vec<String>,
    #[serde(default)]
    pub paused: Option<bool>,
    #[serde(default)]
    pub status: Option<ZoneStatus>,
    /// Number of records in the zone.
    #[serde(default)]
    pub records_count: Option<u64>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub verified: Option<String>,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    /// Whether the zone is a secondary zone.
    #[serde(default)]
    pub is_secondary_dns: Option<bool>,
    #[serde(default)]
    pub legacy_dns_host: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub legacy_ns: Vec<String>,
    /// TXT record the server expects when verifying zone ownership.
    #[serde(default)]
    pub txt_verification: Option<TxtVerification>,
}

/// Verification status of a zone.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    Verified,
    Failed,
    Pending,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Ownership verification token of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtVerification {
    pub name: String,
    pub token: String,
}

/// Request body for creating or updating a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRequest {
    /// Domain name of the zone.
    pub name: String,
    /// Default TTL. Left to the server when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl ZoneRequest {
    /// Creates a request for the given domain name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl: None,
        }
    }

    /// Sets the default TTL of the zone.
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Single-zone response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ZoneResponse {
    #[serde(default)]
    pub zone: Option<Zone>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl ZoneResponse {
    /// Prefers an embedded error over the zone payload.
    pub fn into_result(self) -> Result<Zone, crate::Error> {
        if let Some(err) = self.error {
            return Err(err.into());
        }
        self.zone.ok_or(crate::Error::MissingPayload("zone"))
    }
}

/// One page of the zone listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZonePage {
    /// Zones on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub zones: Vec<Zone>,
    /// Pagination metadata reported by the server.
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl ZonePage {
    /// Returns the pagination metadata, if the server sent any.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref()?.pagination.as_ref()
    }

    /// Returns the last page number reported by the server.
    pub fn last_page(&self) -> Option<u32> {
        self.pagination()?.last_page
    }
}

/// Result of a zone file validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneFileValidation {
    /// Number of records the server parsed.
    #[serde(default)]
    pub parsed_records: Option<u64>,
    /// Records that parsed successfully.
    #[serde(default, deserialize_with = "null_as_default")]
    pub valid_records: Vec<Record>,
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
}

// =============================================================================
// Pagination Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub previous_page: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub total_entries: Option<u32>,
}

// =============================================================================
// Record Types
// =============================================================================

/// A DNS record belonging to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record ID. `None` until the server assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ID of the zone the record belongs to.
    #[serde(default)]
    pub zone_id: String,
    /// Record name relative to the zone (`@` for the apex).
    pub name: String,
    pub value: String,
    /// TTL in seconds. The zone default applies when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing)]
    pub created: Option<String>,
    #[serde(default, skip_serializing)]
    pub modified: Option<String>,
}

impl Record {
    /// Creates an unsaved record.
    pub fn new(
        zone_id: impl Into<String>,
        name: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record_type,
            id: None,
            zone_id: zone_id.into(),
            name: name.into(),
            value: value.into(),
            ttl: None,
            created: None,
            modified: None,
        }
    }

    /// Sets the TTL of the record.
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Sets the ID of the record, addressing an existing one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Single-record response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordResponse {
    #[serde(default)]
    pub record: Option<Record>,
}

/// Record listing envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
}

/// Request body of the bulk record endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct RecordsBody<'a> {
    pub records: &'a [Record],
}

/// DNS record type as accepted by the Hetzner API.
///
/// Types this client does not know are kept verbatim in [`RecordType::Other`]
/// so they survive a decode/encode cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// Host address.
    A,
    /// IPv6 host address.
    AAAA,
    /// Authoritative name server.
    NS,
    /// Mail exchange.
    MX,
    /// Canonical name for an alias.
    CNAME,
    /// Responsible person.
    RP,
    /// Text strings.
    TXT,
    /// Start of authority.
    SOA,
    /// Host information.
    HINFO,
    /// Server selection.
    SRV,
    /// DANE association.
    DANE,
    /// TLS certificate association.
    TLSA,
    /// Delegation signer.
    DS,
    /// Certification Authority Authorization.
    CAA,
    /// Domain name pointer.
    PTR,
    /// Any other type, as sent by the server.
    Other(String),
}

impl RecordType {
    /// Returns the type as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::NS => "NS",
            Self::MX => "MX",
            Self::CNAME => "CNAME",
            Self::RP => "RP",
            Self::TXT => "TXT",
            Self::SOA => "SOA",
            Self::HINFO => "HINFO",
            Self::SRV => "SRV",
            Self::DANE => "DANE",
            Self::TLSA => "TLSA",
            Self::DS => "DS",
            Self::CAA => "CAA",
            Self::PTR => "PTR",
            Self::Other(other) => other,
        }
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::AAAA,
            "NS" => Self::NS,
            "MX" => Self::MX,
            "CNAME" => Self::CNAME,
            "RP" => Self::RP,
            "TXT" => Self::TXT,
            "SOA" => Self::SOA,
            "HINFO" => Self::HINFO,
            "SRV" => Self::SRV,
            "DANE" => Self::DANE,
            "TLSA" => Self::TLSA,
            "DS" => Self::DS,
            "CAA" => Self::CAA,
            "PTR" => Self::PTR,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(record_type) => record_type,
            Err(never) => match never {},
        }
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
