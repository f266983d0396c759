//! Zone operations.
//!
//! See the [Zones API](https://dns.hetzner.com/api-docs#tag/Zones).

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::api::{self, Request};
use crate::error::Error;
use crate::types::{Zone, ZoneFileValidation, ZonePage, ZoneRequest, ZoneResponse};
use crate::validation::{require_non_blank, require_segment};

const ZONES_PATH: &str = "/zones";
const ZONE_FILE_VALIDATE_PATH: &str = "/zones/file/validate";

/// Page size used when listing every zone.
pub const PER_PAGE: u32 = 100;

/// Client for the zone endpoints.
#[derive(Debug, Clone)]
pub struct ZoneService {
    api_client: Arc<api::Client>,
    max_pages: u32,
}

impl ZoneService {
    pub(crate) fn new(api_client: Arc<api::Client>, max_pages: u32) -> Self {
        Self {
            api_client,
            max_pages,
        }
    }

    /// Returns every zone of the account.
    pub async fn list_all_zones(&self) -> Result<Vec<Zone>, Error> {
        self.list_zones_by_name(None).await
    }

    /// Returns every zone whose name matches `name`, or every zone when `None`.
    ///
    /// Pages are fetched one after another until the page number passes the
    /// server's `last_page`. A failing page aborts the listing; zones from
    /// earlier pages are discarded.
    ///
    /// As soon as the server reports a `last_page` beyond the configured page
    /// ceiling the listing fails with [`Error::PageLimitExceeded`] without
    /// fetching further pages.
    pub async fn list_zones_by_name(&self, name: Option<&str>) -> Result<Vec<Zone>, Error> {
        let mut zones = Vec::new();
        let mut page = 1;
        let mut last_page = 1;

        while page <= last_page {
            let response = self.list_zones_page(page, PER_PAGE, name).await?;
            // Without pagination metadata the current page is the last one.
            last_page = response.last_page().unwrap_or(page);
            debug!(page, last_page, count = response.zones.len(), "fetched zone page");

            if last_page > self.max_pages {
                return Err(Error::PageLimitExceeded {
                    limit: self.max_pages,
                });
            }

            zones.extend(response.zones);
            page += 1;
        }

        Ok(zones)
    }

    /// Fetches a single page of the zone listing.
    pub async fn list_zones_page(
        &self,
        page: u32,
        per_page: u32,
        name: Option<&str>,
    ) -> Result<ZonePage, Error> {
        let mut request = Request::json(Method::GET, ZONES_PATH)
            .query("page", page)
            .query("per_page", per_page);
        if let Some(name) = name {
            request = request.query("search_name", name);
        }
        self.api_client.execute_json(request).await
    }

    /// Looks up the zone named exactly `name`.
    ///
    /// The comparison ignores ASCII case and a trailing dot.
    pub async fn find_zone_by_name(&self, name: &str) -> Result<Option<Zone>, Error> {
        let wanted = normalize_name(require_non_blank("name", name)?);
        let zones = self.list_zones_by_name(Some(&wanted)).await?;
        Ok(zones
            .into_iter()
            .find(|zone| normalize_name(&zone.name) == wanted))
    }

    /// Returns the zone with the given ID.
    pub async fn get_zone(&self, zone_id: &str) -> Result<Zone, Error> {
        let zone_id = require_segment("zone_id", zone_id)?;
        let request = Request::json(Method::GET, ZONES_PATH).segment(zone_id);
        self.api_client
            .execute_json::<ZoneResponse>(request)
            .await?
            .into_result()
    }

    /// Creates a zone.
    pub async fn create_zone(&self, request: &ZoneRequest) -> Result<Zone, Error> {
        let request = Request::json(Method::POST, ZONES_PATH)
            .accept(&[StatusCode::OK, StatusCode::CREATED])
            .json_body(request)?;
        self.api_client
            .execute_json::<ZoneResponse>(request)
            .await?
            .into_result()
    }

    /// Updates the zone with the given ID.
    pub async fn update_zone(&self, zone_id: &str, request: &ZoneRequest) -> Result<Zone, Error> {
        let zone_id = require_segment("zone_id", zone_id)?;
        let request = Request::json(Method::PUT, ZONES_PATH)
            .segment(zone_id)
            .json_body(request)?;
        self.api_client
            .execute_json::<ZoneResponse>(request)
            .await?
            .into_result()
    }

    /// Deletes the zone with the given ID.
    ///
    /// Deleting a zone that does not exist succeeds.
    pub async fn delete_zone(&self, zone_id: &str) -> Result<(), Error> {
        let zone_id = require_segment("zone_id", zone_id)?;
        let request = Request::json(Method::DELETE, ZONES_PATH)
            .segment(zone_id)
            .accept(&[StatusCode::OK, StatusCode::NOT_FOUND]);
        self.api_client.execute(request).await.map(|_| ())
    }

    /// Validates a zone file in BIND format without importing it.
    ///
    /// A zone file the server rejects is reported as [`Error::Api`] even
    /// though the response status was accepted.
    pub async fn validate_zone_file(&self, zone_file: &str) -> Result<ZoneFileValidation, Error> {
        let zone_file = require_non_blank("zone_file", zone_file)?;
        let request = Request::text(Method::POST, ZONE_FILE_VALIDATE_PATH).text_body(zone_file);
        let mut validation: ZoneFileValidation = self.api_client.execute_json(request).await?;
        match validation.error.take() {
            Some(err) => Err(err.into()),
            None => Ok(validation),
        }
    }

    /// Exports the zone file of the zone with the given ID.
    ///
    /// The response body is returned exactly as received.
    pub async fn export_zone_file(&self, zone_id: &str) -> Result<String, Error> {
        let zone_id = require_segment("zone_id", zone_id)?;
        let request = Request::text(Method::GET, ZONES_PATH)
            .segment(zone_id)
            .segment("export");
        let body = self.api_client.execute(request).await?;
        Ok(String::from_utf8(body)?)
    }

    /// Replaces the records of the zone with the given ID by those of `zone_file`.
    pub async fn import_zone_file(&self, zone_id: &str, zone_file: &str) -> Result<Zone, Error> {
        let zone_id = require_segment("zone_id", zone_id)?;
        let zone_file = require_non_blank("zone_file", zone_file)?;
        let request = Request::text(Method::POST, ZONES_PATH)
            .segment(zone_id)
            .segment("import")
            .text_body(zone_file);
        self.api_client
            .execute_json::<ZoneResponse>(request)
            .await?
            .into_result()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
