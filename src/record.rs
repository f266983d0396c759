//! Record operations.
//!
//! See the [Records API](https://dns.hetzner.com/api-docs#tag/Records).

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::api::{self, Request};
use crate::error::Error;
use crate::types::{Record, RecordList, RecordResponse, RecordsBody};
use crate::validation::{require_non_blank, require_present, require_segment};

const RECORDS_PATH: &str = "/records";
const BULK_PATH: &str = "/records/bulk";

/// Client for the record endpoints.
#[derive(Debug, Clone)]
pub struct RecordService {
    api_client: Arc<api::Client>,
}

impl RecordService {
    pub(crate) fn new(api_client: Arc<api::Client>) -> Self {
        Self { api_client }
    }

    /// Returns every record of the zone with the given ID.
    pub async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>, Error> {
        let zone_id = require_non_blank("zone_id", zone_id)?;
        let request = Request::json(Method::GET, RECORDS_PATH).query("zone_id", zone_id);
        let list: RecordList = self.api_client.execute_json(request).await?;
        Ok(list.records)
    }

    /// Returns the record with the given ID.
    pub async fn get_record(&self, record_id: &str) -> Result<Record, Error> {
        let record_id = require_segment("record_id", record_id)?;
        let request = Request::json(Method::GET, RECORDS_PATH).segment(record_id);
        self.decode_record(request).await
    }

    /// Creates a record. The record's `id` is ignored by the server.
    pub async fn create_record(&self, record: &Record) -> Result<Record, Error> {
        let request = Request::json(Method::POST, RECORDS_PATH)
            .accept(&[StatusCode::OK, StatusCode::CREATED])
            .json_body(record)?;
        self.decode_record(request).await
    }

    /// Creates several records in one request.
    ///
    /// Returns the records the server created, in the order it reports them.
    pub async fn create_records(&self, records: &[Record]) -> Result<Vec<Record>, Error> {
        let request = Request::json(Method::POST, BULK_PATH)
            .accept(&[StatusCode::OK, StatusCode::CREATED])
            .json_body(&RecordsBody { records })?;
        let list: RecordList = self.api_client.execute_json(request).await?;
        Ok(list.records)
    }

    /// Updates the record identified by `record.id`.
    pub async fn update_record(&self, record: &Record) -> Result<Record, Error> {
        let record_id = require_present("record_id", record.id.as_deref())?;
        let record_id = require_segment("record_id", record_id)?;
        let request = Request::json(Method::PUT, RECORDS_PATH)
            .segment(record_id)
            .json_body(record)?;
        self.decode_record(request).await
    }

    /// Updates several records in one request.
    ///
    /// Every record must carry an `id`; nothing is sent otherwise.
    pub async fn update_records(&self, records: &[Record]) -> Result<Vec<Record>, Error> {
        for record in records {
            require_present("record_id", record.id.as_deref())?;
        }
        let request = Request::json(Method::PUT, BULK_PATH).json_body(&RecordsBody { records })?;
        let list: RecordList = self.api_client.execute_json(request).await?;
        Ok(list.records)
    }

    /// Deletes the record with the given ID.
    ///
    /// Deleting a record that does not exist succeeds.
    pub async fn delete_record(&self, record_id: &str) -> Result<(), Error> {
        let record_id = require_segment("record_id", record_id)?;
        let request = Request::text(Method::DELETE, RECORDS_PATH)
            .segment(record_id)
            .accept(&[StatusCode::OK, StatusCode::NOT_FOUND]);
        self.api_client.execute(request).await.map(|_| ())
    }

    async fn decode_record(&self, request: Request) -> Result<Record, Error> {
        let response: RecordResponse = self.api_client.execute_json(request).await?;
        response.record.ok_or(Error::MissingPayload("record"))
    }
}
