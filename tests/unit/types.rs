//! Unit tests for the public wire types.

use hetznerdns::{Record, RecordType, Zone, ZonePage, ZoneRequest, ZoneStatus};
use serde_json::json;

#[test]
fn test_record_type_parsing() {
    assert_eq!("A".parse::<RecordType>().unwrap(), RecordType::A);
    assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
    assert_eq!("Caa".parse::<RecordType>().unwrap(), RecordType::CAA);
    assert_eq!(
        "SSHFP".parse::<RecordType>().unwrap(),
        RecordType::Other("SSHFP".to_string())
    );
}

#[test]
fn test_record_type_display() {
    assert_eq!(RecordType::A.to_string(), "A");
    assert_eq!(RecordType::TLSA.as_str(), "TLSA");
    assert_eq!(RecordType::Other("LOC".to_string()).to_string(), "LOC");
}

#[test]
fn test_record_type_serde() {
    let value = serde_json::to_value(RecordType::MX).unwrap();
    assert_eq!(value, json!("MX"));

    let parsed: RecordType = serde_json::from_value(json!("srv")).unwrap();
    assert_eq!(parsed, RecordType::SRV);

    let unknown: RecordType = serde_json::from_value(json!("NAPTR")).unwrap();
    assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("NAPTR"));
}

#[test]
fn test_record_serialization_omits_unset_fields() {
    let record = Record::new("zone", "www", RecordType::AAAA, "2001:db8::1");
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "AAAA",
            "zone_id": "zone",
            "name": "www",
            "value": "2001:db8::1"
        })
    );

    let record = record.with_id("rec").with_ttl(300);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["id"], "rec");
    assert_eq!(value["ttl"], 300);
}

#[test]
fn test_record_timestamps_are_read_only() {
    let record: Record = serde_json::from_value(json!({
        "type": "A",
        "id": "1",
        "zone_id": "z",
        "name": "www",
        "value": "192.0.2.1",
        "ttl": 0,
        "created": "2024-01-01 00:00:00.000 +0000 UTC",
        "modified": "2024-01-02 00:00:00.000 +0000 UTC"
    }))
    .unwrap();
    assert_eq!(record.ttl, Some(0));
    assert!(record.modified.is_some());

    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("created").is_none());
    assert!(value.get("modified").is_none());
}

#[test]
fn test_zone_full_document() {
    let zone: Zone = serde_json::from_value(json!({
        "id": "Zwx8HB3dBsBDBXQmRBsTNq",
        "name": "example.com",
        "ttl": 86400,
        "registrar": "",
        "legacy_dns_host": "",
        "legacy_ns": null,
        "ns": ["hydrogen.ns.hetzner.com"],
        "created": "2024-01-01 00:00:00.000 +0000 UTC",
        "verified": "",
        "modified": "2024-01-01 00:00:00.000 +0000 UTC",
        "project": "",
        "owner": "",
        "permission": "",
        "zone_type": { "id": "", "name": "", "description": "", "prices": null },
        "status": "pending",
        "paused": false,
        "is_secondary_dns": false,
        "txt_verification": { "name": "_hetzner", "token": "abc" },
        "records_count": 4
    }))
    .unwrap();

    assert_eq!(zone.ttl, Some(86400));
    assert_eq!(zone.status, Some(ZoneStatus::Pending));
    assert!(zone.legacy_ns.is_empty());
    assert_eq!(zone.records_count, Some(4));
    assert_eq!(zone.txt_verification.unwrap().token, "abc");
}

#[test]
fn test_zone_unknown_status() {
    let zone: Zone =
        serde_json::from_value(json!({"id": "1", "name": "a.com", "status": "frozen"})).unwrap();
    assert_eq!(zone.status, Some(ZoneStatus::Unknown));
}

#[test]
fn test_zone_request_body() {
    let body = serde_json::to_value(ZoneRequest::new("example.com")).unwrap();
    assert_eq!(body, json!({"name": "example.com"}));

    let body = serde_json::to_value(ZoneRequest::new("example.com").ttl(3600)).unwrap();
    assert_eq!(body, json!({"name": "example.com", "ttl": 3600}));
}

#[test]
fn test_zone_page_pagination() {
    let page: ZonePage = serde_json::from_value(json!({
        "zones": [],
        "meta": { "pagination": { "page": 2, "per_page": 100, "last_page": 3, "total_entries": 250 } }
    }))
    .unwrap();
    assert_eq!(page.last_page(), Some(3));
    assert_eq!(page.pagination().unwrap().total_entries, Some(250));

    let page: ZonePage = serde_json::from_value(json!({"zones": null})).unwrap();
    assert!(page.zones.is_empty());
    assert_eq!(page.last_page(), None);
}
