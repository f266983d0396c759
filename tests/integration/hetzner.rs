//! Live integration tests for the Hetzner DNS API.
//!
//! These tests require a valid Hetzner DNS API token and are ignored by
//! default. To run them:
//!
//! 1. Create a `.env` file in the project root (see `.env.example`)
//!
//! 2. Run with: `cargo test -- --ignored`
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `HETZNER_DNS_API_TOKEN` | Yes | Hetzner DNS API token |
//! | `HETZNER_DNS_BASE_URL` | No | Override of `https://dns.hetzner.com` |
//! | `HETZNER_TEST_DOMAIN` | Yes* | Existing zone to use for record tests |
//! | `HETZNER_TEST_SUBDOMAIN` | No | Prefix for test record names |
//!
//! *Required for record manipulation tests

use std::env;

use hetznerdns::{Config, HetznerDns, Record, RecordType, Zone};

/// Test configuration loaded from environment.
struct TestConfig {
    dns: HetznerDns,
    /// The domain to test with (e.g., "example.com")
    domain: String,
    /// Prefix for test record names (e.g., "hetzner-api-test")
    subdomain: String,
}

impl TestConfig {
    /// Record name for a given record type (e.g., "a.hetzner-api-test").
    fn test_host(&self, record_type: &str) -> String {
        format!("{}.{}", record_type.to_lowercase(), self.subdomain)
    }
}

/// Builds a client from the environment.
/// Returns None if credentials are not available.
fn get_test_client() -> Option<HetznerDns> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    let config = Config::from_env().ok()?;
    HetznerDns::with_config(config).ok()
}

/// Loads the full test configuration including the domain.
fn get_test_config() -> Option<TestConfig> {
    let dns = get_test_client()?;
    let domain = env::var("HETZNER_TEST_DOMAIN").ok()?;
    let subdomain =
        env::var("HETZNER_TEST_SUBDOMAIN").unwrap_or_else(|_| "hetzner-api-test".to_string());

    Some(TestConfig {
        dns,
        domain,
        subdomain,
    })
}

async fn get_test_zone(config: &TestConfig) -> Zone {
    config
        .dns
        .zones()
        .find_zone_by_name(&config.domain)
        .await
        .expect("Failed to look up zone")
        .unwrap_or_else(|| panic!("Test domain '{}' not found in account", config.domain))
}

/// Removes leftover test records with the given name.
async fn cleanup_test_records(dns: &HetznerDns, zone: &Zone, name: &str) {
    let records = dns.records().list_records(&zone.id).await.unwrap_or_default();
    for record in records {
        if record.name == name {
            if let Some(id) = record.id.as_deref() {
                println!("  Cleaning up existing record: {} (ID: {})", name, id);
                let _ = dns.records().delete_record(id).await;
            }
        }
    }
}

// =============================================================================
// Zone Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN in .env"]
async fn test_list_zones() {
    let dns = get_test_client().expect("Credentials not found. Set HETZNER_DNS_API_TOKEN in .env");

    let zones = dns.zones().list_all_zones().await.expect("Failed to list zones");

    println!("Found {} zones", zones.len());
    for zone in &zones {
        println!("  - {} (ID: {}, status: {:?})", zone.name, zone.id, zone.status);
    }
}

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_get_zone() {
    let config = get_test_config().expect("Test configuration not found");
    let zone = get_test_zone(&config).await;

    let fetched = config
        .dns
        .zones()
        .get_zone(&zone.id)
        .await
        .expect("Failed to get zone");
    println!("Found zone: {} (ID: {})", fetched.name, fetched.id);
    assert_eq!(fetched.id, zone.id);
    assert_eq!(fetched.name, zone.name);
}

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_export_and_validate_zone_file() {
    let config = get_test_config().expect("Test configuration not found");
    let zone = get_test_zone(&config).await;

    let zone_file = config
        .dns
        .zones()
        .export_zone_file(&zone.id)
        .await
        .expect("Failed to export zone file");
    assert!(!zone_file.is_empty());

    let validation = config
        .dns
        .zones()
        .validate_zone_file(&zone_file)
        .await
        .expect("Exported zone file should validate");
    println!(
        "Parsed {:?} records, {} valid",
        validation.parsed_records,
        validation.valid_records.len()
    );
}

#[tokio::test]
#[ignore = "performs a live request with an invalid token"]
async fn test_invalid_credentials() {
    let dns = HetznerDns::new("invalid_api_token").expect("Client creation should succeed");

    let result = dns.zones().list_all_zones().await;
    assert!(result.is_err(), "Expected error with invalid credentials");
}

// =============================================================================
// Record Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_list_records() {
    let config = get_test_config().expect("Test configuration not found");
    let zone = get_test_zone(&config).await;

    let records = config
        .dns
        .records()
        .list_records(&zone.id)
        .await
        .expect("Failed to list records");

    println!("Found {} records in {}", records.len(), config.domain);
    for record in &records {
        println!(
            "  - {} {} {} (TTL: {:?}, ID: {:?})",
            record.name, record.record_type, record.value, record.ttl, record.id
        );
    }
}

async fn record_crud(config: &TestConfig, record_type: RecordType, value: &str) {
    let zone = get_test_zone(config).await;
    let host = config.test_host(record_type.as_str());
    let records = config.dns.records();

    println!("Testing {} record CRUD for {}.{}", record_type, host, config.domain);
    cleanup_test_records(&config.dns, &zone, &host).await;

    let record = Record::new(&zone.id, &host, record_type.clone(), value).with_ttl(300);
    let created = records
        .create_record(&record)
        .await
        .expect("Failed to create record");
    let id = created.id.clone().expect("Created record has no ID");
    assert_eq!(created.name, host);
    assert_eq!(created.record_type, record_type);
    println!("  Created with ID: {}", id);

    let updated = records
        .update_record(&created.clone().with_ttl(600))
        .await
        .expect("Failed to update record");
    assert_eq!(updated.ttl, Some(600));
    println!("  Updated TTL");

    records.delete_record(&id).await.expect("Failed to delete record");
    println!("  Deleted record");

    let err = records.get_record(&id).await.unwrap_err();
    assert!(err.is_not_found(), "Record should be deleted, got {:?}", err);

    // A second delete is not an error.
    records
        .delete_record(&id)
        .await
        .expect("Repeated delete should succeed");
}

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_a_record_crud() {
    let config = get_test_config().expect("Test configuration not found");
    record_crud(&config, RecordType::A, "192.0.2.1").await;
}

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_aaaa_record_crud() {
    let config = get_test_config().expect("Test configuration not found");
    record_crud(&config, RecordType::AAAA, "2001:db8::1").await;
}

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_txt_record_crud() {
    let config = get_test_config().expect("Test configuration not found");
    record_crud(&config, RecordType::TXT, "\"v=hetznerdns-test; test=true\"").await;
}

#[tokio::test]
#[ignore = "requires HETZNER_DNS_API_TOKEN and HETZNER_TEST_DOMAIN in .env"]
async fn test_mx_record_crud() {
    let config = get_test_config().expect("Test configuration not found");
    let value = format!("10 mail.{}.", config.domain);
    record_crud(&config, RecordType::MX, &value).await;
}
