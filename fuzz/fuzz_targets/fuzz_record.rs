#![no_main]

//! Fuzz testing for decoding and re-encoding records.

use hetznerdns::Record;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(record) = serde_json::from_slice::<Record>(data) {
        let body = serde_json::to_value(&record).unwrap();
        // Timestamps are server-assigned and never sent back
        assert!(body.get("created").is_none());
        assert!(body.get("modified").is_none());
        assert_eq!(body["type"], record.record_type.as_str());
    }
});
