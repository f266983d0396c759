#![no_main]

use hetznerdns::RecordType;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let record_type: RecordType = match data.parse() {
        Ok(record_type) => record_type,
        Err(never) => match never {},
    };

    // Verify roundtrip via string
    let s = record_type.to_string();
    let parsed: RecordType = s.parse().unwrap();
    assert_eq!(record_type, parsed);

    // Unknown types are kept verbatim
    if let RecordType::Other(ref raw) = record_type {
        assert_eq!(raw, data);
    }

    // Verify roundtrip via JSON
    let encoded = serde_json::to_string(&record_type).unwrap();
    let decoded: RecordType = serde_json::from_str(&encoded).unwrap();
    assert_eq!(record_type, decoded);
});
