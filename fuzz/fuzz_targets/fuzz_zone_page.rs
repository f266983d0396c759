#![no_main]

//! Fuzz testing for decoding zone listing and zone-file validation bodies.
//!
//! Arbitrary bytes must either decode or fail with a JSON error, never panic.

use hetznerdns::{ZoneFileValidation, ZonePage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<ZonePage>(data);
    let _ = serde_json::from_slice::<ZoneFileValidation>(data);
});
