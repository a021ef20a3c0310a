//! Fuzz target: `DisplayConfig` JSON deserialization.
//!
//! Arbitrary bytes must never panic the deserializer, and any accepted config
//! must carry an in-range log threshold.

#![no_main]

use fault_core::DisplayConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<DisplayConfig>(data) {
        let threshold = config.log_threshold.value();
        assert!((1..=100).contains(&threshold), "threshold {threshold} escaped [1, 100]");
    }
});
