#![no_main]

use arxiv_ask::normalize::normalize_response;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any parseable JSON must normalize without panicking
    if let Ok(raw) = serde_json::from_slice::<serde_json::Value>(data) {
        let papers = normalize_response(&raw);
        if let serde_json::Value::Array(items) = &raw {
            assert_eq!(papers.len(), items.len());
        }
    }
});
