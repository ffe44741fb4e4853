#![no_main]

use arxiv_ask::normalize::extract_identifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(candidate) = std::str::from_utf8(data) {
        let once = extract_identifier(candidate);
        assert_eq!(extract_identifier(&once), once);
    }
});
