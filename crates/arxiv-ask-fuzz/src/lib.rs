//! Fuzzing library for arxiv-ask.
//!
//! Targets feed arbitrary bytes through response normalization and
//! identifier extraction, neither of which may panic.
//!
//! # Usage
//!
//! ```bash
//! cd crates/arxiv-ask-fuzz
//! cargo +nightly fuzz run fuzz_normalize -- -max_total_time=60
//! ```

pub use arxiv_ask::normalize;
