//! Fuzzing library for semantic-scholar-mcp.
//!
//! The targets under `fuzz/` cover API record decoding with citation
//! rendering, field-list resolution, and tool argument / JSON-RPC parsing.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_paper_parse -- -max_total_time=60
//! cargo +nightly fuzz run fuzz_field_resolve
//! ```

pub use semantic_scholar_mcp::{fields, formatters, models};
