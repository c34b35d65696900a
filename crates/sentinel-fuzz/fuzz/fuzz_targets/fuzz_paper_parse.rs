#![no_main]

use libfuzzer_sys::fuzz_target;
use semantic_scholar_mcp::formatters::{CitationFormat, format_citation};
use semantic_scholar_mcp::models::{Paper, SearchResult};

fuzz_target!(|data: &[u8]| {
    // Decoding may fail; formatting a decoded record must not panic.
    if let Ok(paper) = serde_json::from_slice::<Paper>(data) {
        for format in CitationFormat::ALL {
            let citation = format_citation(&paper, format);
            assert!(!citation.is_empty());
        }
    }

    let _ = serde_json::from_slice::<SearchResult>(data);
});
