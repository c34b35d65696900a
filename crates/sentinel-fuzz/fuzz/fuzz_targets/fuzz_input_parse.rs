#![no_main]

use libfuzzer_sys::fuzz_target;
use semantic_scholar_mcp::models::{GetAuthorsInput, GetCitationInput, GetPaperInput, SearchPaperInput};
use semantic_scholar_mcp::server::protocol::parse_request;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = serde_json::from_value::<SearchPaperInput>(json.clone());
        let _ = serde_json::from_value::<GetPaperInput>(json.clone());
        let _ = serde_json::from_value::<GetAuthorsInput>(json.clone());
        let _ = serde_json::from_value::<GetCitationInput>(json);
    }

    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = parse_request(raw);
    }
});
