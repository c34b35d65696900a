#![no_main]

use libfuzzer_sys::fuzz_target;
use semantic_scholar_mcp::fields::{EntityKind, resolve_fields};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else { return };

    for kind in [EntityKind::Paper, EntityKind::Author] {
        if let Ok(resolved) = resolve_fields(Some(input), kind) {
            let tokens: Vec<&str> = resolved.split(',').collect();
            assert!(tokens.iter().all(|t| !t.is_empty() && t.trim() == *t));

            let mut unique = tokens.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), tokens.len());

            assert_eq!(resolve_fields(Some(&resolved), kind).ok().as_deref(), Some(resolved.as_str()));
        }
    }
});
