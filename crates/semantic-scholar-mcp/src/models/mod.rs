//! Data models for Semantic Scholar API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename = "camelCase")]` to match API naming.

mod author;
mod inputs;
mod paper;

pub use author::{Author, AuthorsPage};
pub use inputs::*;
pub use paper::{ExternalIds, Journal, OpenAccessPdf, Paper, SearchResult};
