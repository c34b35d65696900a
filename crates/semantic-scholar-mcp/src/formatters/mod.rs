//! Output formatting: citations and the tool catalog.

pub mod catalog;
pub mod citation;

pub use catalog::{CatalogFormat, render_catalog};
pub use citation::{CitationFormat, NO_TITLE, format_citation};
