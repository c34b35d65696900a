//! Input models for MCP tool parameters.
//!
//! Argument names follow the tool schemas: filters are camelCase like the
//! Graph API query parameters, while `paper_id` keeps its snake_case name.

use serde::{Deserialize, Serialize};

/// Input for `search_paper`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPaperInput {
    /// Plain-text search query.
    pub query: String,

    /// Comma-separated fields to return.
    #[serde(default)]
    pub fields: Option<String>,

    /// Maximum number of results (clamped to 100).
    #[serde(default = "default_search_limit")]
    pub limit: u32,

    /// Starting position in the result list.
    #[serde(default)]
    pub offset: u32,

    /// Publication year or range (e.g., "2019", "2016-2020", "2010-").
    #[serde(default)]
    pub year: Option<String>,

    /// Comma-separated fields of study.
    #[serde(default)]
    pub fields_of_study: Option<String>,

    /// Only papers with a public PDF.
    #[serde(default)]
    pub open_access_pdf: bool,

    /// Comma-separated publication types (e.g., "Review,JournalArticle").
    #[serde(default)]
    pub publication_types: Option<String>,

    /// Minimum citation count.
    #[serde(default)]
    pub min_citation_count: Option<u32>,

    /// Date range `<start>:<end>` with `YYYY-MM-DD` prefixes.
    #[serde(default)]
    pub publication_date_or_year: Option<String>,

    /// Comma-separated venues.
    #[serde(default)]
    pub venue: Option<String>,
}

fn default_search_limit() -> u32 {
    10
}

/// Input for `get_paper`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPaperInput {
    /// Paper ID (S2, `DOI:`, `ARXIV:`, `MAG:`, `ACL:`, `PMID:`, `CorpusId:`).
    pub paper_id: String,

    /// Comma-separated fields to return.
    #[serde(default)]
    pub fields: Option<String>,
}

/// Input for `get_authors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAuthorsInput {
    /// Paper whose authors to list.
    pub paper_id: String,

    /// Comma-separated author fields to return.
    #[serde(default)]
    pub fields: Option<String>,

    /// Maximum number of authors (clamped to 1000).
    #[serde(default = "default_authors_limit")]
    pub limit: u32,

    /// Starting position in the author list.
    #[serde(default)]
    pub offset: u32,
}

fn default_authors_limit() -> u32 {
    100
}

/// Input for `get_citation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCitationInput {
    /// Paper to cite.
    pub paper_id: String,

    /// Citation style name.
    #[serde(default = "default_citation_format")]
    pub format: String,
}

fn default_citation_format() -> String {
    "bibtex".to_string()
}
