//! Author data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An author record, either nested in a paper or from `/paper/{id}/authors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Semantic Scholar author ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    /// Display name as printed in the byline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Institutional affiliations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliations: Option<Vec<String>>,

    /// Personal homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Semantic Scholar profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of papers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_count: Option<i64>,

    /// Total citations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,

    /// h-index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_index: Option<i64>,

    /// External identifiers (ORCID, DBLP).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Author {
    /// Author with just a name, as nested in paper bylines.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }
}

/// One page of `/paper/{id}/authors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorsPage {
    /// Current offset.
    #[serde(default)]
    pub offset: i64,

    /// Offset of the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<i64>,

    /// Authors in this page.
    #[serde(default)]
    pub data: Vec<Author>,
}
