//! Paper data model matching Semantic Scholar API schema.
//!
//! Every member is optional because the caller decides which fields the API
//! returns. A `null` member and a missing one both decode to `None`, so these
//! types are for reading values; tool output uses the response body as sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Author;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,

    /// S2 corpus ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_id: Option<i64>,

    /// Semantic Scholar page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Paper title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    /// Publication venue (journal or conference).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Number of references in this paper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_count: Option<i64>,

    /// Number of citations this paper has received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,

    /// Influential citation count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influential_citation_count: Option<i64>,

    /// Whether this paper is open access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_access: Option<bool>,

    /// Open access PDF information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_access_pdf: Option<OpenAccessPdf>,

    /// Fields of study (e.g., "Computer Science", "Medicine").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_of_study: Option<Vec<String>>,

    /// Publication types (e.g., "JournalArticle", "Conference").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_types: Option<Vec<String>>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    /// Journal details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<Journal>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,

    /// Authors in byline order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,

    /// Any other requested field (embedding, tldr, citations, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Paper {
    /// Get the title if present and non-blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        non_blank(self.external_ids.as_ref()?.doi.as_deref())
    }

    /// Venue name, falling back to the journal name.
    #[must_use]
    pub fn venue_name(&self) -> Option<&str> {
        non_blank(self.venue.as_deref())
            .or_else(|| non_blank(self.journal.as_ref()?.name.as_deref()))
    }

    /// Author names in byline order, skipping authors without a name.
    #[must_use]
    pub fn author_names(&self) -> Vec<&str> {
        self.authors
            .iter()
            .flatten()
            .filter_map(|a| non_blank(a.name.as_deref()))
            .collect()
    }

    /// Get the first author's name if available.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.author_names().first().copied()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Open access PDF information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Status of open access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Journal details for a paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    /// Journal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    /// Page range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default, skip_serializing_if = "Option::is_none")]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed", default, skip_serializing_if = "Option::is_none")]
    pub pubmed: Option<String>,

    /// PubMed Central ID.
    #[serde(rename = "PubMedCentral", default, skip_serializing_if = "Option::is_none")]
    pub pmc: Option<String>,

    /// Microsoft Academic Graph ID.
    #[serde(rename = "MAG", default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<String>,

    /// ACL Anthology ID.
    #[serde(rename = "ACL", default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,

    /// DBLP key.
    #[serde(rename = "DBLP", default, skip_serializing_if = "Option::is_none")]
    pub dblp: Option<String>,

    /// Semantic Scholar Corpus ID.
    #[serde(rename = "CorpusId", default, skip_serializing_if = "Option::is_none")]
    pub corpus_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Search result wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i64,

    /// Offset of the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<i64>,

    /// List of papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

impl SearchResult {
    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }
}
