//! Field selection for Graph API requests.
//!
//! Turns a caller-supplied comma-separated field list into the `fields` query
//! value. Only syntax is checked here; the API rejects unknown field names.

use std::collections::HashSet;
use std::fmt;

use crate::config::fields;
use crate::error::{ToolError, ToolResult};

/// Entity a field list applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Paper records (`/paper/search`, `/paper/{id}`).
    Paper,
    /// Author records (`/paper/{id}/authors`).
    Author,
}

impl EntityKind {
    /// Fields used when the caller selects none.
    #[must_use]
    pub const fn default_fields(self) -> &'static [&'static str] {
        match self {
            Self::Paper => fields::PAPER_DEFAULT,
            Self::Author => fields::AUTHOR_DEFAULT,
        }
    }
}

/// Ordered, duplicate-free field selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    fields: Vec<String>,
}

impl FieldSpec {
    /// Resolve an optional field list for the given entity kind.
    ///
    /// `None` yields the kind's default set. Tokens are trimmed, empty tokens
    /// dropped, and repeats removed keeping the first occurrence.
    pub fn resolve(input: Option<&str>, kind: EntityKind) -> ToolResult<Self> {
        let Some(input) = input else {
            return Ok(Self::from_static(kind.default_fields()));
        };

        let mut seen = HashSet::new();
        let mut fields = Vec::new();

        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            validate_token(token)?;
            if seen.insert(token) {
                fields.push(token.to_string());
            }
        }

        if fields.is_empty() {
            return Err(ToolError::invalid_argument(
                "fields",
                "field list is empty after removing blank entries",
            ));
        }

        Ok(Self { fields })
    }

    /// Build from a fixed list known to be well-formed.
    #[must_use]
    pub fn from_static(fields: &[&str]) -> Self {
        Self { fields: fields.iter().map(|f| (*f).to_string()).collect() }
    }

    /// Selected fields in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }

    /// Value for the `fields` query parameter.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.fields.join(",")
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

/// Resolve straight to the query value.
pub fn resolve_fields(input: Option<&str>, kind: EntityKind) -> ToolResult<String> {
    FieldSpec::resolve(input, kind).map(|spec| spec.to_query_value())
}

fn validate_token(token: &str) -> ToolResult<()> {
    if token.chars().any(char::is_whitespace) {
        return Err(ToolError::invalid_argument(
            "fields",
            format!("field '{token}' contains whitespace"),
        ));
    }

    // A dotted path selects a nested field; its parent is implied, but every
    // segment must be named.
    if token.split('.').any(str::is_empty) {
        return Err(ToolError::invalid_argument(
            "fields",
            format!("field '{token}' has an empty path segment"),
        ));
    }

    Ok(())
}
