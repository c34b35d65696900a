//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates its arguments
//! 2. Resolves the `fields` selection
//! 3. Calls the Semantic Scholar API client once
//! 4. Returns JSON text, or a citation string for `get_citation`

mod authors;
mod citation;
mod papers;

pub use authors::GetAuthorsTool;
pub use citation::GetCitationTool;
pub use papers::{GetPaperTool, SearchPaperTool};

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::client::SemanticScholarClient;
use crate::error::{ClientError, ToolError, ToolResult};

/// Description shared by every `paper_id` argument.
pub(crate) const PAPER_ID_DESCRIPTION: &str = "Paper identifier, passed through to the API. Supported forms:
- `<sha>` - a Semantic Scholar ID, e.g. `649def34f8be52c8b66281af98ae884c09aef38b`
- `CorpusId:<id>` - e.g. `CorpusId:215416146`
- `DOI:<doi>` - e.g. `DOI:10.18653/v1/N18-3011`
- `ARXIV:<id>` - e.g. `ARXIV:2106.15928`
- `MAG:<id>` - e.g. `MAG:112218234`
- `ACL:<id>` - e.g. `ACL:W12-3903`
- `PMID:<id>` - e.g. `PMID:19872477`
- `PMCID:<id>` - e.g. `PMCID:2323736`
- `URL:<url>` - e.g. `URL:https://arxiv.org/abs/2106.15928v1`";

/// Tool execution context.
#[derive(Clone)]
pub struct ToolContext {
    /// API client.
    pub client: Arc<SemanticScholarClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<SemanticScholarClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_paper").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(papers::SearchPaperTool),
        Box::new(papers::GetPaperTool),
        Box::new(authors::GetAuthorsTool),
        Box::new(citation::GetCitationTool),
    ]
}

/// Deserialize tool arguments, reporting problems as invalid arguments.
pub(crate) fn parse_input<T: DeserializeOwned>(input: serde_json::Value) -> ToolResult<T> {
    serde_json::from_value(input).map_err(|e| ToolError::invalid_argument("arguments", e.to_string()))
}

/// Trim a required string argument, rejecting blanks.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> ToolResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_argument(field, "cannot be empty"));
    }
    Ok(trimmed)
}

/// Name the paper in 404 failures of a per-paper lookup.
pub(crate) fn paper_lookup(paper_id: &str) -> impl FnOnce(ClientError) -> ToolError + '_ {
    move |err| {
        if err.is_not_found() {
            ToolError::PaperNotFound { paper_id: paper_id.to_string(), source: err }
        } else {
            ToolError::Client(err)
        }
    }
}
