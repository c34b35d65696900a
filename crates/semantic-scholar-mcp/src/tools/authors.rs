//! Author listing tool: get_authors.

use serde_json::json;

use super::{McpTool, PAPER_ID_DESCRIPTION, ToolContext, paper_lookup, parse_input, required};
use crate::config::api;
use crate::error::ToolResult;
use crate::fields::{EntityKind, resolve_fields};
use crate::models::GetAuthorsInput;

/// One page of a paper's authors.
pub struct GetAuthorsTool;

#[async_trait::async_trait]
impl McpTool for GetAuthorsTool {
    fn name(&self) -> &'static str {
        "get_authors"
    }

    fn description(&self) -> &'static str {
        "Get details about the authors of a paper with pagination support."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": PAPER_ID_DESCRIPTION
                },
                "fields": {
                    "type": "string",
                    "description": "A comma-separated list of author fields to return. The authorId field is \
                                    always returned. See the resource 'semantic-scholar://fields/author' for \
                                    available fields, e.g. `name,affiliations,papers.title`.",
                    "default": EntityKind::Author.default_fields().join(",")
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of authors to return (max: 1000)",
                    "default": 100,
                    "minimum": 0
                },
                "offset": {
                    "type": "integer",
                    "description": "Starting position in the list of authors",
                    "default": 0,
                    "minimum": 0
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetAuthorsInput = parse_input(input)?;

        let paper_id = required("paper_id", &params.paper_id)?;
        let fields = resolve_fields(params.fields.as_deref(), EntityKind::Author)?;
        let limit = params.limit.min(api::MAX_AUTHORS_LIMIT);

        tracing::info!(paper_id, fields = %fields, limit, offset = params.offset, "Fetching authors");

        let page = ctx
            .client
            .get_paper_authors(paper_id, &fields, params.offset, limit)
            .await
            .map_err(paper_lookup(paper_id))?;

        Ok(serde_json::to_string_pretty(&page.body)?)
    }
}
