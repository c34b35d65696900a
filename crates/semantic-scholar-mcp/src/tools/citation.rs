//! Citation tool: get_citation.

use serde_json::json;

use super::{McpTool, PAPER_ID_DESCRIPTION, ToolContext, paper_lookup, parse_input, required};
use crate::config::fields;
use crate::error::ToolResult;
use crate::fields::FieldSpec;
use crate::formatters::{CitationFormat, format_citation};
use crate::models::GetCitationInput;

/// Formatted citation for one paper.
pub struct GetCitationTool;

#[async_trait::async_trait]
impl McpTool for GetCitationTool {
    fn name(&self) -> &'static str {
        "get_citation"
    }

    fn description(&self) -> &'static str {
        "Get a formatted citation for a paper in BibTeX, APA, MLA or Chicago style."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": PAPER_ID_DESCRIPTION
                },
                "format": {
                    "type": "string",
                    "description": "Citation style",
                    "enum": CitationFormat::ALL.map(CitationFormat::as_str),
                    "default": "bibtex"
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetCitationInput = parse_input(input)?;

        // Reject bad arguments before any request goes out.
        let paper_id = required("paper_id", &params.paper_id)?;
        let format: CitationFormat = params.format.parse()?;
        let fields = FieldSpec::from_static(fields::CITATION);

        tracing::info!(paper_id, %format, "Formatting citation");

        let paper = ctx
            .client
            .get_paper(paper_id, &fields.to_query_value())
            .await
            .map_err(paper_lookup(paper_id))?;

        Ok(format_citation(&paper.decoded, format))
    }
}
