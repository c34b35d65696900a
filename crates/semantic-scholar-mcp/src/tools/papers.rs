//! Paper tools: search_paper, get_paper.

use serde_json::json;

use super::{McpTool, PAPER_ID_DESCRIPTION, ToolContext, paper_lookup, parse_input, required};
use crate::config::api;
use crate::error::ToolResult;
use crate::fields::{EntityKind, resolve_fields};
use crate::models::{GetPaperInput, SearchPaperInput};

const PAPER_FIELDS_DESCRIPTION: &str = "A comma-separated list of the fields to be returned. \
The paperId field is always returned. See the resource 'semantic-scholar://fields/paper' for available fields.

Examples:
- `title,url`
- `title,embedding.specter_v2`
- `title,authors,citations.title,citations.abstract`";

/// Relevance search over papers.
pub struct SearchPaperTool;

#[async_trait::async_trait]
impl McpTool for SearchPaperTool {
    fn name(&self) -> &'static str {
        "search_paper"
    }

    fn description(&self) -> &'static str {
        "Search for papers using Semantic Scholar. Use 'fields' parameter to customize returned data."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "A plain-text search query string. No special query syntax is supported; \
                                    replace hyphens with spaces to find matches."
                },
                "fields": {
                    "type": "string",
                    "description": PAPER_FIELDS_DESCRIPTION,
                    "default": EntityKind::Paper.default_fields().join(",")
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results to return (max: 100)",
                    "default": 10,
                    "minimum": 0
                },
                "offset": {
                    "type": "integer",
                    "description": "Starting position in the list of results",
                    "default": 0,
                    "minimum": 0
                },
                "year": {
                    "type": "string",
                    "description": "Publication year or range, e.g. `2019`, `2016-2020`, `2010-`, `-2015`"
                },
                "fieldsOfStudy": {
                    "type": "string",
                    "description": "Comma-separated fields of study, e.g. `Physics,Mathematics`"
                },
                "openAccessPdf": {
                    "type": "boolean",
                    "description": "Restricts results to papers with a public PDF.",
                    "default": false
                },
                "publicationTypes": {
                    "type": "string",
                    "description": "Comma-separated publication types, e.g. `Review,JournalArticle`"
                },
                "minCitationCount": {
                    "type": "integer",
                    "description": "Restricts results to papers with at least this many citations.",
                    "minimum": 0
                },
                "publicationDateOrYear": {
                    "type": "string",
                    "description": "Date range `<startDate>:<endDate>` in `YYYY-MM-DD` form; either end may be \
                                    omitted and prefixes like `2020-06` are accepted."
                },
                "venue": {
                    "type": "string",
                    "description": "Comma-separated venues, e.g. `Nature,Radiology`"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPaperInput = parse_input(input)?;

        let query = required("query", &params.query)?;
        let fields = resolve_fields(params.fields.as_deref(), EntityKind::Paper)?;
        let limit = params.limit.min(api::MAX_SEARCH_LIMIT);
        let filters = search_filters(&params);

        tracing::info!(query, fields = %fields, limit, offset = params.offset, "Searching papers");

        let result = ctx.client.search_papers(query, &fields, params.offset, limit, &filters).await?;

        Ok(serde_json::to_string_pretty(&result.body)?)
    }
}

/// Optional filters as query parameters, in a fixed order.
fn search_filters(params: &SearchPaperInput) -> Vec<(String, String)> {
    let optional = [
        ("year", params.year.clone()),
        ("fieldsOfStudy", params.fields_of_study.clone()),
        ("publicationTypes", params.publication_types.clone()),
        ("minCitationCount", params.min_citation_count.map(|c| c.to_string())),
        ("publicationDateOrYear", params.publication_date_or_year.clone()),
        ("venue", params.venue.clone()),
    ];

    let mut filters: Vec<(String, String)> = optional
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value?.trim().to_string();
            (!value.is_empty()).then(|| (name.to_string(), value))
        })
        .collect();

    // The API treats the bare presence of this parameter as the filter.
    if params.open_access_pdf {
        filters.push(("openAccessPdf".to_string(), String::new()));
    }

    filters
}

/// Single paper lookup.
pub struct GetPaperTool;

#[async_trait::async_trait]
impl McpTool for GetPaperTool {
    fn name(&self) -> &'static str {
        "get_paper"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific paper. Use 'fields' parameter to customize returned data."
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
                    "description": PAPER_FIELDS_DESCRIPTION,
                    "default": EntityKind::Paper.default_fields().join(",")
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetPaperInput = parse_input(input)?;

        let paper_id = required("paper_id", &params.paper_id)?;
        let fields = resolve_fields(params.fields.as_deref(), EntityKind::Paper)?;

        tracing::info!(paper_id, fields = %fields, "Fetching paper");

        let paper = ctx.client.get_paper(paper_id, &fields).await.map_err(paper_lookup(paper_id))?;

        Ok(serde_json::to_string_pretty(&paper.body)?)
    }
}
