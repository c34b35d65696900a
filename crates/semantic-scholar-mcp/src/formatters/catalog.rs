//! Tool catalog rendering for `tools list`.

use serde_json::{Value, json};

use crate::tools::McpTool;

const RULE_WIDTH: usize = 80;

/// Output style of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CatalogFormat {
    /// Boxed sections, one per tool.
    #[default]
    Table,
    /// One bullet line per tool.
    Text,
    /// Machine-readable tool descriptors.
    Json,
}

/// Render the tool catalog.
///
/// With `verbose`, every parameter is listed with its type, whether it is
/// required, and its default.
#[must_use]
pub fn render_catalog(tools: &[Box<dyn McpTool>], format: CatalogFormat, verbose: bool) -> String {
    match format {
        CatalogFormat::Json => render_json(tools),
        CatalogFormat::Table => render_table(tools, verbose),
        CatalogFormat::Text => render_text(tools, verbose),
    }
}

fn render_json(tools: &[Box<dyn McpTool>]) -> String {
    let descriptors: Vec<Value> = tools
        .iter()
        .map(|t| {
            json!({
                "name": t.name(),
                "description": t.description(),
                "inputSchema": t.input_schema(),
            })
        })
        .collect();

    format!("{:#}", Value::Array(descriptors))
}

fn render_table(tools: &[Box<dyn McpTool>], verbose: bool) -> String {
    let mut output = String::from("Available MCP Tools\n");
    output.push_str(&format!("{}\n\n", "=".repeat(RULE_WIDTH)));

    for tool in tools {
        output.push_str(&format!("{}\n", tool.name()));
        output.push_str(&format!("   {}\n\n", tool.description()));

        if verbose {
            output.push_str("   Input Schema:\n");
            let schema = tool.input_schema();
            let params = parameters(&schema);
            if params.is_empty() {
                output.push_str("     No parameters required\n");
            }
            for p in params {
                output.push_str(&format!(
                    "     * {} ({}){}: {}{}\n",
                    p.name,
                    p.kind,
                    p.requirement(),
                    p.summary,
                    p.default_suffix()
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("{}\n\n", "-".repeat(RULE_WIDTH)));
    }

    output
}

fn render_text(tools: &[Box<dyn McpTool>], verbose: bool) -> String {
    let mut output = String::from("Available MCP Tools:\n\n");

    for tool in tools {
        output.push_str(&format!("- {}: {}\n", tool.name(), tool.description()));

        if verbose {
            let schema = tool.input_schema();
            let params = parameters(&schema);
            if !params.is_empty() {
                output.push_str("  Parameters:\n");
            }
            for p in params {
                output.push_str(&format!(
                    "    - {}{}: {}{}\n",
                    p.name,
                    p.requirement(),
                    p.summary,
                    p.default_suffix()
                ));
            }
        }

        output.push('\n');
    }

    output
}

struct Parameter<'a> {
    name: &'a str,
    kind: &'a str,
    summary: &'a str,
    required: bool,
    default: Option<&'a Value>,
}

impl Parameter<'_> {
    fn requirement(&self) -> &'static str {
        if self.required { " (required)" } else { " (optional)" }
    }

    fn default_suffix(&self) -> String {
        match self.default {
            Some(Value::String(s)) => format!(" [default: {s}]"),
            Some(v) => format!(" [default: {v}]"),
            None => String::new(),
        }
    }
}

/// Flatten a schema's properties, required ones first.
fn parameters(schema: &Value) -> Vec<Parameter<'_>> {
    let required: Vec<&str> = schema["required"]
        .as_array()
        .map(|r| r.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut params: Vec<Parameter<'_>> = schema["properties"]
        .as_object()
        .map(|props| {
            props
                .iter()
                .map(|(name, info)| Parameter {
                    name,
                    kind: info["type"].as_str().unwrap_or("unknown"),
                    // Long descriptions carry examples; the first line is enough here.
                    summary: info["description"]
                        .as_str()
                        .and_then(|d| d.lines().next())
                        .unwrap_or("No description"),
                    required: required.contains(&name.as_str()),
                    default: info.get("default"),
                })
                .collect()
        })
        .unwrap_or_default();

    params.sort_by_key(|p| !p.required);
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::register_all_tools;

    #[test]
    fn test_table_lists_every_tool() {
        let out = render_catalog(&register_all_tools(), CatalogFormat::Table, false);
        assert!(out.starts_with("Available MCP Tools\n"));
        for name in ["search_paper", "get_paper", "get_authors", "get_citation"] {
            assert!(out.contains(name), "{name}");
        }
        assert!(!out.contains("Input Schema:"));
    }

    #[test]
    fn test_table_rules_span_full_width() {
        let out = render_catalog(&register_all_tools(), CatalogFormat::Table, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "=".repeat(RULE_WIDTH));
        assert!(lines.contains(&"-".repeat(RULE_WIDTH).as_str()));
        assert!(out.contains("search_paper\n   Search for papers"));
    }

    #[test]
    fn test_verbose_table_shows_parameters() {
        let out = render_catalog(&register_all_tools(), CatalogFormat::Table, true);
        assert!(out.contains("Input Schema:"));
        assert!(out.contains("* query (string) (required)"));
        assert!(out.contains("* limit (integer) (optional): Maximum number of results to return (max: 100) [default: 10]"));
        assert!(out.contains("[default: bibtex]"));
    }

    #[test]
    fn test_text_format() {
        let out = render_catalog(&register_all_tools(), CatalogFormat::Text, true);
        assert!(out.starts_with("Available MCP Tools:\n"));
        assert!(out.contains("- get_authors: "));
        assert!(out.contains("    - paper_id (required): Paper identifier, passed through to the API. Supported forms:\n"));
    }

    #[test]
    fn test_json_is_parseable_descriptor_list() {
        let out = render_catalog(&register_all_tools(), CatalogFormat::Json, false);
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let list = parsed.as_array().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0]["name"], "search_paper");
        assert_eq!(list[0]["inputSchema"]["required"][0], "query");
    }

    #[test]
    fn test_required_parameters_sort_first() {
        let schema = json!({
            "properties": {"a": {"type": "string"}, "z": {"type": "string"}},
            "required": ["z"]
        });
        let names: Vec<_> = parameters(&schema).iter().map(|p| p.name).collect();
        assert_eq!(names, ["z", "a"]);
    }
}
