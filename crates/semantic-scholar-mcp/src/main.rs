//! Semantic Scholar MCP Server - Entry Point
//!
//! Runs the MCP server over stdio or HTTP, or invokes a single tool from the
//! command line.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use semantic_scholar_mcp::{
    SemanticScholarClient,
    config::{Config, api},
    formatters::{CatalogFormat, render_catalog},
    models::{GetAuthorsInput, GetCitationInput, GetPaperInput, SearchPaperInput},
    server::McpServer,
    tools,
};

#[derive(Parser, Debug)]
#[command(name = "semantic-scholar-mcp")]
#[command(about = "MCP server for Semantic Scholar API")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, global = true, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Graph API base URL
    #[arg(long, global = true, env = "SEMANTIC_SCHOLAR_API_URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP server (stdio when no transport is given)
    Serve {
        /// Transport mode
        #[arg(value_enum, default_value_t = Transport::Stdio)]
        transport: Transport,

        /// HTTP bind address
        #[arg(long, default_value = "127.0.0.1", env = "HOST")]
        host: String,

        /// HTTP port
        #[arg(long, default_value_t = 8000, env = "PORT")]
        port: u16,
    },

    /// MCP tools for interacting with Semantic Scholar
    #[command(subcommand)]
    Tools(ToolsCommand),
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// Stateless HTTP on /mcp
    Http,
}

#[derive(Subcommand, Debug)]
enum ToolsCommand {
    /// List all available MCP tools
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = CatalogFormat::Table)]
        format: CatalogFormat,

        /// Show every parameter of each tool
        #[arg(short, long)]
        verbose: bool,
    },

    /// Search for papers
    #[command(name = "search_paper", alias = "search-paper")]
    SearchPaper {
        /// Plain-text search query
        query: String,

        /// Comma-separated fields to return
        #[arg(long)]
        fields: Option<String>,

        /// Maximum number of results (max: 100)
        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Starting position in the results
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Publication year or range (e.g. 2019, 2016-2020)
        #[arg(long)]
        year: Option<String>,

        /// Comma-separated fields of study
        #[arg(long)]
        fields_of_study: Option<String>,

        /// Only papers with a public PDF
        #[arg(long)]
        open_access_pdf: bool,

        /// Comma-separated publication types
        #[arg(long)]
        publication_types: Option<String>,

        /// Minimum citation count
        #[arg(long)]
        min_citation_count: Option<u32>,

        /// Date range `<start>:<end>`
        #[arg(long)]
        publication_date_or_year: Option<String>,

        /// Comma-separated venues
        #[arg(long)]
        venue: Option<String>,
    },

    /// Get details about a paper
    #[command(name = "get_paper", alias = "get-paper")]
    GetPaper {
        /// Paper ID (S2 ID, DOI:, ARXIV:, CorpusId:, ...)
        paper_id: String,

        /// Comma-separated fields to return
        #[arg(long)]
        fields: Option<String>,
    },

    /// List the authors of a paper
    #[command(name = "get_authors", alias = "get-authors")]
    GetAuthors {
        /// Paper ID
        paper_id: String,

        /// Comma-separated author fields to return
        #[arg(long)]
        fields: Option<String>,

        /// Maximum number of authors (max: 1000)
        #[arg(long, default_value_t = 100)]
        limit: u32,

        /// Starting position in the author list
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Format a citation for a paper
    #[command(name = "get_citation", alias = "get-citation")]
    GetCitation {
        /// Paper ID
        paper_id: String,

        /// Citation style: bibtex, apa, mla or chicago
        #[arg(long, default_value = "bibtex")]
        format: String,
    },
}

impl ToolsCommand {
    /// Tool name and JSON arguments for a tool invocation.
    fn into_call(self) -> serde_json::Result<Option<(&'static str, serde_json::Value)>> {
        let call = match self {
            Self::List { .. } => return Ok(None),
            Self::SearchPaper {
                query,
                fields,
                limit,
                offset,
                year,
                fields_of_study,
                open_access_pdf,
                publication_types,
                min_citation_count,
                publication_date_or_year,
                venue,
            } => (
                "search_paper",
                serde_json::to_value(SearchPaperInput {
                    query,
                    fields,
                    limit,
                    offset,
                    year,
                    fields_of_study,
                    open_access_pdf,
                    publication_types,
                    min_citation_count,
                    publication_date_or_year,
                    venue,
                })?,
            ),
            Self::GetPaper { paper_id, fields } => {
                ("get_paper", serde_json::to_value(GetPaperInput { paper_id, fields })?)
            }
            Self::GetAuthors { paper_id, fields, limit, offset } => (
                "get_authors",
                serde_json::to_value(GetAuthorsInput { paper_id, fields, limit, offset })?,
            ),
            Self::GetCitation { paper_id, format } => {
                ("get_citation", serde_json::to_value(GetCitationInput { paper_id, format })?)
            }
        };
        Ok(Some(call))
    }
}

/// Logs always go to stderr; stdout belongs to the protocol or tool output.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_server(api_key: Option<String>, api_url: Option<&str>) -> anyhow::Result<McpServer> {
    let mut config = Config::new(api_key);
    if let Some(url) = api_url {
        config = config.with_graph_api_url(url)?;
    }

    if !config.has_api_key() {
        tracing::warn!(
            "No Semantic Scholar API key found; set {} for higher rate limits",
            api::API_KEY_ENV
        );
    }

    let client = SemanticScholarClient::new(config)?;
    Ok(McpServer::new(client))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before parsing so env fallbacks see its values.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let command = cli.command.unwrap_or(Command::Serve {
        transport: Transport::Stdio,
        host: "127.0.0.1".to_string(),
        port: 8000,
    });

    match command {
        Command::Serve { transport, host, port } => {
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                transport = ?transport,
                "Starting Semantic Scholar MCP server"
            );

            let server = build_server(cli.api_key, cli.api_url.as_deref())?;

            match transport {
                Transport::Stdio => server.run_stdio().await?,
                Transport::Http => {
                    tracing::info!(%host, port, "Running in HTTP mode");
                    server.run_http(&host, port).await?;
                }
            }

            Ok(ExitCode::SUCCESS)
        }
        Command::Tools(ToolsCommand::List { format, verbose }) => {
            print!("{}", render_catalog(&tools::register_all_tools(), format, verbose));
            Ok(ExitCode::SUCCESS)
        }
        Command::Tools(command) => {
            let Some((name, arguments)) = command.into_call()? else {
                return Ok(ExitCode::SUCCESS);
            };

            let server = build_server(cli.api_key, cli.api_url.as_deref())?;
            let tool = server
                .get_tool(name)
                .ok_or_else(|| anyhow::anyhow!("tool not registered: {name}"))?;

            match tool.execute(server.context(), arguments).await {
                Ok(output) => {
                    println!("{output}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{:#}", e.to_payload());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
