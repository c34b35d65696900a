//! Semantic Scholar MCP Server
//!
//! A Model Context Protocol (MCP) server for the Semantic Scholar Graph API.
//! Exposes four tools to LLM agents: paper search, paper lookup, author
//! listing and citation formatting.
//!
//! # Features
//!
//! - **Field selection**: caller-chosen `fields` lists, validated and normalized
//! - **Local citations**: BibTeX, APA, MLA and Chicago rendered from metadata
//! - **Typed failures**: invalid arguments, upstream status, timeouts, bad bodies
//! - **Two transports**: stdio and stateless HTTP
//!
//! # Example
//!
//! ```no_run
//! use semantic_scholar_mcp::{client::SemanticScholarClient, config::Config};
//! use semantic_scholar_mcp::formatters::{CitationFormat, format_citation};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = SemanticScholarClient::new(config)?;
//!
//!     let paper = client.get_paper("ARXIV:1706.03762", "title,authors,year,venue").await?;
//!     println!("{}", format_citation(&paper.decoded, CitationFormat::Apa));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, ErrorKind, ToolError};
pub use fields::{EntityKind, FieldSpec};
pub use formatters::CitationFormat;
