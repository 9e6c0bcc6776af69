//! Serper MCP Library
//!
//! MCP server exposing the Serper web-search and scrape API as tools
//! (`google_search`, `batch_google_search`, `scrape`) and research prompt
//! templates.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use serper_mcp::{config::Config, SerperMcpServer};
//!
//! let server = SerperMcpServer::new(Config::load()?)?;
//! // Serve via stdio, or drive the routers directly in-process.
//! ```
//!
//! # Configuration
//! Set `SERPER_API_KEY` (required); optional endpoint overrides via
//! `SERPER_SEARCH_URL` / `SERPER_SCRAPE_URL` or `~/.config/serper-mcp.toml`.

pub mod client;
pub mod config;
pub mod error;
pub mod prompts;
pub mod query;
pub mod server;
pub mod tools;
pub mod types;

// Re-export main server type
pub use server::SerperMcpServer;

// Re-export parameter types for direct API usage
pub use types::{BatchSearchParams, ScrapeParams, SearchParams, TimeWindow};
