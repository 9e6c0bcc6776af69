//! Error types for the Serper client and their MCP mapping

use reqwest::StatusCode;
use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors produced by the Serper client and the tool-boundary validation.
#[derive(Error, Debug)]
pub enum SerperError {
    /// Query rejected before any network call
    #[error("invalid search query: {0}")]
    InvalidQuery(String),

    /// Batch search called with no queries
    #[error("batch search requires at least one query")]
    EmptyBatch,

    /// Scrape target missing or not an absolute http(s) URL
    #[error("invalid scrape url: {0}")]
    InvalidUrl(String),

    /// Non-2xx response from the Serper API
    #[error("serper api error {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Connection, DNS, or timeout failure
    #[error("serper request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body was not the expected JSON
    #[error("failed to decode serper response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SerperError {
    /// Whether this error was raised before any network call was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SerperError::InvalidQuery(_) | SerperError::EmptyBatch | SerperError::InvalidUrl(_)
        )
    }
}

pub type SerperResult<T> = Result<T, SerperError>;

/// Convert a tool-layer failure into an MCP error.
///
/// Validation failures become `invalid_params`, everything else becomes
/// `internal_error`. The message carries the full context chain so the
/// caller sees both the operation and the underlying cause.
pub fn to_mcp_error(err: anyhow::Error) -> McpError {
    let message = format!("{err:#}");
    match err.downcast_ref::<SerperError>() {
        Some(e) if e.is_validation() => McpError::invalid_params(message, None),
        _ => McpError::internal_error(message, None),
    }
}
