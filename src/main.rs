//! Serper MCP Server
//!
//! Web search and scraping via the Serper API, served over stdio.
//!
//! # Configuration
//! Set `SERPER_API_KEY`; see `config.rs` for optional overrides.

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use serper_mcp::config::Config;
use serper_mcp::server::SerperMcpServer;

/// Set up logging to stderr (stdout is reserved for the MCP protocol).
///
/// Filtering via RUST_LOG, default `serper_mcp=info`. Set `LOG_FORMAT=json`
/// for structured output.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("serper_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting Serper MCP Server");

    let config = Config::load()?;
    tracing::info!("Search endpoint: {}", config.search_base_url);
    tracing::info!("Scrape endpoint: {}", config.scrape_url);

    let server = SerperMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn json_log_layer_is_available() {
        // Constructed but never installed; the LOG_FORMAT=json path of
        // init_tracing depends on this layer existing.
        let _ = tracing_subscriber::fmt::layer::<tracing_subscriber::Registry>()
            .json()
            .with_writer(std::io::stderr);
    }
}
