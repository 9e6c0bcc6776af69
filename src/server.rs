//! MCP server implementation for Serper search and scrape
//!
//! Wires the tool layer and the prompt library into rmcp's tool and prompt
//! routers. The routers own dispatch, schema publication, and unknown-name
//! errors; the handlers here stay thin.

use anyhow::Result;
use rmcp::{
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde::Serialize;
use std::sync::Arc;

use crate::client::SerperClient;
use crate::config::Config;
use crate::error::to_mcp_error;
use crate::prompts::{self, AnalyzePageArgs, FactCheckArgs, ResearchTopicArgs};
use crate::tools::SerperTools;
use crate::types::{BatchSearchParams, ScrapeParams, SearchParams};

/// The Serper MCP server.
#[derive(Clone)]
pub struct SerperMcpServer {
    tools: Arc<SerperTools>,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

/// Serialize tool output as a pretty-printed JSON text payload.
fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SerperMcpServer {
    pub fn new(config: Config) -> Result<Self> {
        let client = SerperClient::new(config)?;

        Ok(Self {
            tools: Arc::new(SerperTools::new(client)),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        })
    }

    #[tool(
        description = "Search the web with Google via Serper. Supports region/language codes, \
                       pagination, time filters, and advanced operators (site, filetype, inurl, \
                       intitle, related, cache, before, after, exact, exclude, or)."
    )]
    async fn google_search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(query = %params.q, gl = %params.gl, hl = %params.hl, "google_search");

        let result = self.tools.search(params).await.map_err(to_mcp_error)?;
        json_success(&result)
    }

    #[tool(
        description = "Run multiple Google searches in a single call. Takes an array of search \
                       parameter objects and returns results in the same order."
    )]
    async fn batch_google_search(
        &self,
        Parameters(params): Parameters<BatchSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(count = params.queries.len(), "batch_google_search");

        let results = self
            .tools
            .batch_search(params.queries)
            .await
            .map_err(to_mcp_error)?;
        json_success(&results)
    }

    #[tool(
        description = "Scrape a web page via Serper. Returns the page text, optional markdown, \
                       head metadata, and JSON-LD."
    )]
    async fn scrape(
        &self,
        Parameters(params): Parameters<ScrapeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(url = %params.url, "scrape");

        let result = self.tools.scrape(params).await.map_err(to_mcp_error)?;
        json_success(&result)
    }
}

// ============================================================================
// Prompt Router Implementation
// ============================================================================

#[prompt_router]
impl SerperMcpServer {
    #[prompt(
        name = "research_topic",
        description = "Plan structured web research on a topic using the search and scrape tools"
    )]
    async fn research_topic(
        &self,
        Parameters(args): Parameters<ResearchTopicArgs>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(prompts::research_topic(&args))
    }

    #[prompt(
        name = "fact_check",
        description = "Verify a claim against multiple independent web sources"
    )]
    async fn fact_check(
        &self,
        Parameters(args): Parameters<FactCheckArgs>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(prompts::fact_check(&args))
    }

    #[prompt(
        name = "analyze_page",
        description = "Analyze the content and structure of a web page with the scrape tool"
    )]
    async fn analyze_page(
        &self,
        Parameters(args): Parameters<AnalyzePageArgs>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(prompts::analyze_page(&args))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
#[prompt_handler]
impl rmcp::ServerHandler for SerperMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Serper MCP Server - web search and scraping backed by the Serper API. \
                 Tools: google_search (single query with advanced operators), \
                 batch_google_search (multiple queries in one call), and scrape \
                 (fetch a page as text/markdown with metadata). Prompts: \
                 research_topic, fact_check, analyze_page. Requires SERPER_API_KEY."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }
}
