//! Prompt template library
//!
//! Pure string templating: each template renders a single user-role
//! instruction message from its arguments, applying defaults for anything
//! optional. No I/O happens here; the MCP prompt router in `server.rs` is
//! the only caller.

use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default research depth for `research_topic`.
pub const DEFAULT_DEPTH: &str = "basic";
/// Default minimum number of sources for `fact_check`.
pub const DEFAULT_MIN_SOURCES: u32 = 3;
/// Default thoroughness for `analyze_page`.
pub const DEFAULT_THOROUGHNESS: &str = "quick";

// ============================================================================
// Argument Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResearchTopicArgs {
    /// The topic to research
    #[schemars(description = "The topic to research")]
    pub topic: String,
    /// Research depth
    #[schemars(description = "Research depth: 'basic', 'detailed' or 'comprehensive' (default: 'basic')")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FactCheckArgs {
    /// The claim to verify
    #[schemars(description = "The claim to verify")]
    pub claim: String,
    /// Minimum number of independent sources
    #[schemars(description = "Minimum number of independent sources to consult (default: 3)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sources: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzePageArgs {
    /// The URL of the page to analyze
    #[schemars(description = "The URL of the page to analyze")]
    pub url: String,
    /// Analysis thoroughness
    #[schemars(description = "Analysis thoroughness: 'quick', 'standard' or 'deep' (default: 'quick')")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughness: Option<String>,
}

// ============================================================================
// Templates
// ============================================================================

fn user_prompt(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}

/// Render the `research_topic` template.
///
/// Unknown depth values fall back to the default plan rather than failing;
/// prompt arguments arrive as loose strings and rendering is total.
pub fn research_topic(args: &ResearchTopicArgs) -> GetPromptResult {
    let depth = args.depth.as_deref().unwrap_or(DEFAULT_DEPTH);
    let plan = match depth {
        "comprehensive" => {
            "Run several google_search calls covering definitions, recent \
             developments, opposing viewpoints, and authoritative references. \
             Use batch_google_search to fan out related queries, then scrape \
             the five most promising pages for detail."
        }
        "detailed" => {
            "Run google_search for the topic and two refining queries, then \
             scrape the three most relevant results for supporting detail."
        }
        // "basic" and anything unrecognized
        _ => "Run a single google_search for the topic and summarize the top results.",
    };

    user_prompt(
        "Structured web research plan",
        format!(
            "Research the topic: {topic}\n\n\
             Depth: {depth}\n\n\
             {plan}\n\n\
             Cite the URL of every source you rely on, and finish with a \
             short synthesis of what you found.",
            topic = args.topic,
        ),
    )
}

/// Render the `fact_check` template.
pub fn fact_check(args: &FactCheckArgs) -> GetPromptResult {
    let min_sources = args
        .min_sources
        .as_deref()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_MIN_SOURCES);

    user_prompt(
        "Verify a claim against independent sources",
        format!(
            "Fact-check the following claim:\n\n{claim}\n\n\
             Use google_search to find at least {min_sources} independent \
             sources, preferring primary sources and established outlets. \
             Scrape any page whose snippet is inconclusive. Conclude with a \
             verdict (supported, refuted, or unverifiable) and list each \
             source with its URL.",
            claim = args.claim,
        ),
    )
}

/// Render the `analyze_page` template.
pub fn analyze_page(args: &AnalyzePageArgs) -> GetPromptResult {
    let thoroughness = args.thoroughness.as_deref().unwrap_or(DEFAULT_THOROUGHNESS);
    let plan = match thoroughness {
        "deep" => {
            "Scrape the page with markdown enabled, then run google_search \
             for the site (site: operator) and for the page's main claims to \
             place it in context. Report structure, key content, metadata, \
             and anything the page links to that looks load-bearing."
        }
        "standard" => {
            "Scrape the page with markdown enabled and report its structure, \
             key content, and metadata."
        }
        // "quick" and anything unrecognized
        _ => "Scrape the page and summarize its main content in a few sentences.",
    };

    user_prompt(
        "Analyze a web page with the scrape tool",
        format!(
            "Analyze the page at: {url}\n\nThoroughness: {thoroughness}\n\n{plan}",
            url = args.url,
        ),
    )
}
