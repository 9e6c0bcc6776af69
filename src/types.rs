//! Parameter and result types for the Serper API
//!
//! Parameter types derive `JsonSchema` so the MCP tool schemas are generated
//! from them. Result types are deliberately lenient: the known top-level
//! Serper fields are typed, everything else is carried through untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Search Parameters
// ============================================================================

/// Time window filter accepted by the search endpoint (`tbs` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TimeWindow {
    /// Results from the past hour
    #[serde(rename = "qdr:h")]
    PastHour,
    /// Results from the past day
    #[serde(rename = "qdr:d")]
    PastDay,
    /// Results from the past week
    #[serde(rename = "qdr:w")]
    PastWeek,
    /// Results from the past month
    #[serde(rename = "qdr:m")]
    PastMonth,
    /// Results from the past year
    #[serde(rename = "qdr:y")]
    PastYear,
}

/// Parameters for a single Google search via Serper.
///
/// The advanced operator fields (`site`, `filetype`, ..., `or`) are folded
/// into the query string by [`crate::query::build_query`] before the request
/// is sent; they are never serialized to the wire on their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query string
    #[schemars(description = "Search query string (max 500 characters)")]
    pub q: String,
    /// Region code for the search
    #[schemars(description = "Region code for search results, e.g. 'us' or 'de'")]
    pub gl: String,
    /// Language code for the search
    #[schemars(description = "Language code for search results, e.g. 'en' or 'fr'")]
    pub hl: String,
    /// Location to originate the search from
    #[schemars(description = "Optional location for search results, e.g. 'Berlin, Germany'")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Number of results per page
    #[schemars(description = "Number of results per page (default: 10)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
    /// Result page number, starting at 1
    #[schemars(description = "Page number of results to return (default: 1)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Time window filter
    #[schemars(description = "Time filter: 'qdr:h' (hour), 'qdr:d' (day), 'qdr:w' (week), 'qdr:m' (month) or 'qdr:y' (year)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbs: Option<TimeWindow>,
    /// Whether to autocorrect the query
    #[schemars(description = "Whether to autocorrect spelling in the query (default: true)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocorrect: Option<bool>,

    // Advanced search operators, folded into `q` by the query builder.
    /// Limit results to a specific domain
    #[schemars(description = "Limit results to a specific domain (site: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Limit results to a specific file type
    #[schemars(description = "Limit results to a file type such as 'pdf' or 'doc' (filetype: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// Term that must appear in the page URL
    #[schemars(description = "Search for pages with this term in the URL (inurl: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inurl: Option<String>,
    /// Term that must appear in the page title
    #[schemars(description = "Search for pages with this term in the title (intitle: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intitle: Option<String>,
    /// Find sites related to a URL
    #[schemars(description = "Find sites related to this URL (related: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
    /// View the cached version of a URL
    #[schemars(description = "View the cached version of this URL (cache: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    /// Only results dated before this value
    #[schemars(description = "Only results before this date, YYYY-MM-DD (before: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Only results dated after this value
    #[schemars(description = "Only results after this date, YYYY-MM-DD (after: operator)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Exact phrase that must appear in results
    #[schemars(description = "Exact phrase the results must contain")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<String>,
    /// Comma-separated terms to exclude
    #[schemars(description = "Comma-separated terms to exclude from results")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Comma-separated alternative terms (OR)
    #[schemars(description = "Comma-separated alternative terms, any of which may match (OR)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or: Option<String>,
}

/// Parameters for a batch of Google searches.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchSearchParams {
    /// The searches to run; results are returned in the same order
    #[schemars(description = "Array of search parameter objects, one per query (must not be empty)")]
    pub queries: Vec<SearchParams>,
}

// ============================================================================
// Scrape Parameters
// ============================================================================

/// Parameters for scraping a web page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeParams {
    /// The URL of the page to scrape
    #[schemars(description = "The URL of the web page to scrape")]
    pub url: String,
    /// Whether to include a markdown rendering of the page
    #[schemars(description = "Whether to include a markdown rendering of the page (default: true)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_markdown: Option<bool>,
}

// ============================================================================
// Result Types (pass-through)
// ============================================================================

/// A single search response from Serper.
///
/// The inner shape of each field is whatever Serper returned; only the
/// top-level keys are named so callers can pick out the common sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Echo of the parameters the API resolved the search with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_parameters: Option<Value>,
    /// Organic search hits
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organic: Vec<Value>,
    /// Knowledge graph panel, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<Value>,
    /// "People also ask" entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people_also_ask: Vec<Value>,
    /// Related search suggestions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_searches: Vec<Value>,
    /// Anything else Serper sent, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A scrape response from Serper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Plain text content of the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Markdown rendering, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Head metadata (title, og tags, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// JSON-LD blocks found in the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonld: Option<Value>,
    /// Anything else Serper sent, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_window_serializes_as_tbs_value() {
        let json = serde_json::to_string(&TimeWindow::PastWeek).unwrap();
        assert_eq!(json, "\"qdr:w\"");
        let parsed: TimeWindow = serde_json::from_str("\"qdr:h\"").unwrap();
        assert_eq!(parsed, TimeWindow::PastHour);
    }

    #[test]
    fn search_result_preserves_unknown_fields() {
        let body = serde_json::json!({
            "searchParameters": {"q": "rust"},
            "organic": [{"title": "The Rust Programming Language"}],
            "credits": 1
        });
        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.organic.len(), 1);
        assert_eq!(result.extra.get("credits"), Some(&serde_json::json!(1)));

        let round_tripped = serde_json::to_value(&result).unwrap();
        assert_eq!(round_tripped.get("credits"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn scrape_result_tolerates_minimal_body() {
        let result: ScrapeResult = serde_json::from_str("{\"text\": \"hello\"}").unwrap();
        assert_eq!(result.text.as_deref(), Some("hello"));
        assert!(result.markdown.is_none());
    }
}
