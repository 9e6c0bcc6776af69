//! Tool layer between the MCP handlers and the Serper client
//!
//! Validates and sanitizes parameters at the tool boundary, forwards them
//! unchanged to [`SerperClient`], and wraps each failure with one layer of
//! context naming the operation (and, for search, the expanded query).

use anyhow::{Context, Result};

use crate::client::{validate_scrape_url, SerperClient};
use crate::error::SerperError;
use crate::query::{build_query, sanitize_query};
use crate::types::{ScrapeParams, ScrapeResult, SearchParams, SearchResult};

/// Maximum length of a sanitized search query, in characters.
pub const MAX_QUERY_LEN: usize = 500;

pub struct SerperTools {
    client: SerperClient,
}

impl SerperTools {
    pub fn new(client: SerperClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, mut params: SearchParams) -> Result<SearchResult> {
        validate_search_params(&mut params)?;
        let query = build_query(&params);

        self.client
            .search(&params)
            .await
            .with_context(|| format!("google_search failed for query {query:?}"))
    }

    pub async fn batch_search(&self, mut queries: Vec<SearchParams>) -> Result<Vec<SearchResult>> {
        if queries.is_empty() {
            return Err(SerperError::EmptyBatch.into());
        }
        for params in &mut queries {
            validate_search_params(params)?;
        }

        self.client
            .batch_search(&queries)
            .await
            .with_context(|| format!("batch_google_search failed for {} queries", queries.len()))
    }

    pub async fn scrape(&self, params: ScrapeParams) -> Result<ScrapeResult> {
        validate_scrape_url(&params.url)?;

        self.client
            .scrape(&params)
            .await
            .with_context(|| format!("scrape failed for url {:?}", params.url))
    }
}

/// Sanitize the base query in place and reject empty or oversized queries.
///
/// Only the free-text query is checked; operator values are passed through
/// verbatim per the no-validation policy of the query builder.
fn validate_search_params(params: &mut SearchParams) -> Result<(), SerperError> {
    let sanitized = sanitize_query(&params.q);
    if sanitized.is_empty() {
        return Err(SerperError::InvalidQuery(
            "query is empty after trimming".to_string(),
        ));
    }
    if sanitized.chars().count() > MAX_QUERY_LEN {
        return Err(SerperError::InvalidQuery(format!(
            "query exceeds {MAX_QUERY_LEN} characters"
        )));
    }
    params.q = sanitized;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn tools() -> SerperTools {
        let config = Config {
            api_key: "test-key".to_string(),
            // Closed local port; validation must fail before reaching it.
            search_base_url: "http://127.0.0.1:9".to_string(),
            scrape_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        SerperTools::new(SerperClient::new(config).unwrap())
    }

    fn search_params(q: &str) -> SearchParams {
        SearchParams {
            q: q.to_string(),
            gl: "us".to_string(),
            hl: "en".to_string(),
            ..SearchParams::default()
        }
    }

    #[test]
    fn sanitization_normalizes_whitespace() {
        let mut params = search_params("  rust \t async  ");
        validate_search_params(&mut params).unwrap();
        assert_eq!(params.q, "rust async");
    }

    #[test]
    fn blank_query_is_invalid() {
        let mut params = search_params("   \t ");
        let err = validate_search_params(&mut params).unwrap_err();
        assert!(matches!(err, SerperError::InvalidQuery(_)));
    }

    #[test]
    fn oversized_query_is_invalid() {
        let mut params = search_params(&"x".repeat(MAX_QUERY_LEN + 1));
        let err = validate_search_params(&mut params).unwrap_err();
        assert!(matches!(err, SerperError::InvalidQuery(_)));
    }

    #[test]
    fn query_at_the_limit_is_valid() {
        let mut params = search_params(&"x".repeat(MAX_QUERY_LEN));
        assert!(validate_search_params(&mut params).is_ok());
    }

    #[tokio::test]
    async fn blank_query_rejected_without_network_call() {
        let err = tools().search(search_params(" ")).await.unwrap_err();
        let serper = err.downcast_ref::<SerperError>().unwrap();
        assert!(matches!(serper, SerperError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn empty_batch_rejected_without_network_call() {
        let err = tools().batch_search(Vec::new()).await.unwrap_err();
        let serper = err.downcast_ref::<SerperError>().unwrap();
        assert!(matches!(serper, SerperError::EmptyBatch));
    }

    #[tokio::test]
    async fn batch_with_one_blank_query_is_rejected() {
        let queries = vec![search_params("fine"), search_params("  ")];
        let err = tools().batch_search(queries).await.unwrap_err();
        let serper = err.downcast_ref::<SerperError>().unwrap();
        assert!(matches!(serper, SerperError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn empty_scrape_url_rejected_without_network_call() {
        let params = ScrapeParams {
            url: String::new(),
            include_markdown: Some(true),
        };
        let err = tools().scrape(params).await.unwrap_err();
        let serper = err.downcast_ref::<SerperError>().unwrap();
        assert!(matches!(serper, SerperError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn transport_failures_carry_operation_context() {
        // Connecting to a closed port fails at transport level; the tool
        // layer must wrap it with the expanded query.
        let err = tools()
            .search(search_params("rust"))
            .await
            .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("google_search failed for query \"rust\""), "{chain}");
    }
}
