//! HTTP client for the Serper search and scrape API
//!
//! Owns the network contract: request bodies, the `X-API-KEY` header, and
//! the mapping of non-2xx responses into [`SerperError`]. One request in,
//! one response out — no retries, no caching.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{SerperError, SerperResult};
use crate::query::build_query;
use crate::types::{ScrapeParams, ScrapeResult, SearchParams, SearchResult, TimeWindow};

/// Client for the Serper API.
///
/// Holds only read-only configuration, so it is safe to share across
/// concurrent tool calls.
pub struct SerperClient {
    client: Client,
    config: Config,
}

/// Wire shape of a single search request.
///
/// The advanced operator fields of [`SearchParams`] are folded into `q`
/// here; Serper only ever sees the fields it documents.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: String,
    gl: &'a str,
    hl: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tbs: Option<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autocorrect: Option<bool>,
}

impl<'a> From<&'a SearchParams> for SearchRequest<'a> {
    fn from(params: &'a SearchParams) -> Self {
        Self {
            q: build_query(params),
            gl: &params.gl,
            hl: &params.hl,
            location: params.location.as_deref(),
            num: params.num,
            page: params.page,
            tbs: params.tbs,
            autocorrect: params.autocorrect,
        }
    }
}

impl SerperClient {
    pub fn new(config: Config) -> SerperResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("serper-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Run a single search. The query string is expanded from the advanced
    /// operator fields before sending.
    pub async fn search(&self, params: &SearchParams) -> SerperResult<SearchResult> {
        let body = SearchRequest::from(params);
        tracing::debug!(query = %body.q, "sending search request");

        let response = self
            .client
            .post(format!("{}/search", self.config.search_base_url))
            .header("X-API-KEY", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Run several searches in one API call.
    ///
    /// The response array is index-aligned with `queries`; an empty batch is
    /// rejected before any network traffic.
    pub async fn batch_search(&self, queries: &[SearchParams]) -> SerperResult<Vec<SearchResult>> {
        if queries.is_empty() {
            return Err(SerperError::EmptyBatch);
        }

        let body: Vec<SearchRequest> = queries.iter().map(SearchRequest::from).collect();
        tracing::debug!(count = body.len(), "sending batch search request");

        let response = self
            .client
            .post(format!("{}/search", self.config.search_base_url))
            .header("X-API-KEY", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Scrape a web page. The URL must be an absolute http(s) URL; redirects
    /// are followed.
    pub async fn scrape(&self, params: &ScrapeParams) -> SerperResult<ScrapeResult> {
        validate_scrape_url(&params.url)?;
        tracing::debug!(url = %params.url, "sending scrape request");

        let response = self
            .client
            .post(&self.config.scrape_url)
            .header("X-API-KEY", &self.config.api_key)
            .json(params)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Map a response to its parsed body, or to an API/decode error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> SerperResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SerperError::Api { status, body });
        }

        serde_json::from_str(&body).map_err(SerperError::Decode)
    }
}

/// Reject empty or non-absolute-http(s) scrape targets before any I/O.
pub fn validate_scrape_url(raw: &str) -> SerperResult<()> {
    if raw.trim().is_empty() {
        return Err(SerperError::InvalidUrl("url must not be empty".to_string()));
    }
    match url::Url::parse(raw) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(parsed) => Err(SerperError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            parsed.scheme()
        ))),
        Err(e) => Err(SerperError::InvalidUrl(format!("{raw}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SerperClient {
        let config = Config {
            api_key: "test-key".to_string(),
            // Point at a closed local port; no test below should ever reach it.
            search_base_url: "http://127.0.0.1:9".to_string(),
            scrape_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        SerperClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn empty_batch_is_rejected_before_any_network_call() {
        let err = client().batch_search(&[]).await.unwrap_err();
        assert!(matches!(err, SerperError::EmptyBatch));
    }

    #[tokio::test]
    async fn empty_scrape_url_is_rejected_before_any_network_call() {
        let params = ScrapeParams {
            url: String::new(),
            include_markdown: None,
        };
        let err = client().scrape(&params).await.unwrap_err();
        assert!(matches!(err, SerperError::InvalidUrl(_)));
    }

    #[test]
    fn scrape_url_must_be_absolute_http() {
        assert!(validate_scrape_url("https://example.com/page").is_ok());
        assert!(validate_scrape_url("http://example.com").is_ok());
        assert!(matches!(
            validate_scrape_url("ftp://example.com"),
            Err(SerperError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_scrape_url("not a url"),
            Err(SerperError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_scrape_url("   "),
            Err(SerperError::InvalidUrl(_))
        ));
    }

    #[test]
    fn search_request_folds_operators_into_q() {
        let params = SearchParams {
            q: "rust async".to_string(),
            gl: "us".to_string(),
            hl: "en".to_string(),
            site: Some("docs.rs".to_string()),
            exclude: Some("beta".to_string()),
            num: Some(5),
            ..SearchParams::default()
        };
        let body = serde_json::to_value(SearchRequest::from(&params)).unwrap();

        assert_eq!(body["q"], "rust async site:docs.rs -beta");
        assert_eq!(body["gl"], "us");
        assert_eq!(body["hl"], "en");
        assert_eq!(body["num"], 5);
        // Operator fields must not leak onto the wire.
        assert!(body.get("site").is_none());
        assert!(body.get("exclude").is_none());
        // Unset optionals are omitted entirely.
        assert!(body.get("location").is_none());
        assert!(body.get("tbs").is_none());
    }

    #[test]
    fn batch_body_preserves_query_order() {
        let queries: Vec<SearchParams> = ["first", "second", "third"]
            .iter()
            .map(|q| SearchParams {
                q: q.to_string(),
                gl: "us".to_string(),
                hl: "en".to_string(),
                ..SearchParams::default()
            })
            .collect();
        let body: Vec<SearchRequest> = queries.iter().map(SearchRequest::from).collect();
        let json = serde_json::to_value(&body).unwrap();

        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["q"], "first");
        assert_eq!(array[2]["q"], "third");
    }
}
