//! Wikipedia Lookup Implementation
//!
//! Title search through the MediaWiki action API and article summaries
//! through the REST summary endpoint.
//!
//! # Features
//!
//! - Configurable endpoint, so tests and mirrors can point elsewhere
//! - Retry with exponential backoff on transport errors and 5xx
//! - A 404 summary is "no article", not an error
//!
//! # Examples
//!
//! ```no_run
//! use glass_reference::{ReferenceConfig, WikipediaLookup};
//!
//! let lookup = WikipediaLookup::new(ReferenceConfig::default()).unwrap();
//! ```

use crate::config::ReferenceConfig;
use crate::LookupError;
use glass_domain::traits::ReferenceLookup;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Encyclopedia lookup over HTTP
pub struct WikipediaLookup {
    base: Url,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    extract: Option<String>,
}

impl WikipediaLookup {
    /// Create a lookup client from configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, the endpoint is not an
    /// absolute URL or the HTTP client cannot be built.
    pub fn new(config: ReferenceConfig) -> Result<Self, LookupError> {
        config.validate().map_err(LookupError::InvalidEndpoint)?;

        let base = Url::parse(config.endpoint.trim_end_matches('/'))
            .map_err(|e| LookupError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;
        if base.cannot_be_a_base() {
            return Err(LookupError::InvalidEndpoint(config.endpoint));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LookupError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base,
            client,
            max_retries: config.max_retries,
        })
    }

    /// URL of the title search for `query`
    fn search_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = self.endpoint_url(&["w", "api.php"])?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "search")
            .append_pair("srsearch", query)
            .append_pair("srlimit", "1")
            .append_pair("format", "json");
        Ok(url)
    }

    /// URL of the summary for `title`
    fn summary_url(&self, title: &str) -> Result<Url, LookupError> {
        let title = title.trim().replace(' ', "_");
        self.endpoint_url(&["api", "rest_v1", "page", "summary", &title])
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidEndpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode JSON, retrying transient failures
    ///
    /// A 404 yields `Ok(None)`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, LookupError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<T>().await.map(Some).map_err(|e| {
                            LookupError::InvalidResponse(format!("Failed to parse response: {}", e))
                        });
                    }
                    if status == StatusCode::NOT_FOUND {
                        return Ok(None);
                    }
                    if status.is_client_error() {
                        return Err(LookupError::Communication(format!("HTTP {}", status)));
                    }
                    last_error = Some(LookupError::Communication(format!("HTTP {}", status)));
                }
                Err(e) => {
                    last_error = Some(LookupError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // 250ms, 500ms, 1s, ...
                let delay = Duration::from_millis(250 * 2u64.pow(attempts - 1));
                debug!("Lookup attempt {} failed, retrying in {:?}", attempts, delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| LookupError::Communication("Max retries exceeded".to_string())))
    }
}

impl ReferenceLookup for WikipediaLookup {
    type Error = LookupError;

    async fn search_title(&self, query: &str) -> Result<Option<String>, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = self.search_url(query)?;
        let response: Option<SearchResponse> = self.get_json(url).await?;

        Ok(response
            .and_then(|r| r.query)
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title))
    }

    async fn summary(&self, title: &str) -> Result<Option<String>, LookupError> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let url = self.summary_url(title)?;
        let response: Option<SummaryResponse> = self.get_json(url).await?;

        Ok(response
            .and_then(|r| r.extract)
            .filter(|extract| !extract.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(endpoint: &str) -> WikipediaLookup {
        WikipediaLookup::new(ReferenceConfig {
            endpoint: endpoint.to_string(),
            ..ReferenceConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_search_url() {
        let url = lookup("https://en.wikipedia.org").search_url("elon musk").unwrap();
        assert_eq!(url.path(), "/w/api.php");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("srsearch".to_string(), "elon musk".to_string())));
        assert!(pairs.contains(&("list".to_string(), "search".to_string())));
    }

    #[test]
    fn test_summary_url_encodes_title() {
        let url = lookup("https://en.wikipedia.org/").summary_url("Mount Everest").unwrap();
        assert_eq!(url.path(), "/api/rest_v1/page/summary/Mount_Everest");

        let url = lookup("https://en.wikipedia.org").summary_url("AC/DC").unwrap();
        assert_eq!(url.path(), "/api/rest_v1/page/summary/AC%2FDC");
    }

    #[test]
    fn test_endpoint_with_path_prefix() {
        let url = lookup("http://localhost:8080/mirror").summary_url("Earth").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/mirror/api/rest_v1/page/summary/Earth");
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let result = WikipediaLookup::new(ReferenceConfig {
            endpoint: "not a url".to_string(),
            ..ReferenceConfig::default()
        });
        assert!(matches!(result, Err(LookupError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{"batchcomplete":"","query":{"searchinfo":{"totalhits":2},"search":[{"ns":0,"title":"Elon Musk"},{"ns":0,"title":"Musk"}]}}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.query.unwrap().search[0].title, "Elon Musk");
    }

    #[test]
    fn test_parse_summary_without_extract() {
        let parsed: SummaryResponse = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert!(parsed.extract.is_none());
    }

    #[tokio::test]
    async fn test_blank_query_short_circuits() {
        // No request is made, so an unreachable endpoint is fine
        let lookup = lookup("http://127.0.0.1:9");
        assert!(lookup.search_title("   ").await.unwrap().is_none());
        assert!(lookup.summary("").await.unwrap().is_none());
    }
}
