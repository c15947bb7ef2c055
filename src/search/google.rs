//! Google Programmable Search client.
//!
//! Queries the Custom Search JSON API and maps hits into [`EvidenceItem`]s.
//! Missing credentials and failed requests are recognized conditions, not
//! errors: both degrade to a single internal-knowledge fallback item so the
//! pipeline can keep moving without live search.

use crate::config::SearchConfig;
use crate::search::provider::{fallback_evidence, SearchProvider};
use crate::types::{AppError, EvidenceItem, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const GOOGLE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Search provider backed by the Custom Search JSON API.
pub struct GoogleSearch {
    client: reqwest::Client,
    api_key: Option<String>,
    cx: Option<String>,
    endpoint: String,
}

impl GoogleSearch {
    /// Build a client with the given credentials and per-request timeout.
    pub fn new(config: &SearchConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.google_api_key.clone(),
            cx: config.google_cx.clone(),
            endpoint: GOOGLE_SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint. Used to run against a local
    /// stub server in tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        match (self.api_key.as_deref(), self.cx.as_deref()) {
            (Some(key), Some(cx)) if !key.is_empty() && !cx.is_empty() => Some((key, cx)),
            _ => None,
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<EvidenceItem>> {
        let Some((key, cx)) = self.credentials() else {
            tracing::warn!("Google search credentials missing, using fallback evidence");
            return Ok(vec![fallback_evidence(query)]);
        };

        // The API caps results at 10 per request
        let num = max_results.min(10).to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("key", key), ("cx", cx), ("q", query), ("num", num.as_str())])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Search error: {}", e);
                return Ok(vec![fallback_evidence(query)]);
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Google Search API error: {}", response.status());
            return Ok(vec![fallback_evidence(query)]);
        }

        match response.json::<SearchResponse>().await {
            Ok(data) => Ok(data.items.into_iter().map(into_evidence).collect()),
            Err(e) => {
                tracing::warn!("Search error: {}", e);
                Ok(vec![fallback_evidence(query)])
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
    display_link: Option<String>,
}

fn into_evidence(item: SearchResult) -> EvidenceItem {
    EvidenceItem {
        title: item.title.unwrap_or_else(|| "No title".to_string()),
        snippet: item
            .snippet
            .unwrap_or_else(|| "No description available".to_string()),
        url: item.link.unwrap_or_default(),
        source: item.display_link.unwrap_or_else(|| "Unknown source".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::provider::FALLBACK_LOCATOR;

    fn unconfigured() -> GoogleSearch {
        let config = SearchConfig {
            google_api_key: None,
            google_cx: None,
        };
        GoogleSearch::new(&config, Duration::from_secs(8)).unwrap()
    }

    #[tokio::test]
    async fn test_missing_credentials_degrade_to_fallback() {
        let provider = unconfigured();
        let results = provider.search("rust async runtimes", 3).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, FALLBACK_LOCATOR);
        assert!(results[0].title.contains("rust async runtimes"));
    }

    #[tokio::test]
    async fn test_empty_credentials_count_as_missing() {
        let config = SearchConfig {
            google_api_key: Some(String::new()),
            google_cx: Some("cx".to_string()),
        };
        let provider = GoogleSearch::new(&config, Duration::from_secs(8)).unwrap();

        let results = provider.search("anything", 3).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, FALLBACK_LOCATOR);
    }

    #[test]
    fn test_response_mapping_fills_defaults() {
        let payload = serde_json::json!({
            "items": [
                {
                    "title": "Study A",
                    "snippet": "Findings...",
                    "link": "https://example.com/a",
                    "displayLink": "example.com"
                },
                {}
            ]
        });

        let parsed: SearchResponse = serde_json::from_value(payload).unwrap();
        let items: Vec<EvidenceItem> = parsed.items.into_iter().map(into_evidence).collect();

        assert_eq!(items[0].title, "Study A");
        assert_eq!(items[0].url, "https://example.com/a");
        assert_eq!(items[0].source, "example.com");

        assert_eq!(items[1].title, "No title");
        assert_eq!(items[1].snippet, "No description available");
        assert_eq!(items[1].url, "");
        assert_eq!(items[1].source, "Unknown source");
    }

    #[test]
    fn test_response_without_items_is_empty() {
        let parsed: SearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.items.is_empty());
    }
}
