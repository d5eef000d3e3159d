//! # Guardian Content API Collector
//!
//! Adapter for the Guardian's public content API. One `request()` performs a
//! single search call against the `/search` endpoint and normalizes the
//! result page into [`Article`] records.
//!
//! The client is blocking by design: the ingestion session processes one
//! source fully before the next, so there is nothing to overlap with.

use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use super::{Article, Collector, STATUS_UNREACHABLE};

const SEARCH_URL: &str = "https://content.guardianapis.com/search";
const USER_AGENT: &str = "newswire-collector/0.1";
const PAGE_SIZE: &str = "50";

/// Response envelope returned by the Guardian content API.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    web_title: String,
    section_name: Option<String>,
    web_url: String,
    web_publication_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Collector for the Guardian content API.
pub struct GuardianCollector {
    /// Reused across calls to leverage connection pooling; configured with a
    /// request timeout so a stalled upstream cannot hang the whole session.
    client: reqwest::blocking::Client,
    api_key: String,
    articles: Vec<Article>,
}

impl GuardianCollector {
    /// Creates a new adapter. The Guardian issues per-caller API keys; the
    /// public `test` key works for development traffic.
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(), // Fallback to a default client if builder fails.
            api_key,
            articles: Vec::new(),
        }
    }
}

impl Collector for GuardianCollector {
    fn name(&self) -> &str {
        "guardian"
    }

    fn request(&mut self) -> u16 {
        self.articles.clear();

        let sent = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("page-size", PAGE_SIZE),
                ("order-by", "newest"),
            ])
            .send();

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                warn!("guardian: request failed: {}", e);
                return STATUS_UNREACHABLE;
            }
        };

        let status = response.status().as_u16();
        if !response.status().is_success() {
            // The driver treats any non-2xx as "no results this run".
            return status;
        }

        match response.json::<SearchResponse>() {
            Ok(body) => {
                self.articles = body
                    .response
                    .results
                    .into_iter()
                    .map(|result| Article {
                        title: result.web_title,
                        section: result.section_name,
                        url: result.web_url,
                        published_at: result.web_publication_date,
                    })
                    .collect();
                debug!("guardian: fetched {} articles", self.articles.len());
                status
            }
            Err(e) => {
                warn!("guardian: could not decode response body: {}", e);
                STATUS_UNREACHABLE
            }
        }
    }

    fn results(&self) -> &[Article] {
        &self.articles
    }
}
