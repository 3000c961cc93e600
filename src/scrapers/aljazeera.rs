//! Al Jazeera Arabic search scraper.
//!
//! Searches [aljazeera.net](https://www.aljazeera.net) for a topic and reports
//! whether the server-rendered results page lists any stories.
//!
//! # URL Pattern
//!
//! The query is form-encoded into the last path segment:
//! `https://www.aljazeera.net/search/%D9%85%D8%B5%D8%B1+2024`.
//!
//! # Detection
//!
//! Results are rendered as `<article>` elements inside the first
//! `div.gc-container`. A container with no articles, or no container at
//! all, means no coverage.

use crate::coverage::CoverageProbe;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, instrument};
use url::form_urlencoded;

static RESULTS_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.gc-container").expect("valid selector"));
static RESULT_ENTRY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("valid selector"));

/// Static-HTML coverage probe over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct HtmlSearchProbe {
    client: Client,
    search_base: String,
}

impl HtmlSearchProbe {
    pub fn new(client: Client, search_base: impl Into<String>) -> Self {
        Self {
            client,
            search_base: search_base.into(),
        }
    }

    /// Search page URL for `topic`; spaces become `+`.
    pub fn search_url(&self, topic: &str) -> String {
        let query: String = form_urlencoded::byte_serialize(topic.as_bytes()).collect();
        format!("{}/{}", self.search_base.trim_end_matches('/'), query)
    }
}

impl CoverageProbe for HtmlSearchProbe {
    #[instrument(level = "debug", skip(self))]
    async fn probe(&self, topic: &str) -> Result<bool, Box<dyn Error>> {
        let url = self.search_url(topic);
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let found = has_search_results(&body);
        debug!(%url, bytes = body.len(), found, "Parsed search results page");
        Ok(found)
    }
}

/// Whether a search results page lists at least one story.
pub fn has_search_results(html: &str) -> bool {
    let document = Html::parse_document(html);
    document
        .select(&RESULTS_CONTAINER)
        .next()
        .is_some_and(|container| container.select(&RESULT_ENTRY).next().is_some())
}
