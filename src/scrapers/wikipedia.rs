//! Wikimedia pageview ranking client.
//!
//! Fetches the day's most-viewed articles for a project from
//! [the REST API](https://wikimedia.org/api/rest_v1/), e.g.
//! `https://wikimedia.org/api/rest_v1/metrics/pageviews/top/ar.wikipedia/all-access/2024/01/15`.
//!
//! The response holds one item per day whose `articles` list is already
//! sorted by descending views.

use crate::exclusions::ExclusionSet;
use crate::models::{PageviewsResponse, TopicRecord};
use crate::utils::truncate_for_log;
use chrono::NaiveDate;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, error, info, instrument};

/// Where and what to rank.
#[derive(Debug, Clone)]
pub struct PageviewsQuery<'a> {
    /// REST API base, without trailing slash.
    pub api_base: &'a str,
    /// Wikimedia project, e.g. `ar.wikipedia`.
    pub project: &'a str,
    /// Access type, e.g. `all-access`.
    pub access: &'a str,
    pub date: NaiveDate,
}

impl PageviewsQuery<'_> {
    /// Day-partitioned URL of the top-articles endpoint.
    pub fn url(&self) -> String {
        format!(
            "{}/metrics/pageviews/top/{}/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.project,
            self.access,
            self.date.format("%Y/%m/%d")
        )
    }
}

/// Fetch the top `top_n` articles that survive the exclusion filter.
///
/// # Arguments
///
/// * `client` - Shared HTTP client carrying the browser User-Agent
/// * `query` - API base, project, access type and day to rank
/// * `top_n` - Number of articles to keep after filtering
/// * `exclusions` - Patterns matched against the raw title
///
/// # Returns
///
/// Up to `top_n` [`TopicRecord`]s in upstream rank order, with `coverage`
/// unset. Never fails: transport and response-shape errors are logged and
/// produce an empty list, which the caller treats as "nothing to do".
#[instrument(level = "info", skip(client, exclusions), fields(url = %query.url()))]
pub async fn fetch_top_articles(
    client: &Client,
    query: &PageviewsQuery<'_>,
    top_n: usize,
    exclusions: &ExclusionSet,
) -> Vec<TopicRecord> {
    info!(top_n, date = %query.date, "Fetching top Wikipedia articles");

    let body = match fetch_body(client, &query.url()).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Error fetching Wikipedia data");
            return Vec::new();
        }
    };

    match select_top_articles(&body, top_n, exclusions) {
        Ok(records) => {
            info!(count = records.len(), "Fetched Wikipedia data");
            debug!(?records, "Top articles");
            records
        }
        Err(e) => {
            error!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "Error parsing Wikipedia API response"
            );
            Vec::new()
        }
    }
}

async fn fetch_body(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Parse a pageviews body, drop excluded titles and keep the first `top_n`.
///
/// Exclusions are matched against the raw underscore title before it is
/// converted for display. Upstream order and rank are preserved.
///
/// # Errors
///
/// Returns an error if the body is not valid pageviews JSON or its `items`
/// array is missing or empty.
///
/// # Examples
///
/// ```ignore
/// let body = r#"{"items": [{"articles": [
///     {"article": "الصفحة_الرئيسية", "views": 500000, "rank": 1},
///     {"article": "مصر", "views": 15000, "rank": 2}
/// ]}]}"#;
/// let records = select_top_articles(body, 10, &ExclusionSet::with_defaults())?;
/// assert_eq!(records[0].article, "مصر");
/// ```
pub fn select_top_articles(
    body: &str,
    top_n: usize,
    exclusions: &ExclusionSet,
) -> Result<Vec<TopicRecord>, Box<dyn Error>> {
    let response: PageviewsResponse = serde_json::from_str(body)?;
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or("response contains no items")?;

    let fetched = item.articles.len();
    let records: Vec<TopicRecord> = item
        .articles
        .into_iter()
        .filter(|a| !exclusions.matches(&a.article))
        .take(top_n)
        .map(|a| a.into_record())
        .collect();

    debug!(fetched, kept = records.len(), "Applied exclusions");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_ARTICLES: &str = r#"{
        "items": [{
            "project": "ar.wikipedia",
            "access": "all-access",
            "year": "2024", "month": "01", "day": "15",
            "articles": [
                {"article": "الصفحة_الرئيسية", "views": 500000, "rank": 1},
                {"article": "كرة_القدم", "views": 20000, "rank": 2},
                {"article": "مصر", "views": 15000, "rank": 3}
            ]
        }]
    }"#;

    #[test]
    fn test_query_url_is_day_partitioned() {
        let query = PageviewsQuery {
            api_base: "https://wikimedia.org/api/rest_v1/",
            project: "ar.wikipedia",
            access: "all-access",
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        assert_eq!(
            query.url(),
            "https://wikimedia.org/api/rest_v1/metrics/pageviews/top/ar.wikipedia/all-access/2024/01/05"
        );
    }

    #[test]
    fn test_excluded_title_skipped_before_truncation() {
        let records =
            select_top_articles(THREE_ARTICLES, 2, &ExclusionSet::with_defaults()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].article, "كرة القدم");
        assert_eq!(records[0].rank, 2);
        assert_eq!(records[1].article, "مصر");
        assert_eq!(records[1].rank, 3);
        assert!(records.iter().all(|r| r.coverage.is_none()));
    }

    #[test]
    fn test_count_never_exceeds_request_or_fetched() {
        let exclusions = ExclusionSet::with_defaults();
        for top_n in 0..6 {
            let records = select_top_articles(THREE_ARTICLES, top_n, &exclusions).unwrap();
            assert!(records.len() <= top_n);
            assert!(records.len() <= 3);
        }
    }

    #[test]
    fn test_no_exclusions_keeps_everything() {
        let records = select_top_articles(THREE_ARTICLES, 10, &ExclusionSet::new()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].article, "الصفحة الرئيسية");
    }

    #[test]
    fn test_custom_exclusion_on_raw_title() {
        let exclusions = ExclusionSet::with_defaults().extend(["كرة_"]);
        let records = select_top_articles(THREE_ARTICLES, 10, &exclusions).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].article, "مصر");
        assert!(records.iter().all(|r| !exclusions.matches(&r.article)));
    }

    #[test]
    fn test_spaced_pattern_excludes_underscore_title() {
        let body = r#"{"items": [{"articles": [
            {"article": "كأس_العالم_2026", "views": 90000, "rank": 1},
            {"article": "مصر", "views": 15000, "rank": 2}
        ]}]}"#;
        let exclusions = ExclusionSet::new().extend(["كأس العالم"]);

        let records = select_top_articles(body, 10, &exclusions).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].article, "مصر");
        assert!(records.iter().all(|r| !r.article.contains("كأس العالم")));
    }

    #[test]
    fn test_empty_items_is_shape_error() {
        let result = select_top_articles(r#"{"items": []}"#, 10, &ExclusionSet::new());
        assert!(result.is_err());
        let result = select_top_articles(r#"{}"#, 10, &ExclusionSet::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result = select_top_articles("<html>rate limited</html>", 10, &ExclusionSet::new());
        assert!(result.is_err());
        let result = select_top_articles(
            r#"{"items": [{"articles": [{"article": "مصر"}]}]}"#,
            10,
            &ExclusionSet::new(),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_list() {
        let client = Client::new();
        let query = PageviewsQuery {
            // Port 9 on localhost: connection refused, no external traffic
            api_base: "http://127.0.0.1:9",
            project: "ar.wikipedia",
            access: "all-access",
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let records = fetch_top_articles(&client, &query, 10, &ExclusionSet::new()).await;
        assert!(records.is_empty());
    }
}
