//! Data models for trending topics and the pageview API responses they come from.
//!
//! - [`TopicRecord`]: one ranked article plus its coverage verdict
//! - [`Coverage`]: the yes/no verdict, serialized in Arabic
//! - [`PageviewsResponse`] and friends: the subset of the Wikimedia
//!   "top articles" payload this tool reads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a topic produced at least one search result on the news site.
///
/// Serialized as the Arabic words used in the output files: `"نعم"` for
/// yes and `"لا"` for no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Coverage {
    #[serde(rename = "نعم")]
    Yes,
    #[serde(rename = "لا")]
    No,
}

impl Coverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Coverage::Yes => "نعم",
            Coverage::No => "لا",
        }
    }
}

impl From<bool> for Coverage {
    fn from(found: bool) -> Self {
        if found { Coverage::Yes } else { Coverage::No }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the day's most-viewed articles.
///
/// Built by the topic fetcher with `coverage` unset; the coverage prober
/// fills it in exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicRecord {
    /// Upstream rank on the pageview list (1 = most viewed).
    pub rank: u64,
    /// Article title with underscores replaced by spaces.
    pub article: String,
    /// Page views for the day.
    pub views: u64,
    /// Coverage verdict, `None` until the prober has run.
    pub coverage: Option<Coverage>,
}

/// Top-level body of `metrics/pageviews/top/...`.
#[derive(Debug, Deserialize)]
pub struct PageviewsResponse {
    #[serde(default)]
    pub items: Vec<PageviewsItem>,
}

/// One project/day bucket. The API returns exactly one for a daily query.
#[derive(Debug, Deserialize)]
pub struct PageviewsItem {
    pub articles: Vec<PageviewArticle>,
}

/// A ranked article as the API reports it; titles use underscores.
#[derive(Debug, Clone, Deserialize)]
pub struct PageviewArticle {
    pub article: String,
    pub views: u64,
    pub rank: u64,
}

impl PageviewArticle {
    /// Convert to a [`TopicRecord`] with a readable title and no verdict yet.
    pub fn into_record(self) -> TopicRecord {
        TopicRecord {
            rank: self.rank,
            article: self.article.replace('_', " "),
            views: self.views,
            coverage: None,
        }
    }
}
