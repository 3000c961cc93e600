//! Command-line interface definitions.
//!
//! All arguments are parsed with `clap`. The most commonly scripted ones can
//! also be supplied through environment variables.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PAGEVIEWS_API: &str = "https://wikimedia.org/api/rest_v1";
pub const DEFAULT_SEARCH_URL: &str = "https://www.aljazeera.net/search";

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Yesterday's top 10, written to the current directory
/// wiki_trending_coverage
///
/// # A specific day, top 25, with extra exclusions
/// wiki_trending_coverage -d 2024-10-07 -n 25 -x "ملف:" --exclusions-file skip.txt
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Day to report on (YYYY-MM-DD). Defaults to yesterday, since today's
    /// counts are not complete yet.
    #[arg(short, long, env = "TRENDING_DATE")]
    pub date: Option<NaiveDate>,

    /// Number of articles to keep after filtering
    #[arg(short = 'n', long, env = "TRENDING_TOP", default_value_t = 10)]
    pub top: usize,

    /// File with one exclusion pattern per line
    #[arg(long, env = "TRENDING_EXCLUSIONS_FILE")]
    pub exclusions_file: Option<PathBuf>,

    /// Extra exclusion pattern (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Start from an empty exclusion list instead of the built-in one
    #[arg(long)]
    pub no_default_exclusions: bool,

    /// Directory for the JSON and CSV output
    #[arg(short, long, env = "TRENDING_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Wikimedia project to rank
    #[arg(long, default_value = "ar.wikipedia")]
    pub project: String,

    /// Pageview access type (all-access, desktop, mobile-app, mobile-web)
    #[arg(long, default_value = "all-access")]
    pub access: String,

    /// Base URL of the Wikimedia REST API
    #[arg(long, default_value = DEFAULT_PAGEVIEWS_API)]
    pub pageviews_api: String,

    /// Base URL of the news site's search page; the topic is appended as a path segment
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,
}
