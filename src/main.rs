//! # Wiki Trending Coverage
//!
//! Finds the most-viewed Arabic Wikipedia articles for a day and checks
//! whether Al Jazeera has covered each one, then writes the result as JSON
//! and CSV.
//!
//! ## Usage
//!
//! ```sh
//! wiki_trending_coverage -d 2024-01-15 -n 10 -o ./out
//! ```
//!
//! ## Architecture
//!
//! The run is a strictly sequential pipeline:
//! 1. **Fetching**: Pull the day's top articles from the Wikimedia pageview API
//! 2. **Filtering**: Drop non-article titles, keep the top N
//! 3. **Probing**: Search the news site for each topic, one at a time
//! 4. **Output**: Write `trending_<date>.json` and `trending_<date>.csv`
//!
//! Failures in any external call degrade the result (empty list, "not
//! covered") instead of aborting. Only an empty topic list stops the run
//! early.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod coverage;
mod exclusions;
mod models;
mod outputs;
mod scrapers;
#[cfg(test)]
mod test_support;
mod utils;

use cli::Cli;
use coverage::{CoverageProbe, annotate_coverage};
use exclusions::{ExclusionSet, resolve_exclusions};
use models::TopicRecord;
use scrapers::aljazeera::HtmlSearchProbe;
use scrapers::wikipedia::{PageviewsQuery, fetch_top_articles};
use utils::{ensure_writable_dir, group_thousands, yesterday};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("wiki_trending_coverage starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let date = args.date.unwrap_or_else(yesterday);

    // Early check, before any network traffic
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let exclusions = resolve_exclusions(
        !args.no_default_exclusions,
        args.exclusions_file.as_deref(),
        &args.exclude,
    )
    .await;

    // One client for the whole run; dropped when main returns
    let client = scrapers::build_client()?;

    let query = PageviewsQuery {
        api_base: &args.pageviews_api,
        project: &args.project,
        access: &args.access,
        date,
    };
    let probe = HtmlSearchProbe::new(client.clone(), args.search_url.as_str());
    let records = run(&client, &query, args.top, &exclusions, &probe, &args.output_dir).await;

    // ---- Summary ----
    for record in &records {
        info!(
            rank = record.rank,
            article = %record.article,
            views = %group_thousands(record.views),
            coverage = %record.coverage.map(|c| c.as_str()).unwrap_or("-"),
            "Summary"
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        topics = records.len(),
        "Execution complete"
    );

    Ok(())
}

/// Fetch, filter, probe and write one day's report.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the fetcher (the probe holds its own handle)
/// * `query` - Which project and day to rank
/// * `top_n` - Number of articles to keep after filtering
/// * `exclusions` - Title patterns to drop
/// * `probe` - Coverage check applied to each topic in turn
/// * `output_dir` - Where `trending_<date>.json` and `.csv` go
///
/// # Returns
///
/// The annotated records. An empty list means nothing was fetched, in which
/// case no probe runs and no file is written.
#[instrument(level = "info", skip_all, fields(date = %query.date, top_n = top_n))]
async fn run<P: CoverageProbe>(
    client: &Client,
    query: &PageviewsQuery<'_>,
    top_n: usize,
    exclusions: &ExclusionSet,
    probe: &P,
    output_dir: &Path,
) -> Vec<TopicRecord> {
    // ---- Fetch & filter ----
    let mut records = fetch_top_articles(client, query, top_n, exclusions).await;

    if records.is_empty() {
        warn!(date = %query.date, "Could not retrieve trending topics; nothing to do");
        return records;
    }

    // ---- Coverage ----
    annotate_coverage(&mut records, probe).await;

    // ---- Output ----
    if let Err(e) = outputs::json::write_records(&records, output_dir, query.date).await {
        error!(error = %e, "Failed to write JSON output");
    }
    if let Err(e) = outputs::csv::write_records(&records, output_dir, query.date).await {
        error!(error = %e, "Failed to write CSV output");
    }

    records
}
