//! Coverage probing.
//!
//! - [`CoverageProbe`]: checks one topic against a news site's search
//! - [`annotate_coverage`]: runs a probe over every record, in order
//!
//! Probes report errors; [`annotate_coverage`] is where they stop. A failed
//! probe is logged and the topic is recorded as not covered.

use crate::models::{Coverage, TopicRecord};
use std::error::Error;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Something that can tell whether a topic has search results.
pub trait CoverageProbe {
    /// `Ok(true)` when at least one result exists for `topic`.
    async fn probe(&self, topic: &str) -> Result<bool, Box<dyn Error>>;
}

/// Set `coverage` on every record, probing one topic at a time.
///
/// # Arguments
///
/// * `records` - Topics from the fetcher, in rank order
/// * `probe` - The search check to run for each title
///
/// # Behavior
///
/// Records are visited in list order and never concurrently. A probe error
/// is logged and recorded as [`Coverage::No`]. On return every record has
/// `coverage = Some(_)`.
///
/// # Examples
///
/// ```ignore
/// let probe = HtmlSearchProbe::new(client, "https://www.aljazeera.net/search");
/// annotate_coverage(&mut records, &probe).await;
/// assert!(records.iter().all(|r| r.coverage.is_some()));
/// ```
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub async fn annotate_coverage<P: CoverageProbe>(records: &mut [TopicRecord], probe: &P) {
    let t0 = Instant::now();
    let mut covered = 0usize;

    for record in records.iter_mut() {
        info!(rank = record.rank, topic = %record.article, "Checking coverage");
        let verdict = match probe.probe(&record.article).await {
            Ok(found) => Coverage::from(found),
            Err(e) => {
                warn!(topic = %record.article, error = %e, "Coverage probe failed; recording as not covered");
                Coverage::No
            }
        };
        if verdict == Coverage::Yes {
            covered += 1;
        }
        record.coverage = Some(verdict);
    }

    info!(
        covered,
        not_covered = records.len() - covered,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Coverage check complete"
    );
}
