//! Title exclusion patterns.
//!
//! The pageview ranking is dominated by pages that are not articles (the
//! main page, portals, the search page). An [`ExclusionSet`] holds plain
//! substrings; a title is dropped when it contains any of them. Matching is
//! done on the raw API title, which uses underscores where the readable
//! title has spaces. Patterns are stored in that same form, so `كأس العالم`
//! and `كأس_العالم` exclude the same articles.

use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Patterns for the non-article pages that top the Arabic Wikipedia list.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    // Portals
    "بوابة:",
    // Main page
    "الصفحة_الرئيسية",
    // Special:Search
    "خاص:بحث",
];

/// Ordered list of substrings used to drop unwanted titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl ExclusionSet {
    /// An empty set that excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in [`DEFAULT_EXCLUSIONS`].
    pub fn with_defaults() -> Self {
        Self::new().extend(DEFAULT_EXCLUSIONS.iter().copied())
    }

    /// Append patterns, keeping order and skipping blanks and repeats.
    ///
    /// Spaces are stored as underscores to match the raw title form.
    pub fn extend<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = self
            .patterns
            .into_iter()
            .chain(
                patterns
                    .into_iter()
                    .map(Into::<String>::into)
                    .map(|p| p.replace(' ', "_")),
            )
            .filter(|p| !p.is_empty())
            .unique()
            .collect();
        self
    }

    /// Whether `title` contains any pattern.
    ///
    /// Accepts either the raw (underscore) or the readable (space) form.
    pub fn matches(&self, title: &str) -> bool {
        let raw = title.replace(' ', "_");
        self.patterns.iter().any(|p| raw.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Parse the contents of an exclusions file.
///
/// One pattern per line. Surrounding whitespace is trimmed; blank lines and
/// lines starting with `#` are skipped.
pub fn parse_exclusions(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read patterns from a file on disk.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_exclusions_file(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let contents = fs::read_to_string(path).await?;
    let patterns = parse_exclusions(&contents);
    info!(count = patterns.len(), "Loaded exclusion patterns from file");
    debug!(?patterns, "File exclusion patterns");
    Ok(patterns)
}

/// Build the run's exclusion set: defaults, then the file, then `extra`.
///
/// An unreadable file is logged and skipped; the other sources still apply.
#[instrument(level = "info", skip_all)]
pub async fn resolve_exclusions(
    use_defaults: bool,
    file: Option<&Path>,
    extra: &[String],
) -> ExclusionSet {
    let mut set = if use_defaults {
        ExclusionSet::with_defaults()
    } else {
        ExclusionSet::new()
    };

    if let Some(path) = file {
        match load_exclusions_file(path).await {
            Ok(patterns) => set = set.extend(patterns),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read exclusions file; continuing without it")
            }
        }
    }

    let set = set.extend(extra.iter().cloned());
    info!(count = set.len(), patterns = %set.patterns().iter().join(" | "), "Exclusion patterns active");
    set
}
