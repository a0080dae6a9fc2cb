//! Single-file cleaning: exact-URL or one-URL-per-domain deduplication.

use std::collections::HashMap;

use super::report::{domain_histogram, CleanReport, Sample};
use super::{KeyMode, RunOptions};
use crate::url_model::normalize_url;

/// Kept URLs in first-seen order plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub urls: Vec<String>,
    pub report: CleanReport,
}

impl CleanOutcome {
    /// File contents: one URL per line, no trailing newline.
    pub fn render(&self) -> String {
        self.urls.join("\n")
    }
}

/// Removes lines whose canonical URL was already seen.
pub fn clean_by_url<'a, I>(lines: I, opts: &RunOptions) -> CleanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    clean_lines(lines, KeyMode::Url, opts)
}

/// Keeps the first canonical URL of each domain.
pub fn clean_by_domain<'a, I>(lines: I, opts: &RunOptions) -> CleanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    clean_lines(lines, KeyMode::Domain, opts)
}

/// Scans `lines` once, keeping the first canonical URL for every key.
///
/// Blank lines are skipped without being counted. A line that fails
/// normalization, or has no domain in domain mode, counts as invalid.
pub fn clean_lines<'a, I>(lines: I, mode: KeyMode, opts: &RunOptions) -> CleanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    // key -> index of the URL kept for it
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut urls: Vec<String> = Vec::new();
    let mut duplicates = 0usize;
    let mut invalid = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let canonical = match normalize_url(raw, opts.path_policy) {
            Ok(c) => c,
            Err(err) => {
                invalid += 1;
                tracing::debug!(line = line_no, %err, "invalid URL skipped");
                continue;
            }
        };

        let Some(key) = mode.key_for(&canonical) else {
            invalid += 1;
            tracing::debug!(line = line_no, url = %canonical, "no domain, skipped");
            continue;
        };

        if let Some(&kept) = seen.get(&key) {
            duplicates += 1;
            tracing::debug!(
                line = line_no,
                %key,
                kept = %urls[kept],
                skipped = %canonical,
                "duplicate {mode}"
            );
            continue;
        }

        tracing::trace!(line = line_no, %key, url = %canonical, "new {mode}");
        seen.insert(key, urls.len());
        urls.push(canonical);
    }

    let (distinct_domains, multi_url_domains) = domain_histogram(&urls, opts.sample_limit);
    let samples = urls
        .iter()
        .take(opts.sample_limit)
        .map(|u| Sample::of(u))
        .collect();

    let report = CleanReport {
        mode,
        unique: urls.len(),
        duplicates,
        invalid,
        distinct_domains,
        multi_url_domains,
        samples,
    };

    CleanOutcome { urls, report }
}
