//! Diff a new list against a baseline and collect the entries it lacks.

use std::collections::HashSet;

use super::report::{CompareReport, Sample};
use super::{KeyMode, RunOptions};
use crate::url_model::{normalize_url, passthrough_line};

/// Baseline lines (canonicalized) and the new entries to add after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOutcome {
    /// Every non-empty baseline line in original order: canonical form when
    /// it normalizes, otherwise the raw line with a trailing `/`.
    pub retained: Vec<String>,
    /// New-file entries whose key was absent, in new-file order.
    pub appended: Vec<String>,
    pub report: CompareReport,
}

impl CompareOutcome {
    /// Baseline block followed by the appended block. Each block is
    /// newline-joined and ends with `\n` when non-empty.
    pub fn render_merged(&self) -> String {
        let mut out = String::new();
        push_block(&mut out, &self.retained);
        push_block(&mut out, &self.appended);
        out
    }

    /// Only the appended entries, newline-joined, no trailing newline.
    pub fn render_new_only(&self) -> String {
        self.appended.join("\n")
    }
}

fn push_block(out: &mut String, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&lines.join("\n"));
    out.push('\n');
}

/// Compares `new_lines` against `old_lines` under `mode`.
///
/// The comparison set starts with the key of every baseline line that
/// normalizes. Each new key is inserted as soon as it is accepted, so a
/// repeat inside the new file is a duplicate too. In domain mode a new URL
/// is dropped whenever its domain is already known, even if the path differs.
pub fn compare_lines<'o, 'n, O, N>(
    old_lines: O,
    new_lines: N,
    mode: KeyMode,
    opts: &RunOptions,
) -> CompareOutcome
where
    O: IntoIterator<Item = &'o str>,
    N: IntoIterator<Item = &'n str>,
{
    let mut known: HashSet<String> = HashSet::new();
    let mut retained: Vec<String> = Vec::new();
    let mut passed_through = 0usize;

    for (idx, line) in old_lines.into_iter().enumerate() {
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        match normalize_url(raw, opts.path_policy) {
            Ok(canonical) => {
                if let Some(key) = mode.key_for(&canonical) {
                    known.insert(key);
                }
                retained.push(canonical);
            }
            Err(err) => {
                passed_through += 1;
                tracing::debug!(line = idx + 1, %err, "baseline line kept as-is");
                retained.push(passthrough_line(raw));
            }
        }
    }

    let baseline_keys = known.len();
    if baseline_keys == 0 {
        tracing::warn!("baseline has no valid URLs; every valid new entry will be added");
    }

    let mut appended: Vec<String> = Vec::new();
    let mut processed = 0usize;
    let mut duplicates = 0usize;
    let mut invalid = 0usize;

    for (idx, line) in new_lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        processed += 1;

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

        if known.contains(&key) {
            duplicates += 1;
            tracing::debug!(line = line_no, %key, url = %canonical, "{mode} already present");
            continue;
        }

        tracing::debug!(line = line_no, %key, url = %canonical, "new {mode}");
        known.insert(key);
        appended.push(canonical);
    }

    let samples = appended
        .iter()
        .take(opts.sample_limit)
        .map(|u| Sample::of(u))
        .collect();

    let report = CompareReport {
        mode,
        processed,
        retained: retained.len(),
        passed_through,
        baseline_keys,
        appended: appended.len(),
        duplicates,
        invalid,
        samples,
    };

    CompareOutcome {
        retained,
        appended,
        report,
    }
}
