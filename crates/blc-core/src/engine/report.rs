//! Counters and samples returned alongside engine output.

use std::collections::HashMap;

use super::KeyMode;
use crate::url_model::extract_domain;

/// One entry shown in a report: the URL and, when extractable, its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub domain: Option<String>,
    pub url: String,
}

impl Sample {
    pub(super) fn of(url: &str) -> Self {
        Self {
            domain: extract_domain(url),
            url: url.to_string(),
        }
    }
}

/// Result counters of a clean run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub mode: KeyMode,
    /// URLs (or domains) kept.
    pub unique: usize,
    /// Lines dropped because their key was already seen.
    pub duplicates: usize,
    /// Lines that failed normalization or had no domain.
    pub invalid: usize,
    /// Distinct domains among the kept URLs.
    pub distinct_domains: usize,
    /// Domains with more than one kept URL, most URLs first.
    pub multi_url_domains: Vec<(String, usize)>,
    /// First kept entries, for display.
    pub samples: Vec<Sample>,
}

impl CleanReport {
    /// Non-empty lines seen in the input.
    pub fn original(&self) -> usize {
        self.unique + self.duplicates + self.invalid
    }
}

/// Result counters of a compare run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareReport {
    pub mode: KeyMode,
    /// Non-empty lines in the new file.
    pub processed: usize,
    /// Non-empty lines carried over from the old file.
    pub retained: usize,
    /// Old lines that failed normalization and were passed through raw.
    pub passed_through: usize,
    /// Keys known from the old file before scanning the new one.
    pub baseline_keys: usize,
    pub appended: usize,
    pub duplicates: usize,
    pub invalid: usize,
    /// First appended entries, for display.
    pub samples: Vec<Sample>,
}

/// Counts distinct domains among `urls` and lists those with more than one
/// URL, highest count first. Ties keep first-seen order. At most `limit`
/// entries are returned.
pub(super) fn domain_histogram(urls: &[String], limit: usize) -> (usize, Vec<(String, usize)>) {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for url in urls {
        let Some(domain) = extract_domain(url) else {
            continue;
        };
        let count = counts.entry(domain.clone()).or_insert(0);
        if *count == 0 {
            order.push(domain);
        }
        *count += 1;
    }

    let distinct = order.len();
    let mut multi: Vec<(String, usize)> = order
        .into_iter()
        .filter_map(|d| {
            let n = counts[&d];
            (n > 1).then_some((d, n))
        })
        .collect();
    multi.sort_by(|a, b| b.1.cmp(&a.1));
    multi.truncate(limit);
    (distinct, multi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn histogram_orders_by_count_then_first_seen() {
        let list = urls(&[
            "http://b.com/1/",
            "http://a.com/1/",
            "http://a.com/2/",
            "http://b.com/2/",
            "http://c.com/",
            "http://www.a.com/3/",
        ]);
        let (distinct, multi) = domain_histogram(&list, 10);
        assert_eq!(distinct, 3);
        assert_eq!(
            multi,
            vec![("a.com".to_string(), 3), ("b.com".to_string(), 2)]
        );
    }

    #[test]
    fn histogram_respects_limit() {
        let list = urls(&["http://a.com/1", "http://a.com/2", "http://b.com/1", "http://b.com/2"]);
        let (distinct, multi) = domain_histogram(&list, 1);
        assert_eq!(distinct, 2);
        assert_eq!(multi.len(), 1);
    }

    #[test]
    fn original_is_sum_of_counters() {
        let r = CleanReport {
            mode: KeyMode::Url,
            unique: 3,
            duplicates: 2,
            invalid: 1,
            distinct_domains: 2,
            multi_url_domains: Vec::new(),
            samples: Vec::new(),
        };
        assert_eq!(r.original(), 6);
    }
}
