//! Set engine: deduplication and diffing of backlink lists.
//!
//! Every algorithm here is a pure function over already-read lines that
//! returns the ordered list to persist plus report counters. File access is
//! isolated in [`run`] and [`files`], so the algorithms stay testable without
//! touching disk or the console.
//!
//! The comparison set is a `HashSet`/`HashMap` grown monotonically during a
//! scan; nothing is ever removed from it within one run.

mod clean;
mod compare;
mod error;
pub mod files;
mod report;
mod run;

use std::fmt;

use crate::config::BlcConfig;
use crate::url_model::{extract_domain, PathPolicy};

pub use clean::{clean_by_domain, clean_by_url, clean_lines, CleanOutcome};
pub use compare::{compare_lines, CompareOutcome};
pub use error::RunError;
pub use report::{CleanReport, CompareReport, Sample};
pub use run::{run_clean, run_compare, CleanRun, CompareRun, CompareTarget};

/// Granularity of deduplication and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyMode {
    /// Exact canonical URL.
    Url,
    /// One URL per domain key.
    #[default]
    Domain,
}

impl KeyMode {
    /// Key of a canonical URL under this mode. `None` means the URL has no
    /// usable domain, which callers count as invalid.
    pub fn key_for(self, canonical: &str) -> Option<String> {
        match self {
            KeyMode::Url => Some(canonical.to_string()),
            KeyMode::Domain => extract_domain(canonical),
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMode::Url => write!(f, "url"),
            KeyMode::Domain => write!(f, "domain"),
        }
    }
}

/// The closed set of operations, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CleanByUrl,
    CleanByDomain,
    CompareByUrl,
    CompareByDomain,
}

impl Operation {
    pub fn clean(mode: KeyMode) -> Self {
        match mode {
            KeyMode::Url => Operation::CleanByUrl,
            KeyMode::Domain => Operation::CleanByDomain,
        }
    }

    pub fn compare(mode: KeyMode) -> Self {
        match mode {
            KeyMode::Url => Operation::CompareByUrl,
            KeyMode::Domain => Operation::CompareByDomain,
        }
    }

    pub fn key_mode(self) -> KeyMode {
        match self {
            Operation::CleanByUrl | Operation::CompareByUrl => KeyMode::Url,
            Operation::CleanByDomain | Operation::CompareByDomain => KeyMode::Domain,
        }
    }

    pub fn is_compare(self) -> bool {
        matches!(self, Operation::CompareByUrl | Operation::CompareByDomain)
    }

    /// Human-readable description for report headers.
    pub fn describe(self) -> &'static str {
        match self {
            Operation::CleanByUrl => "remove exact duplicate URLs",
            Operation::CleanByDomain => "keep one URL per domain",
            Operation::CompareByUrl => "compare by exact URL",
            Operation::CompareByDomain => "compare by domain",
        }
    }
}

/// Knobs shared by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Trailing-slash policy applied by the normalizer.
    pub path_policy: PathPolicy,
    /// Maximum number of sample entries kept in reports.
    pub sample_limit: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from(&BlcConfig::default())
    }
}

impl From<&BlcConfig> for RunOptions {
    fn from(cfg: &BlcConfig) -> Self {
        Self {
            path_policy: cfg.path_policy,
            sample_limit: cfg.sample_limit,
        }
    }
}
