//! Trailing-slash policy applied to normalized paths.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// How the path of a normalized URL treats its trailing `/`.
///
/// The two policies are incompatible: a list cleaned under one must not be
/// compared against a list cleaned under the other. One policy is active per
/// run and applies to every normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathPolicy {
    /// Strip every trailing `/` (`http://x.com/a/` -> `http://x.com/a`,
    /// `http://x.com/` -> `http://x.com`).
    #[serde(rename = "strip")]
    StripTrailingSlash,
    /// Path is at least `/` and always ends with `/`
    /// (`http://x.com/a` -> `http://x.com/a/`).
    #[default]
    #[serde(rename = "trailing-slash")]
    TrailingSlash,
}

impl PathPolicy {
    /// Applies the policy to a parsed URL path.
    pub fn apply(self, path: &str) -> Cow<'_, str> {
        match self {
            PathPolicy::StripTrailingSlash => Cow::Borrowed(path.trim_end_matches('/')),
            PathPolicy::TrailingSlash if path.ends_with('/') => Cow::Borrowed(path),
            PathPolicy::TrailingSlash => Cow::Owned(format!("{path}/")),
        }
    }
}

impl fmt::Display for PathPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPolicy::StripTrailingSlash => write!(f, "strip"),
            PathPolicy::TrailingSlash => write!(f, "trailing-slash"),
        }
    }
}
