//! Canonical URL form used for comparison and output.

use std::borrow::Cow;
use url::{Position, Url};

use super::{NormalizeError, PathPolicy};

const DEFAULT_SCHEME_PREFIX: &str = "http://";
const ACCEPTED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Normalizes a raw backlink line into its canonical URL string.
///
/// - trims whitespace; an empty line is [`NormalizeError::Empty`]
/// - prepends `http://` unless the line already starts with `http://` or
///   `https://` (any case)
/// - drops query and fragment
/// - applies `policy` to the path
/// - lowercases the result (scheme, userinfo, host and path)
///
/// Default ports are dropped by the parser. The output is a fixed point:
/// normalizing a canonical string again yields the same string.
///
/// # Examples
///
/// - `normalize_url("A.com/Page?x=1", PathPolicy::TrailingSlash)` → `"http://a.com/page/"`
/// - `normalize_url("http://x.com/a/", PathPolicy::StripTrailingSlash)` → `"http://x.com/a"`
pub fn normalize_url(raw: &str, policy: PathPolicy) -> Result<String, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Empty);
    }

    let candidate = if has_http_prefix(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"))
    };

    let parsed = Url::parse(&candidate).map_err(|reason| NormalizeError::Parse {
        input: trimmed.to_string(),
        reason,
    })?;

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(NormalizeError::MissingHost {
            input: trimmed.to_string(),
        });
    }

    // userinfo@host:port, exactly as serialized by the parser.
    let authority = &parsed[Position::BeforeUsername..Position::AfterPort];
    let path = policy.apply(parsed.path());

    let mut canonical = format!("{}://{}{}", parsed.scheme(), authority, path);
    canonical.make_ascii_lowercase();
    Ok(canonical)
}

/// Form written back for a baseline line that failed normalization: the
/// trimmed line with a trailing `/` appended when absent.
pub fn passthrough_line(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

fn has_http_prefix(s: &str) -> bool {
    ACCEPTED_PREFIXES.iter().any(|prefix| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(raw: &str) -> String {
        normalize_url(raw, PathPolicy::StripTrailingSlash).unwrap()
    }

    fn slashed(raw: &str) -> String {
        normalize_url(raw, PathPolicy::TrailingSlash).unwrap()
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert_eq!(
            normalize_url("", PathPolicy::TrailingSlash),
            Err(NormalizeError::Empty)
        );
        assert_eq!(
            normalize_url("   \t", PathPolicy::StripTrailingSlash),
            Err(NormalizeError::Empty)
        );
    }

    #[test]
    fn missing_scheme_defaults_to_http() {
        assert_eq!(slashed("b.com"), "http://b.com/");
        assert_eq!(strict("b.com"), "http://b.com");
        assert_eq!(slashed("https://b.com"), "https://b.com/");
    }

    #[test]
    fn scheme_prefix_is_matched_case_insensitively() {
        assert_eq!(strict("HTTP://X.COM/A"), "http://x.com/a");
        assert_eq!(strict("Https://X.com"), "https://x.com");
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(
            slashed("https://example.com/page?utm_source=x#top"),
            "https://example.com/page/"
        );
        assert_eq!(strict("example.com/?a=1"), "http://example.com");
    }

    #[test]
    fn strict_policy_collapses_trailing_slash_and_case() {
        let variants = ["http://x.com/a", "http://x.com/a/", "HTTP://X.COM/A"];
        for v in variants {
            assert_eq!(strict(v), "http://x.com/a", "{v}");
        }
    }

    #[test]
    fn trailing_slash_policy_always_ends_path_with_slash() {
        for raw in ["a.com", "a.com/", "a.com/x", "a.com/x/", "a.com/x?y#z"] {
            let c = slashed(raw);
            assert!(c.ends_with('/'), "{raw} -> {c}");
        }
    }

    #[test]
    fn whitespace_around_line_is_trimmed() {
        assert_eq!(slashed("  http://a.com/page \r"), "http://a.com/page/");
    }

    #[test]
    fn userinfo_and_port_are_kept_default_port_dropped() {
        assert_eq!(
            strict("http://User:Pw@Host.test:8080/x"),
            "http://user:pw@host.test:8080/x"
        );
        assert_eq!(strict("http://host.test:80/x"), "http://host.test/x");
        assert_eq!(strict("https://host.test:443/"), "https://host.test");
    }

    #[test]
    fn host_with_spaces_is_a_parse_error() {
        let err = normalize_url("not a url but kept", PathPolicy::TrailingSlash).unwrap_err();
        assert!(matches!(err, NormalizeError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn empty_host_is_an_error() {
        let err = normalize_url("http://", PathPolicy::TrailingSlash).unwrap_err();
        assert!(
            matches!(
                err,
                NormalizeError::Parse { .. } | NormalizeError::MissingHost { .. }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn passthrough_appends_slash_once() {
        assert_eq!(passthrough_line("not a url but kept"), "not a url but kept/");
        assert_eq!(passthrough_line(" already/ "), "already/");
    }
}
