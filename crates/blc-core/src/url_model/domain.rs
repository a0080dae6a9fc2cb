//! Domain key extraction.

use url::Url;

const WWW_PREFIX: &str = "www.";

/// Extracts the domain key of an absolute URL: its host, lowercased, with
/// one leading `www.` removed.
///
/// Returns `None` if the URL cannot be parsed or has no host. Works on
/// canonical URLs and on raw absolute URLs alike.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let domain = match host.strip_prefix(WWW_PREFIX) {
        Some(rest) => rest.to_string(),
        None => host,
    };
    if domain.is_empty() {
        return None;
    }
    Some(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_www_case_insensitively() {
        assert_eq!(
            extract_domain("HTTP://WWW.Example.com/x").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn strips_exactly_one_www_label() {
        assert_eq!(
            extract_domain("http://www.www.example.com/").as_deref(),
            Some("www.example.com")
        );
        assert_eq!(
            extract_domain("http://wwwexample.com/").as_deref(),
            Some("wwwexample.com")
        );
    }

    #[test]
    fn keeps_subdomains_and_ignores_port() {
        assert_eq!(
            extract_domain("https://blog.example.com:8443/a?b").as_deref(),
            Some("blog.example.com")
        );
    }

    #[test]
    fn unparseable_or_hostless_is_none() {
        assert_eq!(extract_domain("a.com/page"), None);
        assert_eq!(extract_domain("not a url"), None);
        assert_eq!(extract_domain("mailto:someone@example.com"), None);
    }
}
