//! # URL helpers
//!
//! Lightweight, pattern-based helpers for presenting and checking URLs typed by users.
//!
//! **Features:**
//! - Add a missing `http://` scheme
//! - Strip presentationally superfluous `http(s)://` and `www.` prefixes
//! - Extract the host part of a URL, with or without `www.`
//! - A permissive `http`/`https` validity check
//!
//! These helpers never fail: input that does not look like a URL is returned as-is
//! (or reported as invalid), so they are safe to run over arbitrary display text.
//!
//! ## Example
//!
//! ```rust
//! use textpatch::utils::{add_http, domain, remove_http_and_www};
//!
//! assert_eq!(add_http("dog.com"), "http://dog.com");
//! assert_eq!(remove_http_and_www("https://www.dubsecure.com"), "dubsecure.com");
//! assert_eq!(domain("https://bbc.co.uk/news?id=1"), "bbc.co.uk");
//! ```

/// Scheme prefixes removed by [`remove_http_and_www`], in application order.
const SCHEME_PREFIXES: [&str; 4] = ["http://www.", "http://", "https://www.", "https://"];

/// Prepends `http://` to non-empty strings that don't already start with `http`.
///
/// The check is case-sensitive and covers `https` too.
pub fn add_http(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if text.starts_with("http") {
        text.to_string()
    } else {
        format!("http://{}", text)
    }
}

/// Removes `http://`, `https://` and `www.` noise from the front of a URL.
///
/// - Input starting with `www.` loses its first dot-separated segment.
/// - Otherwise the scheme prefixes are replaced everywhere in the string, not only at
///   the start, so `"a http://b"` becomes `"a b"`.
pub fn remove_http_and_www(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if text.starts_with("www.") {
        let mut segments: Vec<&str> = text.split('.').collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        return segments.get(1..).unwrap_or_default().join(".");
    }

    SCHEME_PREFIXES
        .iter()
        .fold(text.to_string(), |acc, prefix| acc.replace(prefix, ""))
}

/// Extracts the host part of a URL.
///
/// Matches `^(?:\w+://)?([^/?]+)(?:/|\?|$)` and returns the captured host, or the
/// input unchanged when it does not match.
///
/// # Example
/// ```rust
/// use textpatch::utils::domain;
///
/// assert_eq!(domain("http://www.google.com"), "www.google.com");
/// assert_eq!(domain("not a url"), "not a url");
/// ```
pub fn domain(text: &str) -> String {
    match lazy_regex!(r"^(?:\w+://)?([^/?]+)(?:/|\?|$)").captures(text) {
        Some(caps) => caps[1].to_string(),
        None => {
            tracing::trace!(input = text, "no host found, returning input");
            text.to_string()
        }
    }
}

/// [`domain`] followed by [`remove_http_and_www`].
pub fn domain_without_www(text: &str) -> String {
    remove_http_and_www(&domain(text))
}

/// Checks whether the text contains an `http://` or `https://` URL with a host.
///
/// The path is optional. The pattern is searched, not anchored.
pub fn is_valid_url(text: &str) -> bool {
    lazy_regex!(r"https?://([^/]+)(.*)").is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_add_http_empty() {
        assert_eq!(add_http(""), "");
    }

    #[test]
    fn test_url_add_http_missing_scheme() {
        assert_eq!(add_http("dog"), "http://dog");
    }

    #[test]
    fn test_url_add_http_existing_scheme() {
        assert_eq!(add_http("http://dog.com"), "http://dog.com");
        assert_eq!(add_http("https://dog.com"), "https://dog.com");
    }

    #[test]
    fn test_url_add_http_case_sensitive() {
        assert_eq!(add_http("HTTP://dog.com"), "http://HTTP://dog.com");
    }

    #[test]
    fn test_url_remove_http_and_www() {
        assert_eq!(remove_http_and_www("http://shitstorm.com"), "shitstorm.com");
        assert_eq!(remove_http_and_www("http://www.google.com"), "google.com");
        assert_eq!(remove_http_and_www("http://wwwxyz.com"), "wwwxyz.com");
        assert_eq!(remove_http_and_www("https://secure.com"), "secure.com");
        assert_eq!(remove_http_and_www("https://www.dubsecure.com"), "dubsecure.com");
    }

    #[test]
    fn test_url_remove_leading_www_segment() {
        assert_eq!(remove_http_and_www("www.abc.com"), "abc.com");
        assert_eq!(remove_http_and_www("www.abc.com."), "abc.com");
        assert_eq!(remove_http_and_www("www."), "");
    }

    #[test]
    fn test_url_remove_without_boundary_untouched() {
        assert_eq!(remove_http_and_www("wwwxyz.com"), "wwwxyz.com");
        assert_eq!(remove_http_and_www(""), "");
    }

    #[test]
    fn test_url_remove_is_not_anchored() {
        assert_eq!(
            remove_http_and_www("see http://a.com and https://www.b.com"),
            "see a.com and b.com"
        );
    }

    #[test]
    fn test_url_domain() {
        assert_eq!(domain("http://www.google.com"), "www.google.com");
        assert_eq!(domain("https://bbc.co.uk/text/123/"), "bbc.co.uk");
        assert_eq!(domain("example.com?q=1"), "example.com");
        assert_eq!(domain("ftp://files.example.org/pub"), "files.example.org");
    }

    #[test]
    fn test_url_domain_fallback() {
        assert_eq!(domain("not a url"), "not a url");
        assert_eq!(domain("/just/a/path"), "/just/a/path");
        assert_eq!(domain(""), "");
    }

    #[test]
    fn test_url_domain_without_www() {
        assert_eq!(domain_without_www("http://www.google.com/search"), "google.com");
        assert_eq!(domain_without_www("https://bbc.co.uk/text"), "bbc.co.uk");
    }

    #[test]
    fn test_url_valid_url() {
        assert!(!is_valid_url("testsite.com"));
        assert!(is_valid_url("https://bbc.co.uk/text/123/"));
        assert!(is_valid_url("http://localhost"));
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("ftp://example.com"));
    }
}
