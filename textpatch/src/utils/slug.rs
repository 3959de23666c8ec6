//! # Permalinks
//!
//! Turns arbitrary titles into URL-safe, lowercase, hyphen-delimited slugs.

/// Generates a permalink-style slug.
///
/// Steps run in this order, each on the output of the previous one:
/// 1. drop every non-ASCII code point (diacritics are removed, not transliterated)
/// 2. drop everything that is not alphanumeric, `_`, space or `-`
/// 3. collapse runs of spaces and hyphens into a single `-`
/// 4. trim one leading and one trailing `-`
/// 5. lowercase
///
/// # Example
/// ```rust
/// use textpatch::utils::permalinkify;
///
/// assert_eq!(permalinkify("Dog Breath"), "dog-breath");
/// assert_eq!(permalinkify(" A REal Doozi\"e?  ' "), "a-real-doozie");
/// ```
pub fn permalinkify(text: &str) -> String {
    let result = lazy_regex!(r"[^\x00-\x7F]+").replace_all(text, "");
    let result = lazy_regex!(r"[^\w \-]+").replace_all(&result, "");
    let result = lazy_regex!(r"[ \-]+").replace_all(&result, "-");
    let result = lazy_regex!(r"^-|-$").replace_all(&result, "");
    result.to_lowercase()
}
