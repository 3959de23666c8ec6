//! Whitespace collapsing.

/// Collapses whitespace runs to a single space and trims both ends.
///
/// Tabs are deleted outright rather than turned into spaces, so `"a\tb"` becomes
/// `"ab"`. Any other whitespace run, newlines included, becomes one space.
///
/// # Example
/// ```rust
/// use textpatch::utils::remove_whitespace;
///
/// assert_eq!(remove_whitespace("  this \t is also a test  "), "this is also a test");
/// ```
pub fn remove_whitespace(text: &str) -> String {
    text.replace('\t', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
