//! # Pollute & Sanitize
//!
//! Literal substring removal plus a reversible "pollution" scheme.
//!
//! Polluting a string puts a delimiter after every character so the text is exempt
//! from downstream substring searches (a polluted `"spam"` no longer contains
//! `"spam"`). Sanitizing removes the delimiter again.
//!
//! ## Features
//! - [`nix`] removes the first occurrence of a string
//! - [`gnix`] removes every occurrence
//! - [`pollute`] / [`sanitize`] use [`DEFAULT_POLLUTION_DELIMITER`]
//! - [`pollute_with`] / [`sanitize_with`] take an explicit delimiter
//!
//! For any `x` that does not itself contain the delimiter,
//! `sanitize(&pollute(x)) == x`.
//!
//! ## Examples
//!
//! ```rust
//! use textpatch::utils::{pollute, pollute_with, sanitize, sanitize_with};
//!
//! assert_eq!(pollute("test"), "t^--^--^e^--^--^s^--^--^t^--^--^");
//! assert_eq!(sanitize(&pollute("test")), "test");
//!
//! assert_eq!(pollute_with("test", "-"), "t-e-s-t-");
//! assert_eq!(sanitize_with("t-e-s-t-", "-"), "test");
//! ```
//!
//! Every argument is matched literally, never as a pattern.

/// Delimiter used by [`pollute`] and [`sanitize`].
pub const DEFAULT_POLLUTION_DELIMITER: &str = "^--^--^";

/// Removes the first occurrence of `target`. Returns `text` unchanged when absent.
pub fn nix(text: &str, target: &str) -> String {
    text.replacen(target, "", 1)
}

/// Removes every occurrence of `target`.
pub fn gnix(text: &str, target: &str) -> String {
    text.replace(target, "")
}

/// [`pollute_with`] using [`DEFAULT_POLLUTION_DELIMITER`].
pub fn pollute(text: &str) -> String {
    pollute_with(text, DEFAULT_POLLUTION_DELIMITER)
}

/// Inserts `delimiter` after every character, the last one included.
pub fn pollute_with(text: &str, delimiter: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.chars().count() * delimiter.len());
    for letter in text.chars() {
        out.push(letter);
        out.push_str(delimiter);
    }
    out
}

/// [`sanitize_with`] using [`DEFAULT_POLLUTION_DELIMITER`].
pub fn sanitize(text: &str) -> String {
    sanitize_with(text, DEFAULT_POLLUTION_DELIMITER)
}

/// Removes every occurrence of `delimiter`, undoing [`pollute_with`].
pub fn sanitize_with(text: &str, delimiter: &str) -> String {
    gnix(text, delimiter)
}
