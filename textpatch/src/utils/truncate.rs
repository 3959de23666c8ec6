//! # Truncation
//!
//! Shortens strings either by cutting out their middle ([`ellipsize`]) or by
//! cutting at a word boundary ([`truncate_preserving_words`]).
//!
//! All lengths are counted in `char`s, never bytes, so multi-byte text is never
//! split inside a code point.
//!
//! ## Example
//!
//! ```rust
//! use textpatch::utils::{EllipsizeOptions, ellipsize};
//!
//! let opts = EllipsizeOptions::default().with_max(10).with_delimiter("|");
//! assert_eq!(ellipsize("0123456789ABCDEFGHIJ", &opts), "01234|FGHIJ");
//! ```
use serde::{Deserialize, Serialize};

/// Options for [`ellipsize`].
///
/// - `max`: strings of at most this many chars are returned untouched (default `40`)
/// - `delimiter`: placed between the kept head and tail (default `"..."`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsizeOptions {
    pub max: usize,
    pub delimiter: String,
}

impl Default for EllipsizeOptions {
    fn default() -> Self {
        Self {
            max: 40,
            delimiter: "...".to_string(),
        }
    }
}

impl EllipsizeOptions {
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Options for [`truncate_preserving_words`].
///
/// When `max_words` is set the text is limited by word count and `max_chars` is
/// ignored; otherwise it is limited by `max_chars` (default `60`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateOptions {
    pub max_chars: usize,
    pub max_words: Option<usize>,
    pub end_string: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            max_chars: 60,
            max_words: None,
            end_string: "...".to_string(),
        }
    }
}

impl TruncateOptions {
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = Some(max_words);
        self
    }

    pub fn with_end_string(mut self, end_string: impl Into<String>) -> Self {
        self.end_string = end_string.into();
        self
    }
}

/// Removes the middle of long strings, replacing it with `options.delimiter`.
///
/// Keeps `max / 2` chars from each end. The delimiter comes on top of those, so the
/// result is usually longer than `max`: `"0123456789ABCDEFGHIJ"` with `max = 9`
/// becomes `"0123...GHIJ"` (11 chars). Existing callers depend on that length.
pub fn ellipsize(text: &str, options: &EllipsizeOptions) -> String {
    let size = text.chars().count();
    if size <= options.max {
        return text.to_string();
    }

    let offset = options.max / 2;
    let head: String = text.chars().take(offset).collect();
    let tail: String = text.chars().skip(size - offset).collect();

    format!("{}{}{}", head, options.delimiter, tail)
}

/// Shortens a string without leaving half a word at the end.
///
/// Dispatches on [`TruncateOptions::max_words`]: word-count mode when set, otherwise
/// character mode. In character mode the first `max_chars` chars are kept, the last
/// (possibly partial) word of that prefix is dropped and `end_string` is appended as
/// a separate word. Text shorter than `max_chars` is returned unchanged.
///
/// # Example
/// ```rust
/// use textpatch::utils::{TruncateOptions, truncate_preserving_words};
///
/// let opts = TruncateOptions::default().with_max_chars(15).with_end_string("..");
/// assert_eq!(truncate_preserving_words("this will get cut", &opts), "this will get ..");
/// ```
pub fn truncate_preserving_words(text: &str, options: &TruncateOptions) -> String {
    if let Some(max_words) = options.max_words {
        return truncate_preserving_words_by_count(text, max_words, &options.end_string);
    }

    if text.chars().count() < options.max_chars {
        return text.to_string();
    }

    let prefix: String = text.chars().take(options.max_chars).collect();
    let mut words: Vec<&str> = prefix.split_whitespace().collect();
    words.pop();
    words.push(&options.end_string);
    words.join(" ")
}

/// Keeps the first `max_words` words and appends `end_string` as one more word.
///
/// Text with fewer than `max_words` words is returned verbatim, whitespace included.
pub fn truncate_preserving_words_by_count(text: &str, max_words: usize, end_string: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < max_words {
        return text.to_string();
    }

    let mut kept: Vec<&str> = words.into_iter().take(max_words).collect();
    kept.push(end_string);
    kept.join(" ")
}
