//! # Textpatch
//!
//! A small library of stateless text formatting and validation helpers, meant to be
//! embedded by calling code that deals with user-supplied or copy-pasted text.
//!
//! ## Features
//!
//! ### Currently Available
//!
//! - **Truncation** - Ellipsize the middle of long strings, or cut them at word boundaries
//! - **Slugs** - Generate lowercase, hyphen-delimited permalinks from arbitrary text
//! - **Markup** - Strip HTML tags, leaving their inner text
//! - **Substring helpers** - Remove the first/every occurrence of a string, pollute and sanitize
//! - **URL helpers** - Add or remove schemes, extract domains, validate URLs and e-mails
//! - **Legacy characters** - Turn smart quotes, dashes and Latin-1 remnants into ASCII or entities
//! - **Blank checks** - A `Blank` predicate over strings, collections, options and JSON values
//!
//! ("strict-email" feature, on by default)
//! - **RFC-822 validator** - A full `addr-spec` grammar next to the simplified e-mail check
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! textpatch = "0.1"
//! ```
//!
//! Without the RFC-822 validator:
//!
//! ```toml
//! [dependencies]
//! textpatch = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage Examples
//!
//! ### Truncation
//!
//! ```rust
//! use textpatch::utils::{EllipsizeOptions, TruncateOptions, ellipsize, truncate_preserving_words};
//!
//! let short = ellipsize("0123456789ABCDEFGHIJ", &EllipsizeOptions::default().with_max(9));
//! assert_eq!(short, "0123...GHIJ");
//!
//! let cut = truncate_preserving_words(
//!     "this has too many words",
//!     &TruncateOptions::default().with_max_words(3),
//! );
//! assert_eq!(cut, "this has too ...");
//! ```
//!
//! ### Slugs and markup
//!
//! ```rust
//! use textpatch::utils::{permalinkify, strip_tags};
//!
//! assert_eq!(permalinkify("Shit for @@@ BRAINS!"), "shit-for-brains");
//! assert_eq!(strip_tags("this is <b>bold</b>"), "this is bold");
//! ```
//!
//! ### URLs
//!
//! ```rust
//! use textpatch::utils::{add_http, domain, domain_without_www, is_valid_url};
//!
//! assert_eq!(add_http("dog"), "http://dog");
//! assert_eq!(domain("http://www.google.com"), "www.google.com");
//! assert_eq!(domain_without_www("http://www.google.com/search"), "google.com");
//! assert!(is_valid_url("https://bbc.co.uk/text/123/"));
//! ```
//!
//! ### Dynamic values
//!
//! ```rust
//! use serde_json::json;
//! use textpatch::utils::{Capability, is_blank, try_invoke};
//!
//! assert!(is_blank(&json!(null)));
//! assert_eq!(try_invoke(&json!("abc"), Capability::Upcase), Some(json!("ABC")));
//! assert_eq!(try_invoke(&json!(42), Capability::Upcase), None);
//! ```
//!
//! ## Error Handling
//!
//! Text operations never fail for well-typed input. The only fallible entry point is
//! resolving a capability by name:
//!
//! ```rust
//! use serde_json::json;
//! use textpatch::{TextError, utils::try_send};
//!
//! match try_send(&json!([1, 2]), "explode") {
//!     Err(TextError::UnknownCapability(name)) => assert_eq!(name, "explode"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every function is pure and synchronous. Compiled patterns are shared statics, so the
//! helpers can be called from any number of threads without coordination.

/// Declares a lazily compiled, process-wide [`regex::Regex`] and evaluates to a
/// `&'static Regex`.
///
/// # Example
/// ```rust,ignore
///
/// let re = lazy_regex!(r"</?[^>]*>");
/// assert!(re.is_match("<b>"));
/// ```
macro_rules! lazy_regex {
    ($pattern:expr) => {{
        static RE: ::once_cell::sync::Lazy<::regex::Regex> = ::once_cell::sync::Lazy::new(|| {
            ::regex::Regex::new($pattern).expect(concat!("invalid pattern: ", stringify!($pattern)))
        });
        &*RE
    }};
}

pub mod error;
pub use error::{Result, TextError};

pub mod utils;
