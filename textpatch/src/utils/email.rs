//! # E-mail validation
//!
//! Two validators live here:
//!
//! - [`is_valid_email`]: a simplified, case-insensitive `local@domain.tld` check where the
//!   TLD is any two letters or one of a fixed allow-list. This is the one to use for
//!   form input.
//! - `is_valid_email_strict` (feature `strict-email`): the full RFC-822 `addr-spec`
//!   grammar, quoted local parts and domain literals included. It accepts plenty of
//!   addresses nobody actually uses, so it is not wired into [`is_valid_email`].
//!
//! ## Example
//!
//! ```rust
//! use textpatch::utils::is_valid_email;
//!
//! assert!(is_valid_email("zeke@example.museum"));
//! assert!(!is_valid_email("zeke@example.technology"));
//! ```

/// Simplified e-mail check: `^[A-Z0-9._%-]+@[A-Z0-9.-]+\.(tld)$`, case-insensitive.
///
/// `tld` is either exactly two letters or one of
/// `com, org, net, biz, info, name, aero, jobs, museum`.
pub fn is_valid_email(text: &str) -> bool {
    lazy_regex!(
        r"(?i)^[A-Z0-9._%-]+@[A-Z0-9.-]+\.(?:[A-Z]{2}|com|org|net|biz|info|name|aero|jobs|museum)$"
    )
    .is_match(text)
}

#[cfg(feature = "strict-email")]
mod rfc822 {
    use once_cell::sync::Lazy;
    use regex::bytes::Regex;

    const QTEXT: &str = r"[^\x0d\x22\x5c\x80-\xff]";
    const DTEXT: &str = r"[^\x0d\x5b-\x5d\x80-\xff]";
    const ATOM: &str = r"[^\x00-\x20\x22\x28\x29\x2c\x2e\x3a-\x3c\x3e\x40\x5b-\x5d\x7f-\xff]+";
    const QUOTED_PAIR: &str = r"\x5c[\x00-\x7f]";

    /// `addr-spec` from RFC 822 section 6.1, matched over raw bytes.
    pub(super) static ADDR_SPEC: Lazy<Regex> = Lazy::new(|| {
        let domain_literal = format!(r"\x5b(?:{DTEXT}|{QUOTED_PAIR})*\x5d");
        let quoted_string = format!(r"\x22(?:{QTEXT}|{QUOTED_PAIR})*\x22");
        let sub_domain = format!("(?:{ATOM}|{domain_literal})");
        let word = format!("(?:{ATOM}|{quoted_string})");
        let domain = format!(r"{sub_domain}(?:\x2e{sub_domain})*");
        let local_part = format!(r"{word}(?:\x2e{word})*");

        Regex::new(&format!(r"(?-u)\A{local_part}\x40{domain}\z"))
            .expect("RFC-822 addr-spec pattern must compile")
    });
}

/// Validates an address against the full RFC-822 `addr-spec` grammar.
///
/// Only ASCII is accepted, as in the RFC. Comments and folding whitespace are not.
///
/// # Example
/// ```rust
/// use textpatch::utils::is_valid_email_strict;
///
/// assert!(is_valid_email_strict("\"john doe\"@[10.0.0.1]"));
/// assert!(!is_valid_email_strict("john doe@example.com"));
/// ```
#[cfg(feature = "strict-email")]
pub fn is_valid_email_strict(text: &str) -> bool {
    rfc822::ADDR_SPEC.is_match(text.as_bytes())
}
