//! Case predicates.

/// `true` when upper-casing the text changes nothing.
///
/// Characters without case (digits, punctuation) pass trivially, so `"123"` is upcase.
pub fn is_upcase(text: &str) -> bool {
    text.to_uppercase() == text
}

/// `true` when lower-casing the text changes nothing.
pub fn is_downcase(text: &str) -> bool {
    text.to_lowercase() == text
}
