//! # Markup
//!
//! Tag stripping for short HTML fragments. Entities are left encoded.

/// Removes every `<...>` and `</...>` tag, keeping the text between them.
///
/// # Example
/// ```rust
/// use textpatch::utils::strip_tags;
///
/// assert_eq!(strip_tags("<a href='http://shitstorm.com'>click</a>"), "click");
/// ```
pub fn strip_tags(text: &str) -> String {
    lazy_regex!(r"</?[^>]*>").replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_no_tags() {
        assert_eq!(strip_tags("whoa"), "whoa");
    }

    #[test]
    fn test_markup_anchor_with_attributes() {
        assert_eq!(strip_tags("<a href='http://shitstorm.com'>click</a>"), "click");
    }

    #[test]
    fn test_markup_inline_tags() {
        assert_eq!(
            strip_tags("this is <b>bold</b> and <em>emphatic</em>"),
            "this is bold and emphatic"
        );
    }

    #[test]
    fn test_markup_entities_untouched() {
        assert_eq!(strip_tags("<p>fish &amp; chips</p><br/>"), "fish &amp; chips");
    }

    #[test]
    fn test_markup_unclosed_bracket_kept() {
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
    }
}
