pub mod truncate;
pub use truncate::{
    EllipsizeOptions, TruncateOptions, ellipsize, truncate_preserving_words,
    truncate_preserving_words_by_count,
};

pub mod slug;
pub use slug::permalinkify;

pub mod markup;
pub use markup::strip_tags;

pub mod sanitize;
pub use sanitize::{
    DEFAULT_POLLUTION_DELIMITER, gnix, nix, pollute, pollute_with, sanitize, sanitize_with,
};

pub mod url;
pub use url::{add_http, domain, domain_without_www, is_valid_url, remove_http_and_www};

pub mod email;
pub use email::is_valid_email;

cfg_if::cfg_if! {
    if #[cfg(feature = "strict-email")] {
        pub use email::is_valid_email_strict;
    }
}

pub mod whitespace;
pub use whitespace::remove_whitespace;

pub mod case;
pub use case::{is_downcase, is_upcase};

pub mod wonky;
pub use wonky::{
    replace_wonky_bytes_with_ascii, replace_wonky_bytes_with_entities,
    replace_wonky_characters_with_ascii, replace_wonky_characters_with_entities,
};

pub mod blank;
pub use blank::{Blank, is_blank, remove_blanks};

pub mod sequence;
pub use sequence::{remove_first_element, remove_last_element};

pub mod object;
pub use object::{Capability, TextForm, is_numeric, try_invoke, try_send};
