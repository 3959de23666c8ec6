//! # Legacy character cleanup
//!
//! Text pasted from word processors tends to carry "wonky" characters: smart quotes,
//! en/em-dashes, ellipses, and single-byte Windows-1252/Latin-1 remnants. The helpers
//! here replace them with plain ASCII or HTML entities.
//!
//! The replacements are a fixed, ordered table applied one stage after the other.
//! Order is part of the behaviour: a later rule sees the output of every earlier one.
//! The table has four stages:
//!
//! 1. numeric HTML entities (`&#8211;` ...), ASCII mode only
//! 2. three-byte sequences for quotes, dashes, bullet and euro
//! 3. a catch-all turning any `\S 0x80 \S` triple into one space
//! 4. single Latin-1 codes in the `0x7E..=0xB7` range
//!
//! Stage 4 is shared by both modes: single codes become ASCII even when entities were
//! asked for.
//!
//! There are two front-ends over the same tables:
//!
//! - `replace_wonky_bytes_*` work on raw bytes, byte-for-byte. Use them for
//!   undecoded legacy input where a lone `0x93` really is a Windows-1252 quote.
//! - `replace_wonky_characters_*` work on decoded text and never split a character.
//!   Stage 4 is keyed on code points (`U+00A0` is the no-break space), and the
//!   catch-all only takes whole three-byte characters whose middle byte is `0x80`
//!   (the `U+2000..=U+203F` punctuation block and its siblings).
//!
//! ## Example
//!
//! ```rust
//! use textpatch::utils::{replace_wonky_characters_with_ascii, replace_wonky_characters_with_entities};
//!
//! assert_eq!(replace_wonky_characters_with_ascii("\u{201c}Ulysses\u{201d}"), "\"Ulysses\"");
//! assert_eq!(replace_wonky_characters_with_entities("\u{201c}Ulysses\u{201d}"), "&ldquo;Ulysses&rdquo;");
//! assert_eq!(replace_wonky_characters_with_ascii("voilà\u{a0}café"), "voilà café");
//! ```
use once_cell::sync::Lazy;
use regex::bytes::{NoExpand, Regex};

/// A literal needle and what replaces it.
type Rule = (&'static [u8], &'static str);

const ENTITY_TO_ASCII: &[Rule] = &[
    (b"&#8211;", "-"),
    (b"&#8212;", "--"),
    (b"&#8230;", "..."),
    (b"&#8216;", "'"),
    (b"&#8217;", "'"),
    (b"&#8220;", "\""),
    (b"&#8221;", "\""),
];

// The dash/ellipsis triples do not match the real UTF-8 encodings (E2 80 93 and
// friends); those fall through to the catch-all and become a space. They are not
// valid UTF-8, so the `&str` front-end skips them.
const MULTIBYTE_TO_ASCII: &[Rule] = &[
    (b"\xE2\x80\x22", "-"),
    (b"\xE2\x80\x21", "--"),
    (b"\xE2\x80\x7C", "..."),
    (b"\xE2\x80\x7E", "'"),
    (b"\xE2\x80\x7F", "'"),
    (b"\xE2\x80\x98", "'"),
    (b"\xE2\x80\x99", "'"),
    (b"\xE2\x80\x9C", "\""),
    (b"\xE2\x80\x9D", "\""),
    (b"\xE2\x80\xA2", "."),
    (b"\xE2\x82\xAC", "&euro;"),
];

const MULTIBYTE_TO_ENTITIES: &[Rule] = &[
    (b"\xE2\x80\x22", "&ndash;"),
    (b"\xE2\x80\x21", "&mdash;"),
    (b"\xE2\x80\x7C", "&hellip;"),
    (b"\xE2\x80\x7E", "&lsquo;"),
    (b"\xE2\x80\x7F", "&rsquo;"),
    (b"\xE2\x80\x98", "&rsquo;"),
    (b"\xE2\x80\x99", "&rsquo;"),
    (b"\xE2\x80\x9C", "&ldquo;"),
    (b"\xE2\x80\x9D", "&rdquo;"),
    (b"\xE2\x80\xA2", "."),
    (b"\xE2\x82\xAC", "&euro;"),
];

const CATCH_ALL: &str = r"(?-u)\S\x80\S";

/// Single Latin-1 codes. The value is a byte for the raw front-end and a code point
/// for the text front-end.
const LATIN1_TO_ASCII: &[(u8, &str)] = &[
    (0x7E, "'"),
    (0x7F, "'"),
    (0x85, "-"),
    (0x91, "'"),
    (0x92, "'"),
    (0x93, "\""),
    (0x94, "\""),
    (0x95, "*"),
    (0x96, "-"),
    (0x97, "-"),
    (0x98, "'"),
    (0x99, "'"),
    (0x9B, ">"),
    (0x9C, "\""),
    (0x9D, "\""),
    (0xA0, " "),
    (0xA6, "|"),
    (0xAD, ""),
    (0xB4, "'"),
    (0xB7, "*"),
];

static ASCII_BYTE_RULES: Lazy<Vec<(Regex, &'static [u8])>> =
    Lazy::new(|| compile_bytes(&[ENTITY_TO_ASCII, MULTIBYTE_TO_ASCII]));

static ENTITY_BYTE_RULES: Lazy<Vec<(Regex, &'static [u8])>> =
    Lazy::new(|| compile_bytes(&[MULTIBYTE_TO_ENTITIES]));

fn literal_pattern(bytes: &[u8]) -> String {
    let escaped: String = bytes.iter().map(|b| format!(r"\x{:02X}", b)).collect();
    format!("(?-u){}", escaped)
}

fn compile_bytes(leading: &[&'static [Rule]]) -> Vec<(Regex, &'static [u8])> {
    let literals = leading
        .iter()
        .flat_map(|&stage| stage.iter().copied())
        .map(|(needle, replacement)| (literal_pattern(needle), replacement.as_bytes()));
    let catch_all = std::iter::once((CATCH_ALL.to_string(), " ".as_bytes()));
    let latin1 = LATIN1_TO_ASCII
        .iter()
        .map(|&(byte, replacement)| (literal_pattern(&[byte]), replacement.as_bytes()));

    literals
        .chain(catch_all)
        .chain(latin1)
        .map(|(pattern, replacement)| {
            let regex = Regex::new(&pattern).expect("wonky character rule must compile");
            (regex, replacement)
        })
        .collect()
}

fn apply_bytes(rules: &[(Regex, &'static [u8])], bytes: &[u8]) -> Vec<u8> {
    let out = rules.iter().fold(bytes.to_vec(), |acc, (regex, replacement)| {
        regex.replace_all(&acc, NoExpand(*replacement)).into_owned()
    });

    if out.len() != bytes.len() {
        tracing::debug!(before = bytes.len(), after = out.len(), "replaced wonky bytes");
    }
    out
}

/// `true` for three-byte characters encoded as `lead 0x80 trail`.
fn is_catch_all(c: char) -> bool {
    let cp = u32::from(c);
    (0x800..=0xFFFF).contains(&cp) && (cp >> 6) & 0x3F == 0
}

fn latin1_replacement(c: char) -> Option<&'static str> {
    LATIN1_TO_ASCII
        .iter()
        .find(|(code, _)| u32::from(*code) == u32::from(c))
        .map(|&(_, replacement)| replacement)
}

fn apply_chars(text: &str, leading: &[&'static [Rule]]) -> String {
    let replaced = leading
        .iter()
        .flat_map(|&stage| stage.iter().copied())
        .filter_map(|(needle, replacement)| {
            std::str::from_utf8(needle).ok().map(|needle| (needle, replacement))
        })
        .fold(text.to_string(), |acc, (needle, replacement)| acc.replace(needle, replacement));

    // Catch-all output is a space, which stage 4 never touches, so one pass covers both.
    let mut out = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        if is_catch_all(c) {
            out.push(' ');
        } else if let Some(replacement) = latin1_replacement(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }

    if out != text {
        tracing::debug!(before = text.len(), after = out.len(), "replaced wonky characters");
    }
    out
}

/// Replaces wonky characters in raw bytes with ASCII equivalents.
///
/// The euro sign has no ASCII form and becomes `&euro;`. Multi-byte UTF-8 characters
/// outside the recognised set can be split by the single-byte stage.
pub fn replace_wonky_bytes_with_ascii(bytes: &[u8]) -> Vec<u8> {
    apply_bytes(&ASCII_BYTE_RULES, bytes)
}

/// Replaces multi-byte wonky characters in raw bytes with named HTML entities.
///
/// Numeric entities are left alone and single Latin-1 bytes still become ASCII.
pub fn replace_wonky_bytes_with_entities(bytes: &[u8]) -> Vec<u8> {
    apply_bytes(&ENTITY_BYTE_RULES, bytes)
}

/// Replaces wonky characters in decoded text with ASCII equivalents.
///
/// Characters outside the table are returned untouched.
pub fn replace_wonky_characters_with_ascii(text: &str) -> String {
    apply_chars(text, &[ENTITY_TO_ASCII, MULTIBYTE_TO_ASCII])
}

/// Replaces wonky characters in decoded text with named HTML entities.
///
/// Latin-1 code points (`U+00A0`, `U+00B7` ...) still become ASCII.
pub fn replace_wonky_characters_with_entities(text: &str) -> String {
    apply_chars(text, &[MULTIBYTE_TO_ENTITIES])
}
