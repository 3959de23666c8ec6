//! # Blank checks
//!
//! A single [`Blank`] predicate shared by strings, collections, options and dynamic
//! JSON values, replacing duck-typed "is it empty or falsy?" checks.
//!
//! A value is blank when it is:
//! - an empty string or collection
//! - `None` (or `Some` of something blank)
//! - `false`
//! - JSON `null`
//!
//! Whitespace-only strings are **not** blank, and numbers never are.
//!
//! ## Example
//!
//! ```rust
//! use textpatch::utils::{is_blank, remove_blanks};
//!
//! assert!(is_blank(""));
//! assert!(!is_blank(" "));
//! assert!(is_blank(&None::<String>));
//!
//! let kept = remove_blanks(&[Some("this"), Some(""), Some("that"), None]);
//! assert_eq!(kept, vec![Some("this"), Some("that")]);
//! ```
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use serde_json::Value;

/// Types that can be empty or absent.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(value) => value.is_blank(),
            None => true,
        }
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Number(_) => false,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

/// Implements [`Blank`] as `is_empty()` for collection types.
macro_rules! blank_when_empty {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Blank for $ty {
                fn is_blank(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

blank_when_empty! {
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    HashSet<T, S> => [T, S],
    BTreeMap<K, V> => [K, V],
    BTreeSet<T> => [T],
}

/// Implements [`Blank`] as always `false` for scalars.
macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_blank!(char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// `true` for empty strings and collections, `None`, `false` and JSON `null`.
pub fn is_blank<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Drops every blank element, keeping the others in order.
pub fn remove_blanks<T: Blank + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().filter(|item| !item.is_blank()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_strings() {
        assert!(is_blank(""));
        assert!(is_blank(&String::new()));
        assert!(!is_blank("x"));
        assert!(!is_blank("   "));
    }

    #[test]
    fn test_blank_options() {
        assert!(is_blank(&None::<&str>));
        assert!(is_blank(&Some("")));
        assert!(!is_blank(&Some("zeke")));
    }

    #[test]
    fn test_blank_collections() {
        assert!(is_blank(&Vec::<u8>::new()));
        assert!(!is_blank(&vec![0u8]));
        assert!(is_blank(&HashMap::<String, String>::new()));
        assert!(is_blank(&[] as &[i32]));
    }

    #[test]
    fn test_blank_scalars() {
        assert!(is_blank(&false));
        assert!(!is_blank(&true));
        assert!(!is_blank(&0));
        assert!(!is_blank(&0.0f64));
    }

    #[test]
    fn test_blank_json_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!([])));
        assert!(is_blank(&json!({})));
        assert!(is_blank(&json!(false)));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(" ")));
    }

    #[test]
    fn test_blank_remove_blanks_options() {
        let seq = [Some("this"), Some(""), Some("that"), None];
        assert_eq!(remove_blanks(&seq), vec![Some("this"), Some("that")]);
    }

    #[test]
    fn test_blank_remove_blanks_json() {
        let seq = vec![json!("this"), json!(""), json!("that"), json!(null), json!(3)];
        assert_eq!(remove_blanks(&seq), vec![json!("this"), json!("that"), json!(3)]);
    }

    #[test]
    fn test_blank_remove_blanks_empty() {
        assert!(remove_blanks::<String>(&[]).is_empty());
    }
}
