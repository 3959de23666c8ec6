//! # Dynamic values
//!
//! Helpers for values whose shape is not known up front: calling a capability only
//! when the value supports it ([`try_invoke`]) and recognising numeric strings
//! ([`is_numeric`]).
//!
//! Dynamic values are [`serde_json::Value`]s. Capabilities form a closed set
//! ([`Capability`]); asking for one by an unknown name is a caller error and returns
//! [`TextError::UnknownCapability`], while asking a value for a capability it does not
//! support simply yields `None`.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use textpatch::utils::{Capability, try_invoke, try_send};
//!
//! assert_eq!(try_invoke(&json!([3, 4]), Capability::First), Some(json!(3)));
//! assert_eq!(try_invoke(&json!(null), Capability::Size), None);
//! assert_eq!(try_send(&json!("  hi "), "strip").unwrap(), Some(json!("hi")));
//! assert!(try_send(&json!("hi"), "explode").is_err());
//! ```
use std::{borrow::Cow, fmt::Display, str::FromStr};

use serde_json::Value;

use crate::error::{Result, TextError};

/// Operations [`try_invoke`] knows how to perform.
///
/// - `Size`: char count of a string, length of an array or object
/// - `Upcase` / `Downcase` / `Strip`: strings only
/// - `First` / `Last`: arrays only, `null` when the array is empty
/// - `Keys` / `Values`: objects only
/// - `Empty`: strings, arrays and objects
/// - `ToS`: any non-null value; strings as-is, everything else as compact JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Size,
    Upcase,
    Downcase,
    Strip,
    First,
    Last,
    Keys,
    Values,
    Empty,
    ToS,
}

impl Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Size => write!(f, "size"),
            Self::Upcase => write!(f, "upcase"),
            Self::Downcase => write!(f, "downcase"),
            Self::Strip => write!(f, "strip"),
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
            Self::Keys => write!(f, "keys"),
            Self::Values => write!(f, "values"),
            Self::Empty => write!(f, "empty?"),
            Self::ToS => write!(f, "to_s"),
        }
    }
}

impl FromStr for Capability {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "size" | "length" | "count" => Ok(Self::Size),
            "upcase" => Ok(Self::Upcase),
            "downcase" => Ok(Self::Downcase),
            "strip" => Ok(Self::Strip),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "keys" => Ok(Self::Keys),
            "values" => Ok(Self::Values),
            "empty?" | "is_empty" => Ok(Self::Empty),
            "to_s" | "to_string" => Ok(Self::ToS),
            other => Err(TextError::UnknownCapability(other.to_string())),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Performs `capability` on `value` if the value supports it, otherwise returns `None`.
///
/// `null` supports nothing.
pub fn try_invoke(value: &Value, capability: Capability) -> Option<Value> {
    let result = match (capability, value) {
        (_, Value::Null) => None,
        (Capability::Size, Value::String(s)) => Some(Value::from(s.chars().count())),
        (Capability::Size, Value::Array(items)) => Some(Value::from(items.len())),
        (Capability::Size, Value::Object(map)) => Some(Value::from(map.len())),
        (Capability::Upcase, Value::String(s)) => Some(Value::from(s.to_uppercase())),
        (Capability::Downcase, Value::String(s)) => Some(Value::from(s.to_lowercase())),
        (Capability::Strip, Value::String(s)) => Some(Value::from(s.trim())),
        (Capability::First, Value::Array(items)) => Some(items.first().cloned().unwrap_or_default()),
        (Capability::Last, Value::Array(items)) => Some(items.last().cloned().unwrap_or_default()),
        (Capability::Keys, Value::Object(map)) => {
            Some(Value::Array(map.keys().cloned().map(Value::String).collect()))
        }
        (Capability::Values, Value::Object(map)) => Some(Value::Array(map.values().cloned().collect())),
        (Capability::Empty, Value::String(s)) => Some(Value::Bool(s.is_empty())),
        (Capability::Empty, Value::Array(items)) => Some(Value::Bool(items.is_empty())),
        (Capability::Empty, Value::Object(map)) => Some(Value::Bool(map.is_empty())),
        (Capability::ToS, Value::String(s)) => Some(Value::String(s.clone())),
        (Capability::ToS, other) => Some(Value::String(other.to_string())),
        _ => None,
    };

    if result.is_none() {
        tracing::trace!(%capability, kind = kind(value), "capability not supported");
    }
    result
}

/// [`try_invoke`] with the capability given by name (`"size"`, `"upcase"`, `"empty?"` ...).
///
/// # Errors
/// Returns [`TextError::UnknownCapability`] when `name` is not a known capability.
pub fn try_send(value: &Value, name: &str) -> Result<Option<Value>> {
    let capability: Capability = name.parse()?;
    Ok(try_invoke(value, capability))
}

/// Values with a plain text form, as `to_s` would give it.
///
/// JSON strings give their contents without quotes; every other JSON value gives its
/// compact JSON text.
pub trait TextForm {
    fn text_form(&self) -> Cow<'_, str>;
}

impl TextForm for str {
    fn text_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextForm for String {
    fn text_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: TextForm + ?Sized> TextForm for &T {
    fn text_form(&self) -> Cow<'_, str> {
        (**self).text_form()
    }
}

impl TextForm for Value {
    fn text_form(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// Implements [`TextForm`] through `Display` for scalars.
macro_rules! text_form_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextForm for $ty {
                fn text_form(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

text_form_via_display!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// `true` when the text form of `value` is an optionally signed decimal number:
/// digits with an optional `.digits` fraction, nothing else.
///
/// Exponents, bare dots (`".5"`, `"5."`) and surrounding whitespace are rejected.
/// JSON strings are checked by their contents, so `json!("5")` is numeric.
///
/// # Example
/// ```rust
/// use serde_json::json;
/// use textpatch::utils::is_numeric;
///
/// assert!(is_numeric("-37.3"));
/// assert!(is_numeric(&42));
/// assert!(is_numeric(&json!("5")));
/// assert!(!is_numeric("2.3.3"));
/// ```
pub fn is_numeric<T: TextForm + ?Sized>(value: &T) -> bool {
    lazy_regex!(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").is_match(&value.text_form())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_capability_from_str() {
        assert_eq!("length".parse::<Capability>().unwrap(), Capability::Size);
        assert_eq!("empty?".parse::<Capability>().unwrap(), Capability::Empty);
        assert_eq!(
            "explode".parse::<Capability>(),
            Err(TextError::UnknownCapability("explode".to_string()))
        );
    }

    #[test]
    fn test_object_capability_display_round_trip() {
        for cap in [Capability::Size, Capability::Empty, Capability::ToS, Capability::Keys] {
            assert_eq!(cap.to_string().parse::<Capability>().unwrap(), cap);
        }
    }

    #[test]
    fn test_object_try_invoke_strings() {
        let value = json!(" Héllo ");
        assert_eq!(try_invoke(&value, Capability::Size), Some(json!(7)));
        assert_eq!(try_invoke(&value, Capability::Upcase), Some(json!(" HÉLLO ")));
        assert_eq!(try_invoke(&value, Capability::Strip), Some(json!("Héllo")));
        assert_eq!(try_invoke(&value, Capability::First), None);
    }

    #[test]
    fn test_object_try_invoke_arrays() {
        let value = json!([1, "two", null]);
        assert_eq!(try_invoke(&value, Capability::First), Some(json!(1)));
        assert_eq!(try_invoke(&value, Capability::Last), Some(json!(null)));
        assert_eq!(try_invoke(&json!([]), Capability::First), Some(json!(null)));
        assert_eq!(try_invoke(&value, Capability::Keys), None);
    }

    #[test]
    fn test_object_try_invoke_objects() {
        let value = json!({"a": 1, "b": 2});
        assert_eq!(try_invoke(&value, Capability::Keys), Some(json!(["a", "b"])));
        assert_eq!(try_invoke(&value, Capability::Values), Some(json!([1, 2])));
        assert_eq!(try_invoke(&value, Capability::Empty), Some(json!(false)));
    }

    #[test]
    fn test_object_try_invoke_null_supports_nothing() {
        assert_eq!(try_invoke(&json!(null), Capability::ToS), None);
        assert_eq!(try_invoke(&json!(null), Capability::Empty), None);
    }

    #[test]
    fn test_object_try_invoke_to_s() {
        assert_eq!(try_invoke(&json!(42), Capability::ToS), Some(json!("42")));
        assert_eq!(try_invoke(&json!(true), Capability::ToS), Some(json!("true")));
        assert_eq!(try_invoke(&json!("x"), Capability::ToS), Some(json!("x")));
    }

    #[test]
    fn test_object_try_send() {
        assert_eq!(try_send(&json!("abc"), "upcase"), Ok(Some(json!("ABC"))));
        assert_eq!(try_send(&json!(3), "upcase"), Ok(None));
        assert!(matches!(
            try_send(&json!("abc"), "reverse"),
            Err(TextError::UnknownCapability(_))
        ));
    }

    #[test]
    fn test_object_is_numeric_accepts() {
        for text in ["0", "42", "-37.3", "+5", "007", "3.14159"] {
            assert!(is_numeric(text), "{text} should be numeric");
        }
        assert!(is_numeric(&-12));
        assert!(is_numeric(&2.5f64));
    }

    #[test]
    fn test_object_is_numeric_rejects() {
        for text in ["", "2.3.3", "1e5", ".5", "5.", " 5", "5 ", "-", "abc", "12a"] {
            assert!(!is_numeric(text), "{text} should not be numeric");
        }
        assert!(!is_numeric(&f64::NAN));
    }

    #[test]
    fn test_object_is_numeric_json_values() {
        assert!(is_numeric(&json!("5")));
        assert!(is_numeric(&json!("-37.3")));
        assert!(is_numeric(&json!(3.5)));
        assert!(is_numeric(&json!(-12)));
        assert!(!is_numeric(&json!("abc")));
        assert!(!is_numeric(&json!("2.3.3")));
        assert!(!is_numeric(&json!(null)));
        assert!(!is_numeric(&json!(true)));
        assert!(!is_numeric(&json!(["5"])));
    }

    #[test]
    fn test_object_text_form_matches_to_s() {
        for value in [json!("x"), json!(42), json!(true), json!([1, "a"])] {
            let to_s = try_invoke(&value, Capability::ToS).unwrap();
            assert_eq!(value.text_form(), to_s.as_str().unwrap());
        }
    }
}
