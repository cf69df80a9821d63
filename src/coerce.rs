//! Typed checks and coercions over [`Value`].
//!
//! [`JsonType`] ties a Rust type to the [`Value`] variant it is read from.
//! [`Value::is`] asks whether the tag matches, [`Value::coerce`] extracts the
//! payload or fails with [`Error::Type`](crate::Error::Type).
//!
//! Container and string targets ([`Array`], [`Object`], [`JsonString`]) come
//! back as aliasing handles: mutating them mutates the value they were read
//! from. [`String`] is a copy of the text.
//!
//! ```rust
//! use dynjson::{Array, Value};
//!
//! let value = Value::from(vec![1, 2, 3]);
//! assert!(value.is::<Array>());
//! assert!(!value.is::<f64>());
//!
//! let items: Array = value.coerce().unwrap();
//! items.push(4).unwrap();
//! assert_eq!(value.to_string(), "[1,2,3,4]");
//!
//! assert!(value.coerce::<bool>().unwrap_err().is_type());
//! ```

use crate::{Array, JsonString, Object, Value};
use std::fmt;

/// The six tags a [`Value`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Rust type that one [`Value`] variant can be coerced to.
pub trait JsonType: Sized {
    /// Name reported as `expected` in type errors.
    const EXPECTED: &'static str;

    /// Returns `true` if `value` holds the variant this type is read from.
    fn matches(value: &Value) -> bool;

    /// Extracts the payload, or `None` if the variant does not match.
    fn extract(value: &Value) -> Option<Self>;
}

impl JsonType for Value {
    const EXPECTED: &'static str = "value";

    fn matches(_value: &Value) -> bool {
        true
    }

    fn extract(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// `()` stands for the null variant.
impl JsonType for () {
    const EXPECTED: &'static str = "null";

    fn matches(value: &Value) -> bool {
        value.is_null()
    }

    fn extract(value: &Value) -> Option<Self> {
        value.is_null().then_some(())
    }
}

impl JsonType for bool {
    const EXPECTED: &'static str = "bool";

    fn matches(value: &Value) -> bool {
        value.is_bool()
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl JsonType for f64 {
    const EXPECTED: &'static str = "number";

    fn matches(value: &Value) -> bool {
        value.is_number()
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl JsonType for String {
    const EXPECTED: &'static str = "string";

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_string()
    }
}

impl JsonType for JsonString {
    const EXPECTED: &'static str = "string";

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl JsonType for Array {
    const EXPECTED: &'static str = "array";

    fn matches(value: &Value) -> bool {
        value.is_array()
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_array()
    }
}

impl JsonType for Object {
    const EXPECTED: &'static str = "object";

    fn matches(value: &Value) -> bool {
        value.is_object()
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_is_matches_tag_only() {
        let number = Value::from(3.5);
        assert!(number.is::<f64>());
        assert!(number.is::<Value>());
        assert!(!number.is::<String>());
        assert!(!number.is::<()>());
        assert!(Value::Null.is::<()>());
    }

    #[test]
    fn test_coerce_type_error_names_both_sides() {
        let text = Value::from("hello");
        match text.coerce::<f64>() {
            Err(Error::Type { expected, found }) => {
                assert_eq!(expected, "number");
                assert_eq!(found, Kind::String);
            }
            other => panic!("expected type error, got {other:?}"),
        }
    }

    #[test]
    fn test_handles_alias() {
        let value = Value::from("abc");
        let handle: JsonString = value.coerce().unwrap();
        handle.push_str("def");
        assert_eq!(value.as_string().as_deref(), Some("abcdef"));

        let copy: String = value.coerce().unwrap();
        assert_eq!(copy, "abcdef");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(Value::from(vec![1]).kind(), Kind::Array);
    }
}
