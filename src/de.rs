//! JSON parsing.
//!
//! This module provides the backtracking [`Parser`] that turns JSON text into
//! a [`Value`] tree, and the serde bridge ([`from_value`]) that reads Rust
//! types back out of a `Value`.
//!
//! ## Overview
//!
//! The parser has no grammar table. A value is found by trying candidate
//! productions in a fixed order:
//!
//! 1. string
//! 2. number
//! 3. boolean
//! 4. null
//! 5. object
//! 6. array
//!
//! Each attempt saves the cursor, consumes greedily, and rewinds on failure
//! before the next candidate runs. Whitespace is skipped at token boundaries.
//!
//! Strings are taken verbatim: a backslash escapes the next character, but
//! escape sequences are stored as written and never decoded.
//!
//! Inside arrays and objects, each element (or `key: value` member) is parsed
//! as a unit followed by an optional `,`. The loop stops at the first element
//! or separator that fails, then the closing bracket is required. A trailing
//! comma before the closing bracket is therefore accepted.
//!
//! ## Usage
//!
//! ```rust
//! use dynjson::{from_str, Value};
//!
//! let value: Value = from_str(r#"{"a": [1, 2.5e1, true, null, "x"]}"#).unwrap();
//! assert_eq!(value.at("a").at(1).coerce::<f64>().unwrap(), 25.0);
//!
//! let err = from_str::<Value>("[1:2]").unwrap_err();
//! assert!(err.to_string().contains("column 3"));
//! ```

use crate::{Error, JsonMap, Result, Value};
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::forward_to_deserialize_any;
use std::fmt;

/// Deepest nesting of arrays and objects the parser accepts.
pub const MAX_DEPTH: usize = 512;

/// The backtracking JSON parser.
///
/// Every production returns `Option`: `None` means "not here", and the
/// cursor is back where the production started. The parser never panics on
/// malformed input.
///
/// # Examples
///
/// ```rust
/// use dynjson::Parser;
///
/// let mut parser = Parser::new("[1, 2] tail");
/// let value = parser.parse_value().unwrap();
/// assert_eq!(value.to_string(), "[1,2]");
/// assert_eq!(parser.position(), 6);
/// ```
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
    depth: usize,
    furthest: usize,
    expected: Vec<String>,
}

impl<'de> Parser<'de> {
    #[must_use]
    pub fn new(input: &'de str) -> Self {
        Parser {
            input,
            position: 0,
            depth: 0,
            furthest: 0,
            expected: Vec::new(),
        }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parses one value starting at the cursor.
    ///
    /// On success the cursor sits right after the value; on failure it is
    /// back where it was.
    pub fn parse_value(&mut self) -> Option<Value> {
        self.attempt(|p| p.parse_string())
            .or_else(|| self.attempt(|p| p.parse_number()))
            .or_else(|| self.attempt(|p| p.parse_bool()))
            .or_else(|| self.attempt(|p| p.parse_null()))
            .or_else(|| self.attempt(|p| p.parse_object()))
            .or_else(|| self.attempt(|p| p.parse_array()))
    }

    /// Parses the whole input as a single value.
    ///
    /// Only whitespace may follow the value.
    ///
    /// # Errors
    ///
    /// [`Error::Syntax`] at the furthest offset any candidate reached, naming
    /// the tokens that would have been accepted there.
    pub fn parse_document(&mut self) -> Result<Value> {
        if let Some(value) = self.parse_value() {
            self.skip_whitespace();
            if self.position == self.input.len() {
                return Ok(value);
            }
            self.expect("end of input");
        }
        Err(self.error())
    }

    fn error(&self) -> Error {
        let expected = match self.expected.as_slice() {
            [] => "a JSON value".to_string(),
            [only] => only.clone(),
            many => format!("one of {}", many.join(", ")),
        };
        Error::syntax(self.input, self.furthest, expected)
    }

    /// Runs `production`, rewinding the cursor if it fails.
    fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.position;
        let result = production(self);
        if result.is_none() {
            log::trace!("rewinding from {} to {checkpoint}", self.position);
            self.position = checkpoint;
        }
        result
    }

    /// Records that `what` was wanted at the cursor.
    fn expect(&mut self, what: impl fmt::Display) {
        if self.position < self.furthest {
            return;
        }
        if self.position > self.furthest {
            self.furthest = self.position;
            self.expected.clear();
        }
        let what = what.to_string();
        if !self.expected.contains(&what) {
            self.expected.push(what);
        }
    }

    fn rest(&self) -> &'de str {
        &self.input[self.position..]
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_byte().map_or(false, |b| b.is_ascii_whitespace()) {
            self.position += 1;
        }
    }

    /// Matches `token` after optional whitespace, all or nothing.
    fn literal(&mut self, token: &'static str) -> Option<()> {
        let checkpoint = self.position;
        self.skip_whitespace();
        if self.rest().starts_with(token) {
            self.position += token.len();
            Some(())
        } else {
            self.expect(format_args!("'{token}'"));
            self.position = checkpoint;
            None
        }
    }

    fn parse_string(&mut self) -> Option<Value> {
        self.parse_raw_string().map(Value::from)
    }

    /// Content between double quotes, with escapes kept as written.
    fn parse_raw_string(&mut self) -> Option<String> {
        self.literal("\"")?;
        let start = self.position;
        let mut escaped = false;
        for (offset, byte) in self.rest().bytes().enumerate() {
            match byte {
                b'"' if !escaped => {
                    let content = self.input[start..start + offset].to_string();
                    self.position = start + offset + 1;
                    return Some(content);
                }
                b'\\' => escaped = !escaped,
                _ => escaped = false,
            }
        }
        self.position = self.input.len();
        self.expect("closing '\"'");
        None
    }

    fn parse_number(&mut self) -> Option<Value> {
        self.skip_whitespace();
        let start = self.position;
        if matches!(self.peek_byte(), Some(b'+' | b'-')) {
            self.position += 1;
        }
        let mut digits = self.skip_digits();
        if self.peek_byte() == Some(b'.') {
            self.position += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            self.expect("number");
            return None;
        }
        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            let mantissa_end = self.position;
            self.position += 1;
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.position += 1;
            }
            if self.skip_digits() == 0 {
                self.position = mantissa_end;
            }
        }
        let text = &self.input[start..self.position];
        match text.parse::<f64>() {
            Ok(number) if number.is_finite() => Some(Value::Number(number)),
            _ => {
                log::trace!("number {text:?} out of range");
                self.expect("finite number");
                None
            }
        }
    }

    fn skip_digits(&mut self) -> usize {
        let count = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        self.position += count;
        count
    }

    fn parse_bool(&mut self) -> Option<Value> {
        self.literal("true")
            .map(|_| Value::Bool(true))
            .or_else(|| self.literal("false").map(|_| Value::Bool(false)))
    }

    fn parse_null(&mut self) -> Option<Value> {
        self.literal("null").map(|_| Value::Null)
    }

    fn parse_object(&mut self) -> Option<Value> {
        self.literal("{")?;
        self.nested(|p| {
            let mut members = JsonMap::new();
            while let Some((key, value)) = p.attempt(Self::parse_member) {
                members.insert(key, value);
                if p.literal(",").is_none() {
                    break;
                }
            }
            p.literal("}")?;
            Some(Value::from(members))
        })
    }

    fn parse_member(&mut self) -> Option<(String, Value)> {
        let key = self.parse_raw_string()?;
        self.literal(":")?;
        let value = self.parse_value()?;
        Some((key, value))
    }

    fn parse_array(&mut self) -> Option<Value> {
        self.literal("[")?;
        self.nested(|p| {
            let mut items = Vec::new();
            while let Some(value) = p.parse_value() {
                items.push(value);
                if p.literal(",").is_none() {
                    break;
                }
            }
            p.literal("]")?;
            Some(Value::from(items))
        })
    }

    /// Runs a container body one nesting level deeper.
    fn nested<T>(&mut self, body: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_DEPTH {
            log::trace!("nesting deeper than {MAX_DEPTH} at byte {}", self.position);
            self.expect("shallower nesting");
            return None;
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }
}

/// Deserializes an instance of `T` from a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Custom`] when the value's shape does not fit `T`.
///
/// # Examples
///
/// ```rust
/// use dynjson::{from_value, json};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(json!({ "x": 1, "y": (-2) })).unwrap();
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(ValueDeserializer::new(value))
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: JsonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(key.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(self.variant.into_deserializer())?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr.to_vec())),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj.to_map())),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}

/// Serde deserializer reading from a [`Value`].
///
/// Containers are read through their handles, so the source value is never
/// consumed or modified.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 => {
                visitor.visit_i64(n as i64)
            }
            Value::Number(n) => visitor.visit_f64(n),
            Value::String(s) => visitor.visit_string(s.get()),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr.to_vec())),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj.to_map())),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.get().into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => {
                let (variant, value) = obj
                    .borrow()
                    .iter()
                    .next()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .ok_or_else(|| Error::custom("expected enum variant"))?;
                visitor.visit_enum(EnumDeserializer {
                    variant,
                    value: Some(value),
                })
            }
            _ => Err(Error::custom("expected enum")),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    fn parse(text: &str) -> Option<Value> {
        Parser::new(text).parse_document().ok()
    }

    #[test]
    fn test_scalars() {
        assert!(parse("null").unwrap().is_null());
        assert_eq!(parse("true").unwrap().as_bool(), Some(true));
        assert_eq!(parse(" false ").unwrap().as_bool(), Some(false));
        assert_eq!(parse("3.14159").unwrap().as_f64(), Some(3.14159));
        assert_eq!(parse("\"hi\"").unwrap().as_string().as_deref(), Some("hi"));
    }

    #[test]
    fn test_number_grammar() {
        assert_eq!(parse("-12").unwrap().as_f64(), Some(-12.0));
        assert_eq!(parse("+7").unwrap().as_f64(), Some(7.0));
        assert_eq!(parse("1.5e2").unwrap().as_f64(), Some(150.0));
        assert_eq!(parse("1E-2").unwrap().as_f64(), Some(0.01));
        assert_eq!(parse(".5").unwrap().as_f64(), Some(0.5));
        assert_eq!(parse("5.").unwrap().as_f64(), Some(5.0));
        assert_eq!(parse("007").unwrap().as_f64(), Some(7.0));
        assert!(parse("-").is_none());
        assert!(parse(".").is_none());
        assert!(parse("1e999").is_none());
    }

    #[test]
    fn test_exponent_without_digits_is_not_consumed() {
        let mut parser = Parser::new("1e");
        assert_eq!(parser.parse_value().unwrap().as_f64(), Some(1.0));
        assert_eq!(parser.position(), 1);
        assert!(parse("1e").is_none());
    }

    #[test]
    fn test_escapes_kept_verbatim() {
        let value = parse(r#""a\"b\\""#).unwrap();
        assert_eq!(value.as_string().as_deref(), Some(r#"a\"b\\"#));

        let value = parse(r#""\nA""#).unwrap();
        assert_eq!(value.as_string().as_deref(), Some(r"\nA"));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(parse("\"abc").is_none());
        assert!(parse(r#""abc\""#).is_none());
    }

    #[test]
    fn test_containers() {
        let value = parse(r#" { "a" : [ 1 , { } , [ ] ] , "b" : "x" } "#).unwrap();
        assert_eq!(value.to_string(), r#"{"a":[1,{},[]],"b":"x"}"#);
    }

    #[test]
    fn test_trailing_commas_tolerated() {
        assert_eq!(parse("[1,2,]").unwrap().to_string(), "[1,2]");
        assert_eq!(parse(r#"{"a":1,}"#).unwrap().to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn test_malformed_containers() {
        assert!(parse("[1:2]").is_none());
        assert!(parse(r#"{"a"}"#).is_none());
        assert!(parse(r#"{"a":}"#).is_none());
        assert!(parse("[1,,2]").is_none());
        assert!(parse("[").is_none());
        assert!(parse("{a:1}").is_none());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(parse("[1] x").is_none());
        assert!(parse("truex").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn test_duplicate_keys_keep_last() {
        let value = parse(r#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(value.to_string(), r#"{"a":2}"#);
    }

    #[test]
    fn test_failed_parse_rewinds() {
        let mut parser = Parser::new("[1:2]");
        assert!(parser.parse_value().is_none());
        assert_eq!(parser.position(), 0);
    }

    #[test]
    fn test_error_reports_furthest_offset() {
        match Parser::new("[1:2]").parse_document() {
            Err(Error::Syntax {
                offset, expected, ..
            }) => {
                assert_eq!(offset, 2);
                assert!(expected.contains("']'"));
                assert!(expected.contains("','"));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_depth_limit() {
        let deep = "[".repeat(MAX_DEPTH + 1) + &"]".repeat(MAX_DEPTH + 1);
        assert!(parse(&deep).is_none());

        let shallow = "[".repeat(MAX_DEPTH) + &"]".repeat(MAX_DEPTH);
        assert!(parse(&shallow).is_some());
    }

    #[test]
    fn test_from_value_struct() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct User {
            name: String,
            age: u32,
            tags: Vec<String>,
            nick: Option<String>,
        }

        let value = parse(r#"{"name":"Ada","age":36,"tags":["x"],"nick":null}"#).unwrap();
        let user: User = from_value(value).unwrap();
        assert_eq!(
            user,
            User {
                name: "Ada".to_string(),
                age: 36,
                tags: vec!["x".to_string()],
                nick: None,
            }
        );
    }

    #[test]
    fn test_from_value_enum() {
        #[derive(Deserialize, Debug, PartialEq)]
        enum Shape {
            Unit,
            Circle(f64),
            Rect { w: f64, h: f64 },
        }

        let unit: Shape = from_value(Value::from("Unit")).unwrap();
        assert_eq!(unit, Shape::Unit);

        let circle: Shape = from_value(parse(r#"{"Circle":1.5}"#).unwrap()).unwrap();
        assert_eq!(circle, Shape::Circle(1.5));

        let rect: Shape = from_value(parse(r#"{"Rect":{"w":2,"h":3}}"#).unwrap()).unwrap();
        assert_eq!(rect, Shape::Rect { w: 2.0, h: 3.0 });
    }

    #[test]
    fn test_from_value_does_not_consume_source() {
        let value = parse(r#"{"a":1,"b":2}"#).unwrap();
        let map: HashMap<String, i64> = from_value(value.clone()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(value.to_string(), r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_from_value_shape_mismatch() {
        let result: Result<Vec<i32>> = from_value(Value::from("nope"));
        assert!(matches!(result, Err(Error::Custom(_))));
    }
}
