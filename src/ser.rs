//! JSON serialization.
//!
//! This module provides the text [`Serializer`] that writes a [`Value`] tree
//! as JSON, and [`ValueSerializer`], the serde serializer that turns any
//! `Serialize` type into a [`Value`].
//!
//! ## Overview
//!
//! Writing is a single deterministic pass:
//!
//! - `null`, `true` and `false` as literals
//! - integral numbers as plain integers, others in the shortest form that
//!   reads back to the same `f64`; NaN and infinities as `null`
//! - strings between double quotes, **without escaping**
//! - arrays and objects in their own iteration order
//!
//! Since string content is written as stored, text that came from the parser
//! (where escapes are kept verbatim) is written back unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use dynjson::{json, to_string, to_string_pretty};
//!
//! let value = json!({ "id": 7, "ratio": 0.25, "tags": ["a", "b"] });
//! assert_eq!(to_string(&value).unwrap(), r#"{"id":7,"ratio":0.25,"tags":["a","b"]}"#);
//!
//! let pretty = to_string_pretty(&value).unwrap();
//! assert!(pretty.contains("\n  \"id\": 7,"));
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use dynjson::{Serializer, Value, WriteOptions};
//!
//! let mut serializer = Serializer::new(WriteOptions::new());
//! serializer.write_value(&Value::from(vec![1.5, 2.0]));
//! assert_eq!(serializer.into_inner(), "[1.5,2]");
//! ```

use crate::{Array, Error, JsonMap, Object, Result, Value, WriteOptions};
use serde::{ser, Serialize};

/// The JSON text writer.
///
/// Created via [`Serializer::new`]; output accumulates until
/// [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: WriteOptions,
    indent_level: usize,
}

impl Serializer {
    #[must_use]
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `value` as JSON text.
    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(true) => self.output.push_str("true"),
            Value::Bool(false) => self.output.push_str("false"),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(&s.borrow()),
            Value::Array(arr) => self.write_array(arr),
            Value::Object(obj) => self.write_object(obj),
        }
    }

    fn write_number(&mut self, n: f64) {
        if n.is_finite() {
            // f64's Display is the shortest round-trip form and prints
            // integral values without a fraction.
            self.output.push_str(&n.to_string());
        } else {
            self.output.push_str("null");
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        self.output.push_str(s);
        self.output.push('"');
    }

    fn write_array(&mut self, arr: &Array) {
        let items = arr.borrow();
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push('[');
        self.indent_level += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_value(item);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
    }

    fn write_object(&mut self, obj: &Object) {
        let members = obj.borrow();
        if members.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in members.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_string(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.write_value(value);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push('}');
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }
}

/// Serde serializer producing a [`Value`].
///
/// Enum variants are externally tagged, as serde_json does: unit variants
/// become strings, every other variant a one-member object keyed by the
/// variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: JsonMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.iter().map(|&b| Value::from(b)).collect())
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn finish(self) -> Value {
        let value = Value::from(self.vec);
        match self.variant {
            Some(variant) => tagged(variant, value),
            None => value,
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: JsonMap::with_capacity(capacity),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        let value = Value::from(self.map);
        match self.variant {
            Some(variant) => tagged(variant, value),
            None => value,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s.get(),
            key @ (Value::Number(_) | Value::Bool(_)) => key.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "map keys must be strings, found {}",
                    other.kind()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

fn tagged(variant: &'static str, value: Value) -> Value {
    Value::from(JsonMap::from([(variant, value)]))
}

/// Converts any `Serialize` type into a [`Value`].
///
/// # Errors
///
/// Fails when a map key does not serialize to a string, number or boolean,
/// or when the type's own `Serialize` impl reports an error.
///
/// # Examples
///
/// ```rust
/// use dynjson::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.at("y").coerce::<f64>().unwrap(), 2.0);
/// ```
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
