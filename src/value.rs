//! Dynamic value representation for JSON data.
//!
//! This module provides the [`Value`] enum which represents any JSON value,
//! and the shared handles [`JsonString`], [`Array`] and [`Object`] that carry
//! its string and container payloads.
//!
//! ## Sharing and deep copies
//!
//! String, array and object payloads live behind reference-counted handles.
//! Cloning a [`Value`] (or storing it somewhere) shares the payload: a
//! mutation made through one alias is visible through every other alias.
//! [`Value::deep_clone`] is the way to get an independent copy.
//!
//! ```rust
//! use dynjson::{json, Value};
//!
//! let a = json!({ "tags": ["x"] });
//! let b = a.clone();
//! let c = a.deep_clone();
//!
//! b.at("tags").coerce::<dynjson::Array>().unwrap().push("y").unwrap();
//!
//! assert_eq!(a.to_string(), r#"{"tags":["x","y"]}"#);
//! assert_eq!(c.to_string(), r#"{"tags":["x"]}"#);
//! ```
//!
//! Handles use `Rc<RefCell<_>>`, so a `Value` is neither `Send` nor `Sync`.
//! Aliases can only live on one thread, and all mutation through them is
//! sequential.
//!
//! ## Type checks
//!
//! ```rust
//! use dynjson::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert!(value.is::<f64>());
//! assert_eq!(value.as_f64(), Some(42.0));
//! assert!(value.coerce::<String>().is_err());
//! ```

use crate::coerce::{JsonType, Kind};
use crate::de::Parser;
use crate::path::Key;
use crate::ser::Serializer as TextSerializer;
use crate::{Error, JsonMap, Result, WriteOptions};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// A dynamically-typed JSON value.
///
/// Exactly one of six variants is active at any time. `Number` is the only
/// numeric tag: integers and floats both land there as `f64`.
///
/// `Clone` is shallow for strings, arrays and objects (the clone aliases the
/// same payload). Use [`Value::deep_clone`] for a structural copy.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(JsonString),
    Array(Array),
    Object(Object),
}

/// Shared, mutable string payload of a [`Value::String`].
#[derive(Clone, Default)]
pub struct JsonString(Rc<RefCell<String>>);

/// Shared, mutable element list of a [`Value::Array`].
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

/// Shared, mutable member map of a [`Value::Object`].
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<JsonMap>>);

impl JsonString {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        JsonString(Rc::new(RefCell::new(text.into())))
    }

    /// Borrows the text. Panics if a mutation is in progress on this handle.
    pub fn borrow(&self) -> Ref<'_, String> {
        self.0.borrow()
    }

    /// Returns a copy of the text.
    #[must_use]
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    /// Replaces the text, for every alias.
    pub fn set(&self, text: impl Into<String>) {
        *self.0.borrow_mut() = text.into();
    }

    pub fn push_str(&self, text: &str) {
        self.0.borrow_mut().push_str(text);
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns `true` if both handles point at the same text.
    #[must_use]
    pub fn ptr_eq(&self, other: &JsonString) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn deep_clone(&self) -> Self {
        JsonString::new(self.get())
    }
}

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the elements. Panics if a mutation is in progress on this handle.
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns an alias of the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Appends a value.
    ///
    /// # Errors
    ///
    /// [`Error::Cycle`] if `value` contains this array.
    pub fn push(&self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.reaches(self.addr()) {
            return Err(Error::cycle(format!("[{}]", self.len())));
        }
        self.0.borrow_mut().push(value);
        Ok(())
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`Error::Access`] if `index` is out of bounds, [`Error::Cycle`] if
    /// `value` contains this array.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if index >= self.len() {
            return Err(Error::access(format!("[{index}]")));
        }
        if value.reaches(self.addr()) {
            return Err(Error::cycle(format!("[{index}]")));
        }
        Ok(std::mem::replace(&mut self.0.borrow_mut()[index], value))
    }

    pub fn pop(&self) -> Option<Value> {
        self.0.borrow_mut().pop()
    }

    /// Returns aliases of all elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Returns `true` if both handles point at the same element list.
    #[must_use]
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Array::from(
            self.0
                .borrow()
                .iter()
                .map(Value::deep_clone)
                .collect::<Vec<_>>(),
        )
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the members. Panics if a mutation is in progress on this handle.
    pub fn borrow(&self) -> Ref<'_, JsonMap> {
        self.0.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, JsonMap> {
        self.0.borrow_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Returns an alias of the member named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Inserts or replaces a member, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`Error::Cycle`] if `value` contains this object.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = key.into();
        let value = value.into();
        if value.reaches(self.addr()) {
            return Err(Error::cycle(Key::Name(key)));
        }
        Ok(self.0.borrow_mut().insert(key, value))
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().remove(key)
    }

    /// Returns a map of aliases of all members.
    #[must_use]
    pub fn to_map(&self) -> JsonMap {
        self.0.borrow().clone()
    }

    /// Returns the member names in iteration order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Returns `true` if both handles point at the same member map.
    #[must_use]
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Object::from(
            self.0
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.deep_clone()))
                .collect::<JsonMap>(),
        )
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl Value {
    /// Returns the active tag.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the active tag is the one `T` is read from.
    ///
    /// Never fails; `is::<Value>()` is always `true`.
    #[inline]
    #[must_use]
    pub fn is<T: JsonType>(&self) -> bool {
        T::matches(self)
    }

    /// Extracts the payload as `T`.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] if the active tag is not the one `T` is read from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Value;
    ///
    /// let value: Value = "3.14159".parse().unwrap();
    /// assert_eq!(value.coerce::<f64>().unwrap(), 3.14159);
    /// assert!(value.coerce::<String>().unwrap_err().is_type());
    /// ```
    pub fn coerce<T: JsonType>(&self) -> Result<T> {
        T::extract(self).ok_or_else(|| Error::type_mismatch(T::EXPECTED, self.kind()))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a copy of it. Otherwise returns `None`.
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.get()),
            _ => None,
        }
    }

    /// If the value is an array, returns an aliasing handle to it.
    #[must_use]
    pub fn as_array(&self) -> Option<Array> {
        match self {
            Value::Array(arr) => Some(arr.clone()),
            _ => None,
        }
    }

    /// If the value is an object, returns an aliasing handle to it.
    #[must_use]
    pub fn as_object(&self) -> Option<Object> {
        match self {
            Value::Object(obj) => Some(obj.clone()),
            _ => None,
        }
    }

    /// Returns `true` if `key` names an existing member (objects) or an
    /// in-bounds index (arrays). `false` for every other combination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Value;
    ///
    /// let value: Value = "[1,2,3]".parse().unwrap();
    /// assert!(value.has(2));
    /// assert!(!value.has(5));
    /// assert!(!value.has("length"));
    /// assert!(!Value::Null.has("anything"));
    /// ```
    #[must_use]
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.contains(&key.into())
    }

    pub(crate) fn contains(&self, key: &Key) -> bool {
        match (self, key) {
            (Value::Object(obj), Key::Name(name)) => obj.contains_key(name),
            (Value::Array(arr), Key::Index(index)) => *index < arr.len(),
            _ => false,
        }
    }

    /// Returns an alias of the child at `key` without creating anything.
    #[must_use]
    pub fn child(&self, key: impl Into<Key>) -> Option<Value> {
        self.child_at(&key.into())
    }

    pub(crate) fn child_at(&self, key: &Key) -> Option<Value> {
        match (self, key) {
            (Value::Object(obj), Key::Name(name)) => obj.get(name),
            (Value::Array(arr), Key::Index(index)) => arr.get(*index),
            _ => None,
        }
    }

    /// Mutable access to the child at `key`.
    ///
    /// Objects get a `null` member inserted when `key` is absent. Arrays are
    /// indexed directly; check [`Value::has`] first.
    ///
    /// The returned guard holds a mutable borrow of this container; reading
    /// the same container through another alias while it is alive panics.
    ///
    /// # Errors
    ///
    /// [`Error::Access`] for an index past the end of an array,
    /// [`Error::Type`] when the value is not the container `key` indexes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::{json, Value};
    ///
    /// let value = json!({ "a": 1 });
    /// *value.lookup("b").unwrap() = Value::from(2);
    /// assert!(value.lookup("c").unwrap().is_null());
    /// assert_eq!(value.as_object().unwrap().len(), 3);
    /// ```
    pub fn lookup(&self, key: impl Into<Key>) -> Result<RefMut<'_, Value>> {
        match (self, key.into()) {
            (Value::Object(obj), Key::Name(name)) => Ok(RefMut::map(obj.borrow_mut(), |map| {
                map.get_or_insert_null(&name)
            })),
            (Value::Array(arr), Key::Index(index)) => {
                if index >= arr.len() {
                    return Err(Error::access(Key::Index(index)));
                }
                Ok(RefMut::map(arr.borrow_mut(), |items| &mut items[index]))
            }
            (_, key) => Err(Error::type_mismatch(
                key.container_kind().name(),
                self.kind(),
            )),
        }
    }

    /// Returns `true` if both values share one string, array or object.
    #[must_use]
    pub fn is_alias_of(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Structural deep comparison.
    ///
    /// Tags must match. Scalars compare by value, arrays element-wise with
    /// equal length, objects as sets: same number of members and every
    /// member of `self` present in `other` with an equivalent value.
    #[must_use]
    pub fn equivalent(&self, other: &Value) -> bool {
        if self.is_alias_of(other) {
            return true;
        }
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => *a.borrow() == *b.borrow(),
            (Value::Array(a), Value::Array(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equivalent(y))
            }
            (Value::Object(a), Value::Object(b)) => *a.borrow() == *b.borrow(),
            _ => false,
        }
    }

    /// Copies the whole tree into freshly allocated payloads.
    ///
    /// The result shares nothing with `self`.
    #[must_use]
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Number(n) => Value::Number(*n),
            Value::String(s) => Value::String(s.deep_clone()),
            Value::Array(arr) => Value::Array(arr.deep_clone()),
            Value::Object(obj) => Value::Object(obj.deep_clone()),
        }
    }

    /// Parses `text` into `self`.
    ///
    /// Returns `false` on malformed input, in which case `self` is left
    /// exactly as it was. Use [`crate::from_str`] to get the syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Value;
    ///
    /// let mut value = Value::from("keep me");
    /// assert!(!value.parse("[1:2]"));
    /// assert_eq!(value.as_string().as_deref(), Some("keep me"));
    ///
    /// assert!(value.parse("[1,2]"));
    /// assert!(value.is_array());
    /// ```
    pub fn parse(&mut self, text: &str) -> bool {
        match Parser::new(text).parse_document() {
            Ok(value) => {
                *self = value;
                true
            }
            Err(err) => {
                log::debug!("rejected JSON text: {err}");
                false
            }
        }
    }

    /// Returns `true` if `self` accepts `key` without being replaced.
    pub(crate) fn accepts(&self, key: &Key) -> bool {
        matches!(
            (self, key),
            (Value::Object(_), Key::Name(_)) | (Value::Array(_), Key::Index(_))
        )
    }

    /// Address of the array or object payload, used for cycle detection.
    pub(crate) fn container_addr(&self) -> Option<*const ()> {
        match self {
            Value::Array(arr) => Some(arr.addr()),
            Value::Object(obj) => Some(obj.addr()),
            _ => None,
        }
    }

    /// Collects the payload addresses of every container in this tree.
    pub(crate) fn collect_containers(&self, seen: &mut HashSet<*const ()>) {
        let Some(addr) = self.container_addr() else {
            return;
        };
        if !seen.insert(addr) {
            return;
        }
        match self {
            Value::Array(arr) => arr.borrow().iter().for_each(|v| v.collect_containers(seen)),
            Value::Object(obj) => obj.borrow().values().for_each(|v| v.collect_containers(seen)),
            _ => {}
        }
    }

    pub(crate) fn reaches(&self, target: *const ()) -> bool {
        let mut seen = HashSet::new();
        self.collect_containers(&mut seen);
        seen.contains(&target)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl PartialEq for JsonString {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        Value::Array(self.clone()).equivalent(&Value::Array(other.clone()))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl fmt::Debug for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(text) => fmt::Debug::fmt(&*text, f),
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(items) => f.debug_list().entries(items.iter()).finish(),
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(map) => f.debug_map().entries(map.iter()).finish(),
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}

/// Compact JSON text, as written by [`crate::to_string`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = TextSerializer::new(WriteOptions::default());
        serializer.write_value(self);
        f.write_str(&serializer.into_inner())
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Parser::new(s).parse_document()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(&s.borrow()),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let items = arr.borrow();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let members = obj.borrow();
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec: Vec<Value> = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::from(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::from(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(JsonString::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(JsonString::new(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(JsonString::new(value.as_str()))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(Array::from(
            value.into_iter().map(Into::into).collect::<Vec<Value>>(),
        ))
    }
}

impl From<JsonMap> for Value {
    fn from(value: JsonMap) -> Self {
        Value::Object(Object::from(value))
    }
}

impl From<JsonString> for Value {
    fn from(value: JsonString) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(items)))
    }
}

impl From<JsonMap> for Object {
    fn from(map: JsonMap) -> Self {
        Object(Rc::new(RefCell::new(map)))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(Array::from(iter.into_iter().collect::<Vec<_>>()))
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(Object::from(iter.into_iter().collect::<JsonMap>()))
    }
}
