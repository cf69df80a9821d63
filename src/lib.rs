//! # dynjson
//!
//! A dynamically-typed JSON value with shared containers, deep path access
//! and a backtracking text parser.
//!
//! ## Key Features
//!
//! - **One value type**: [`Value`] holds null, booleans, numbers (`f64`),
//!   strings, arrays or objects
//! - **Shared containers**: cloning a `Value` aliases its string, array or
//!   object; [`Value::deep_clone`] makes an independent copy
//! - **Path access**: [`Value::at`] reads without side effects,
//!   [`Value::at_mut`] creates missing containers on the way to a write
//! - **Typed checks**: [`Value::is`] never fails, [`Value::coerce`] fails with
//!   a type error that names both sides
//! - **Serde Compatible**: [`to_value`] / [`from_value`] bridge to any type
//!   implementing `Serialize` / `Deserialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use dynjson::Value;
//!
//! let mut value: Value = r#"{"name": "Alice", "langs": ["en"]}"#.parse().unwrap();
//!
//! // Reads never create anything.
//! assert_eq!(value.at("age").default_to(0.0), 0.0);
//! assert!(!value.has("age"));
//!
//! // Writes create what they need.
//! value.at_mut("address").at("city").set("Paris").unwrap();
//! value.at_mut("langs").at(1).set("fr").unwrap();
//!
//! assert_eq!(
//!     value.to_string(),
//!     r#"{"name":"Alice","langs":["en","fr"],"address":{"city":"Paris"}}"#
//! );
//! ```
//!
//! ### Aliasing
//!
//! ```rust
//! use dynjson::json;
//!
//! let original = json!({ "n": 1 });
//! let mut alias = original.clone();
//! let mut copy = original.deep_clone();
//!
//! alias.at_mut("n").set(2).unwrap();
//! copy.at_mut("n").set(3).unwrap();
//!
//! assert_eq!(original.at("n").coerce::<f64>().unwrap(), 2.0);
//! ```
//!
//! ### Typed Data
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use dynjson::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, r#"{"id":123,"name":"Alice","active":true}"#);
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ## Text Format
//!
//! Parsing and writing follow JSON syntax with a few deliberate deviations:
//!
//! - string escapes are neither decoded on input nor produced on output
//! - a trailing comma before `]` or `}` is accepted
//! - numbers may carry a leading `+`, leading zeros, or a bare `.`
//!
//! ## Threading
//!
//! Containers are `Rc<RefCell<_>>` handles, so `Value` is neither `Send` nor
//! `Sync`. Every alias of a container lives on the thread that created it.

#[macro_use]
mod macros;

pub mod coerce;
pub mod de;
pub mod error;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod value;

pub use coerce::{JsonType, Kind};
pub use de::{from_value, Parser, ValueDeserializer};
pub use error::{Error, Result};
pub use map::JsonMap;
pub use options::WriteOptions;
pub use path::{Key, Path, Query, Setter};
pub use ser::{to_value, Serializer, ValueSerializer};
pub use value::{Array, JsonString, Object, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use dynjson::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WriteOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WriteOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: WriteOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let mut serializer = Serializer::new(options);
    serializer.write_value(&value);
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to a writer as compact JSON.
///
/// # Examples
///
/// ```rust
/// use dynjson::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2, 3]).unwrap();
/// assert_eq!(buffer, b"[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, WriteOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: WriteOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from JSON text.
///
/// The whole input must be one value, optionally surrounded by whitespace.
///
/// # Examples
///
/// ```rust
/// use dynjson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// [`Error::Syntax`] with line and column information if the text is not
/// valid, [`Error::Custom`] if it does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = Parser::new(s).parse_document()?;
    from_value(value)
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// The stream is read to the end before parsing starts.
///
/// # Examples
///
/// ```rust
/// use dynjson::from_reader;
/// use std::io::Cursor;
///
/// let numbers: Vec<u8> = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// UTF-8 JSON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
