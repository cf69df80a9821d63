//! Error types for value access, coercion and JSON parsing.
//!
//! ## Error Categories
//!
//! - **Access errors**: a read path named a key or index that is not there
//! - **Type errors**: a value was coerced to a type its tag does not hold
//! - **Syntax errors**: JSON text could not be parsed, with the furthest
//!   position the parser reached
//! - **I/O errors**: reading or writing a stream failed
//!
//! Access and type errors are deliberately separate variants so callers can
//! tell "nothing there" apart from "something else there".
//!
//! ## Examples
//!
//! ```rust
//! use dynjson::{json, Error};
//!
//! let value = json!({ "name": "Alice" });
//!
//! let missing = value.at("age").coerce::<f64>();
//! assert!(matches!(missing, Err(Error::Access { .. })));
//!
//! let wrong = value.at("name").coerce::<f64>();
//! assert!(matches!(wrong, Err(Error::Type { .. })));
//! ```

use crate::coerce::Kind;
use std::fmt;
use thiserror::Error;

/// Every failure this crate reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A read path could not be resolved.
    #[error("no value at {path}")]
    Access { path: String },

    /// A value's tag did not match the requested type.
    #[error("type error: expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: Kind,
    },

    /// Storing the value would make a container contain itself.
    #[error("cannot store a container inside itself at {path}")]
    Cycle { path: String },

    /// JSON text could not be parsed.
    #[error("syntax error at line {line}, column {column} (byte {offset}): expected {expected}")]
    Syntax {
        offset: usize,
        line: usize,
        column: usize,
        expected: String,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, typically raised by serde conversions
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an access error for the given (already formatted) path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Error;
    ///
    /// let err = Error::access("[\"first\"][2]");
    /// assert!(err.to_string().contains("[\"first\"][2]"));
    /// ```
    pub fn access(path: impl fmt::Display) -> Self {
        Error::Access {
            path: path.to_string(),
        }
    }

    /// Creates a type error for a coercion to `expected` that found `found`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::{Error, Kind};
    ///
    /// let err = Error::type_mismatch("number", Kind::String);
    /// assert_eq!(err.to_string(), "type error: expected number, found string");
    /// ```
    pub fn type_mismatch(expected: &'static str, found: Kind) -> Self {
        Error::Type { expected, found }
    }

    /// Creates a cycle error for an assignment at `path`.
    pub fn cycle(path: impl fmt::Display) -> Self {
        Error::Cycle {
            path: path.to_string(),
        }
    }

    /// Creates a syntax error at byte `offset` of `input`.
    ///
    /// Line and column are 1-based and computed from the input.
    pub fn syntax(input: &str, offset: usize, expected: impl Into<String>) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input.as_bytes()[..offset];
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let column = input
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count())
            + 1;
        Error::Syntax {
            offset,
            line,
            column,
            expected: expected.into(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for [`Error::Access`].
    #[must_use]
    pub fn is_access(&self) -> bool {
        matches!(self, Error::Access { .. })
    }

    /// Returns `true` for [`Error::Type`].
    #[must_use]
    pub fn is_type(&self) -> bool {
        matches!(self, Error::Type { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
