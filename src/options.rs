//! Configuration options for JSON output.
//!
//! [`WriteOptions`] selects between compact output (the default, used by
//! [`to_string`](crate::to_string) and `Display`) and pretty output with one
//! element per line.
//!
//! ## Examples
//!
//! ```rust
//! use dynjson::{json, to_string_with_options, WriteOptions};
//!
//! let value = json!({ "a": [1, 2] });
//!
//! let compact = to_string_with_options(&value, WriteOptions::compact()).unwrap();
//! assert_eq!(compact, r#"{"a":[1,2]}"#);
//!
//! let pretty = to_string_with_options(&value, WriteOptions::pretty().with_indent(4)).unwrap();
//! assert_eq!(pretty, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
//! ```

/// Configuration options for JSON serialization.
///
/// # Examples
///
/// ```rust
/// use dynjson::WriteOptions;
///
/// // Default compact options
/// let options = WriteOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 4-space indentation
/// let options = WriteOptions::pretty().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level. Only affects pretty output.
    pub indent: usize,
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl WriteOptions {
    /// Creates default options (compact format, 2-space indent when pretty).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`WriteOptions::new`].
    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
