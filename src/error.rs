//! Error types for value access, coercion and the codecs.
//!
//! Every fallible operation in this crate returns [`Result`], and every
//! failure falls into one of the categories reported by [`Error::kind`]:
//!
//! - **Invalid access**: indexing the wrong variant, an out-of-range index or a missing key
//! - **Not convertible**: a coercion with no defined mapping, or text that does not parse
//! - **Malformed input**: bad syntax, unknown binary tags, truncated or over-deep input
//! - **Unencodable**: a value the binary framing cannot represent
//! - **I/O**: failures of the underlying reader or writer
//!
//! ## Examples
//!
//! ```rust
//! use serial_value::{from_json_str, ErrorKind};
//!
//! let err = from_json_str(r#"{"a":}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedInput);
//! assert!(err.to_string().contains("'}'"));
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by values and codecs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Wrong-variant indexing, out-of-range index or missing key
    #[error("Invalid access: {0}")]
    InvalidAccess(String),

    /// No coercion path exists between the two variants, or the payload
    /// could not be parsed as the target
    #[error("Value of kind {from} is not convertible to {to}")]
    NotConvertible { from: Kind, to: Kind },

    /// Text syntax error
    #[error("Syntax error at line {line}, column {col} (offset {offset}): {msg}")]
    Syntax {
        offset: usize,
        line: usize,
        col: usize,
        msg: String,
    },

    /// A binary tag byte outside the known set
    #[error("Corrupt stream: unknown tag {tag:#04x} at offset {offset}")]
    UnknownTag { offset: usize, tag: u8 },

    /// Input ended in the middle of a value
    #[error("Truncated stream at offset {offset}: {needed} more byte(s) needed")]
    Truncated { offset: usize, needed: usize },

    /// String or key bytes that are not UTF-8
    #[error("Invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Input left over after the top-level value
    #[error("Trailing data at offset {offset}")]
    TrailingData { offset: usize },

    /// Nesting deeper than the configured limit
    #[error("Nesting depth limit of {limit} exceeded at offset {offset}")]
    DepthLimitExceeded { offset: usize, limit: usize },

    /// A value the wire format cannot represent
    #[error("Unencodable value: {0}")]
    Unencodable(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// The failure categories an [`Error`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAccess,
    NotConvertible,
    MalformedInput,
    Unencodable,
    Io,
    Custom,
}

impl Error {
    /// Creates an invalid access error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Error;
    ///
    /// let err = Error::invalid_access("no member named `id`");
    /// assert!(err.to_string().contains("`id`"));
    /// ```
    pub fn invalid_access<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidAccess(msg.to_string())
    }

    /// Creates a coercion failure from `from` to `to`.
    pub fn not_convertible(from: Kind, to: Kind) -> Self {
        Error::NotConvertible { from, to }
    }

    /// Creates a syntax error at a byte offset with its line and column.
    pub fn syntax(offset: usize, line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            offset,
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unknown binary tag error.
    pub fn unknown_tag(offset: usize, tag: u8) -> Self {
        Error::UnknownTag { offset, tag }
    }

    /// Creates a truncated stream error.
    pub fn truncated(offset: usize, needed: usize) -> Self {
        Error::Truncated { offset, needed }
    }

    /// Creates an error for text that is not valid UTF-8 starting at `offset`.
    pub fn invalid_utf8(offset: usize) -> Self {
        Error::InvalidUtf8 { offset }
    }

    /// Creates an error for input continuing past a complete value.
    pub fn trailing_data(offset: usize) -> Self {
        Error::TrailingData { offset }
    }

    /// Creates an error for containers nested deeper than `limit`.
    pub fn depth_limit(offset: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { offset, limit }
    }

    /// Creates an error for values the binary framing cannot hold.
    pub fn unencodable<T: fmt::Display>(msg: T) -> Self {
        Error::Unencodable(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader or writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the category this error belongs to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{ErrorKind, Value};
    ///
    /// let err = Value::from("abc").get_unsigned().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NotConvertible);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAccess(_) => ErrorKind::InvalidAccess,
            Error::NotConvertible { .. } => ErrorKind::NotConvertible,
            Error::Syntax { .. }
            | Error::UnknownTag { .. }
            | Error::Truncated { .. }
            | Error::InvalidUtf8 { .. }
            | Error::TrailingData { .. }
            | Error::DepthLimitExceeded { .. } => ErrorKind::MalformedInput,
            Error::Unencodable(_) => ErrorKind::Unencodable,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns `true` for codec-level syntax and framing violations.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
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
