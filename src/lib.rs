//! # serial_value
//!
//! A dynamically-typed value with two interchangeable wire formats.
//!
//! ## What is it?
//!
//! [`Value`] is a tagged union over null, booleans, characters, unsigned and
//! signed integers, floats, opaque pointer words, strings, arrays and
//! string-keyed objects. Values can be built by hand, converted from any
//! `Serialize` type, and encoded with either codec:
//!
//! - [`Json`]: a JSON dialect that keeps every variant distinguishable
//! - [`Binary`]: a compact tag + length-prefixed encoding
//!
//! Both implement [`Format`], so code written against the trait works with
//! either.
//!
//! ## Key Features
//!
//! - **Best-effort coercion**: `get_*` accessors convert between variants
//!   (`"42"` reads as 42, `'Y'` reads as `true`)
//! - **Serde compatible**: [`to_value`] and [`from_value`] bridge to any
//!   `#[derive(Serialize, Deserialize)]` type, with coercion on the way in
//! - **Bounded parsing**: both readers enforce a nesting depth limit and
//!   report byte offsets on malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serial_value::{from_binary, from_json_str, from_value, to_binary, to_json_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_json_string(&user).unwrap();
//! assert_eq!(text, r#"{"id":123,"name":"Alice","active":true}"#);
//! let back: User = from_value(from_json_str(&text).unwrap()).unwrap();
//! assert_eq!(back, user);
//!
//! let bytes = to_binary(&user).unwrap();
//! let back: User = from_value(from_binary(&bytes).unwrap()).unwrap();
//! assert_eq!(back, user);
//! ```
//!
//! ### Dynamic Values with the value! Macro
//!
//! ```rust
//! use serial_value::{value, Kind};
//!
//! let mut data = value!({
//!     "name": "Alice",
//!     "age": "30",
//!     "tags": ["rust", "serde"]
//! });
//!
//! assert_eq!(data.member("age").unwrap().get_unsigned().unwrap(), 30);
//! *data.member_mut("age").unwrap().get_unsigned_mut().unwrap() += 1;
//! assert_eq!(data.member("age").unwrap().kind(), Kind::Unsigned);
//! ```
//!
//! ## Logging
//!
//! The codecs emit `trace!` records through the [`log`] facade. The library
//! never installs a logger.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`dynamic_values.rs`** - Building, inspecting and coercing values
//! - **`codecs.rs`** - Writing and reading both formats
//!
//! Run either with: `cargo run --example <name>`

pub mod binary;
pub mod convert;
pub mod de;
pub mod error;
pub mod format;
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use binary::Binary;
pub use de::{from_value, ValueDeserializer};
pub use error::{Error, ErrorKind, Result};
pub use format::Format;
pub use json::Json;
pub use map::Map;
pub use options::{BinaryOptions, JsonOptions};
pub use ser::{to_value, ValueSerializer};
pub use value::{Kind, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to compact JSON-dialect text.
///
/// # Examples
///
/// ```rust
/// use serial_value::to_json_string;
///
/// assert_eq!(to_json_string(&vec![1u8, 2]).unwrap(), "[1,2]");
/// assert_eq!(to_json_string(&-1i32).unwrap(), "-1");
/// assert_eq!(to_json_string(&1i32).unwrap(), "+1");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`] or nests
/// deeper than the default depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Json::new().render(&to_value(value)?)
}

/// Serialize any `T: Serialize` to indented JSON-dialect text.
///
/// Each array element and object member goes on its own line, indented
/// with one tab per level.
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`] or nests
/// deeper than the default depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Json::fancy().render(&to_value(value)?)
}

/// Parse JSON-dialect text holding exactly one value.
///
/// # Examples
///
/// ```rust
/// use serial_value::{from_json_str, Value};
///
/// assert_eq!(from_json_str("[1, -1]").unwrap(), Value::from(vec![
///     Value::Unsigned(1),
///     Value::Signed(-1),
/// ]));
/// ```
///
/// # Errors
///
/// Returns an error if the text is malformed, nests too deeply, or has
/// anything but whitespace after the value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_str(s: &str) -> Result<Value> {
    Json::new().parse_str(s)
}

/// Serialize any `T: Serialize` to the binary format.
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`],
/// exceeds the binary framing limits, or nests deeper than the default depth
/// limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_binary<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    Binary::new().to_vec(&to_value(value)?)
}

/// Decode a buffer holding exactly one binary-encoded value.
///
/// # Errors
///
/// Returns an error if the bytes are truncated, corrupt, nest too deeply, or
/// continue past the value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_binary(bytes: &[u8]) -> Result<Value> {
    Binary::new().from_slice(bytes)
}

/// Serialize any `T: Serialize` to a writer using `format`.
///
/// # Examples
///
/// ```rust
/// use serial_value::{write, Json};
///
/// let mut buffer = Vec::new();
/// write(&Json::fancy(), &[true, false], &mut buffer).unwrap();
/// assert_eq!(buffer, b"[\n\ttrue,\n\tfalse\n]");
/// ```
///
/// # Errors
///
/// Returns an error if conversion, encoding, or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write<F, T, W>(format: &F, value: &T, writer: W) -> Result<()>
where
    F: Format,
    T: ?Sized + Serialize,
    W: io::Write,
{
    format.write_as(value, writer)
}

/// Deserialize an instance of type `T` from a reader using `format`.
///
/// # Examples
///
/// ```rust
/// use serial_value::{read, Json};
/// use std::io::Cursor;
///
/// let pair: (u8, bool) = read(&Json::new(), Cursor::new(r#"["7", "on"]"#)).unwrap();
/// assert_eq!(pair, (7, true));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is malformed, or the value
/// cannot be converted to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read<T, F, R>(format: &F, reader: R) -> Result<T>
where
    T: DeserializeOwned,
    F: Format,
    R: io::Read,
{
    format.read_as(reader)
}
