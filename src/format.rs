//! The interface shared by every codec.
//!
//! A [`Format`] turns a [`Value`] into bytes and back. Implementors provide
//! [`Format::write`] and [`Format::read`]; buffer conversions and the typed
//! helpers that route through [`to_value`](crate::to_value) and
//! [`from_value`](crate::from_value) come for free.
//!
//! ## Examples
//!
//! ```rust
//! use serial_value::{Binary, Format, Json, Value};
//!
//! fn round_trip<F: Format>(format: &F, value: &Value) -> Value {
//!     let bytes = format.to_vec(value).unwrap();
//!     format.from_slice(&bytes).unwrap()
//! }
//!
//! let value = Value::from(vec![Value::from("a"), Value::Signed(-1)]);
//! assert_eq!(round_trip(&Json::new(), &value), value);
//! assert_eq!(round_trip(&Binary::new(), &value), value);
//! ```

use crate::{Result, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// A codec between [`Value`] trees and a byte representation.
pub trait Format {
    /// Encodes `value` into `writer`.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be represented by the format, nests deeper
    /// than the codec's depth limit (the same limit its reader enforces), or
    /// the writer fails. Nothing reaches the writer on an encoding failure.
    fn write<W: io::Write>(&self, value: &Value, writer: W) -> Result<()>;

    /// Decodes exactly one value from `reader`, which must hold nothing else.
    ///
    /// # Errors
    ///
    /// Fails on malformed input, trailing data, or a reader failure.
    fn read<R: io::Read>(&self, reader: R) -> Result<Value>;

    /// Encodes `value` into a freshly allocated buffer.
    fn to_vec(&self, value: &Value) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(value, &mut buffer)?;
        Ok(buffer)
    }

    fn from_slice(&self, bytes: &[u8]) -> Result<Value> {
        self.read(bytes)
    }

    /// Converts any serializable type to a [`Value`] and encodes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Format, Json};
    ///
    /// let mut out = Vec::new();
    /// Json::new().write_as(&(1u8, "two"), &mut out).unwrap();
    /// assert_eq!(out, br#"[1,"two"]"#);
    /// ```
    fn write_as<T, W>(&self, value: &T, writer: W) -> Result<()>
    where
        T: ?Sized + Serialize,
        W: io::Write,
    {
        let value = crate::to_value(value)?;
        self.write(&value, writer)
    }

    /// Decodes a [`Value`] and converts it to `T` with coercion.
    fn read_as<T, R>(&self, reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: io::Read,
    {
        let value = self.read(reader)?;
        crate::from_value(value)
    }
}
