//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum, a closed tagged union over every
//! shape the codecs can carry, and [`Kind`], the name of each variant.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serial_value::{Kind, Value};
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let count = Value::from(42u32);
//! let delta = Value::from(-7i16);
//! let text = Value::from("hello");
//! let empty = Value::new(Kind::Array);
//!
//! assert_eq!(count, Value::Unsigned(42));
//! assert_eq!(delta, Value::Signed(-7));
//! assert_eq!(empty, Value::Array(vec![]));
//! ```
//!
//! ### Populating In Place
//!
//! ```rust
//! use serial_value::Value;
//!
//! let mut value = Value::Null;
//! let items = value.set_array();
//! items.push(Value::from(1u8));
//! items.push(Value::from('x'));
//!
//! assert_eq!(value.len(), 2);
//! assert_eq!(value.at(1).unwrap(), &Value::Char('x'));
//! ```
//!
//! ### Coercing
//!
//! Accessors named `get_*` convert between variants on a best-effort basis;
//! see the [`convert`](crate::convert) module for the rules.
//!
//! ```rust
//! use serial_value::Value;
//!
//! assert_eq!(Value::from("42").get_unsigned().unwrap(), 42);
//! assert!(Value::Char('Y').get_bool().unwrap());
//! ```

use crate::{Error, Map, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifies the active variant of a [`Value`].
///
/// The discriminants are the tag bytes of the binary format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    Null = 0,
    Char = 1,
    Bool = 2,
    Unsigned = 3,
    Signed = 4,
    Float = 5,
    Pointer = 6,
    String = 7,
    Array = 8,
    Object = 9,
}

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Kind; 10] = [
        Kind::Null,
        Kind::Char,
        Kind::Bool,
        Kind::Unsigned,
        Kind::Signed,
        Kind::Float,
        Kind::Pointer,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ];

    /// Returns the binary tag byte for this kind.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up the kind for a binary tag byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Kind;
    ///
    /// assert_eq!(Kind::from_tag(7), Some(Kind::String));
    /// assert_eq!(Kind::from_tag(10), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<Kind> {
        Kind::ALL.get(usize::from(tag)).copied()
    }

    /// Returns the lowercase name used in error messages and logs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Kind;
    ///
    /// assert_eq!(Kind::Unsigned.name(), "unsigned");
    /// assert_eq!(Kind::Object.to_string(), "object");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Char => "char",
            Kind::Bool => "bool",
            Kind::Unsigned => "unsigned",
            Kind::Signed => "signed",
            Kind::Float => "float",
            Kind::Pointer => "pointer",
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

/// A dynamically-typed value.
///
/// Exactly one variant is live at a time. Owned payloads (strings, arrays,
/// objects) are dropped when the variant changes, `clone` is a deep copy,
/// and [`Value::take`] moves the payload out leaving `Null` behind.
///
/// Equality is structural and never coerces: `Unsigned(1)` and `Signed(1)`
/// are different values.
///
/// # Examples
///
/// ```rust
/// use serial_value::Value;
///
/// let mut original = Value::from(vec![Value::from(1u8), Value::from(2u8)]);
/// let copy = original.clone();
/// let moved = original.take();
///
/// assert!(original.is_null());
/// assert_eq!(copy, moved);
/// assert_ne!(Value::Unsigned(1), Value::Signed(1));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    /// An opaque address-sized word. It is carried through the codecs but
    /// never dereferenced.
    Pointer(usize),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Creates a value of the given kind holding that kind's empty payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Kind, Map, Value};
    ///
    /// assert_eq!(Value::new(Kind::String), Value::String(String::new()));
    /// assert_eq!(Value::new(Kind::Object), Value::Object(Map::new()));
    /// assert_eq!(Value::new(Kind::Unsigned), Value::Unsigned(0));
    /// ```
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Null => Value::Null,
            Kind::Char => Value::Char('\0'),
            Kind::Bool => Value::Bool(false),
            Kind::Unsigned => Value::Unsigned(0),
            Kind::Signed => Value::Signed(0),
            Kind::Float => Value::Float(0.0),
            Kind::Pointer => Value::Pointer(0),
            Kind::String => Value::String(String::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Object => Value::Object(Map::new()),
        }
    }

    /// Wraps an opaque pointer-sized word.
    #[inline]
    #[must_use]
    pub const fn pointer(address: usize) -> Self {
        Value::Pointer(address)
    }

    /// Returns the active variant.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Char(_) => Kind::Char,
            Value::Unsigned(_) => Kind::Unsigned,
            Value::Signed(_) => Kind::Signed,
            Value::Float(_) => Kind::Float,
            Value::Pointer(_) => Kind::Pointer,
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

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// Unlike [`Value::get_string`] this never coerces.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it. Otherwise
    /// returns `None`; unlike [`Value::get_array_mut`] nothing is converted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Kind, Value};
    ///
    /// let mut value = Value::new(Kind::Array);
    /// value.as_array_mut().unwrap().push(Value::Null);
    /// assert_eq!(value.len(), 1);
    ///
    /// let mut object = Value::new(Kind::Object);
    /// assert!(object.as_array_mut().is_none());
    /// assert_eq!(object.kind(), Kind::Object);
    /// ```
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    /// Otherwise returns `None` without converting.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Moves the value out, leaving `Null` in its place.
    #[inline]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Returns the number of elements of an array or members of an object,
    /// and 0 for every other variant.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the array element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with an invalid access error if the value is not an array or
    /// the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{ErrorKind, Value};
    ///
    /// let value = Value::from(vec![Value::from(true)]);
    /// assert_eq!(value.at(0).unwrap(), &Value::Bool(true));
    /// assert_eq!(value.at(1).unwrap_err().kind(), ErrorKind::InvalidAccess);
    /// assert_eq!(Value::from(3u8).at(0).unwrap_err().kind(), ErrorKind::InvalidAccess);
    /// ```
    pub fn at(&self, index: usize) -> Result<&Value> {
        match self {
            Value::Array(arr) => arr.get(index).ok_or_else(|| out_of_bounds(index, arr.len())),
            other => Err(wrong_variant(other.kind(), "position")),
        }
    }

    /// Mutable counterpart of [`Value::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        match self {
            Value::Array(arr) => {
                let len = arr.len();
                arr.get_mut(index).ok_or_else(|| out_of_bounds(index, len))
            }
            other => Err(wrong_variant(other.kind(), "position")),
        }
    }

    /// Returns the object member named `key`.
    ///
    /// # Errors
    ///
    /// Fails with an invalid access error if the value is not an object or
    /// has no such member.
    pub fn member(&self, key: &str) -> Result<&Value> {
        match self {
            Value::Object(obj) => obj.get(key).ok_or_else(|| missing_member(key)),
            other => Err(wrong_variant(other.kind(), "key")),
        }
    }

    /// Mutable counterpart of [`Value::member`].
    pub fn member_mut(&mut self, key: &str) -> Result<&mut Value> {
        match self {
            Value::Object(obj) => obj.get_mut(key).ok_or_else(|| missing_member(key)),
            other => Err(wrong_variant(other.kind(), "key")),
        }
    }

    /// Turns the value into `Null`, dropping any owned payload.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Turns the value into `Bool(false)` and returns the payload.
    pub fn set_bool(&mut self) -> &mut bool {
        *self = Value::Bool(false);
        match self {
            Value::Bool(b) => b,
            _ => unreachable!(),
        }
    }

    /// Turns the value into `Char('\0')` and returns the payload.
    pub fn set_char(&mut self) -> &mut char {
        *self = Value::Char('\0');
        match self {
            Value::Char(c) => c,
            _ => unreachable!(),
        }
    }

    /// Turns the value into `Unsigned(0)` and returns the payload.
    pub fn set_unsigned(&mut self) -> &mut u64 {
        *self = Value::Unsigned(0);
        match self {
            Value::Unsigned(n) => n,
            _ => unreachable!(),
        }
    }

    /// Turns the value into `Signed(0)` and returns the payload.
    pub fn set_signed(&mut self) -> &mut i64 {
        *self = Value::Signed(0);
        match self {
            Value::Signed(n) => n,
            _ => unreachable!(),
        }
    }

    /// Turns the value into `Float(0.0)` and returns the payload.
    pub fn set_float(&mut self) -> &mut f64 {
        *self = Value::Float(0.0);
        match self {
            Value::Float(f) => f,
            _ => unreachable!(),
        }
    }

    /// Turns the value into a null `Pointer` and returns the payload.
    pub fn set_pointer(&mut self) -> &mut usize {
        *self = Value::Pointer(0);
        match self {
            Value::Pointer(p) => p,
            _ => unreachable!(),
        }
    }

    /// Turns the value into an empty string and returns it.
    ///
    /// An existing string is cleared in place and keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Value;
    ///
    /// let mut value = Value::from(1.5);
    /// value.set_string().push_str("abc");
    /// assert_eq!(value, Value::from("abc"));
    ///
    /// value.set_string();
    /// assert_eq!(value, Value::from(""));
    /// ```
    pub fn set_string(&mut self) -> &mut String {
        match self {
            Value::String(s) => s.clear(),
            _ => *self = Value::String(String::new()),
        }
        match self {
            Value::String(s) => s,
            _ => unreachable!(),
        }
    }

    /// Turns the value into an empty array and returns it.
    ///
    /// An existing array is cleared in place and keeps its capacity.
    pub fn set_array(&mut self) -> &mut Vec<Value> {
        match self {
            Value::Array(arr) => arr.clear(),
            _ => *self = Value::Array(Vec::new()),
        }
        match self {
            Value::Array(arr) => arr,
            _ => unreachable!(),
        }
    }

    /// Turns the value into an empty object and returns it.
    ///
    /// An existing object is cleared in place and keeps its capacity.
    pub fn set_object(&mut self) -> &mut Map {
        match self {
            Value::Object(obj) => obj.clear(),
            _ => *self = Value::Object(Map::new()),
        }
        match self {
            Value::Object(obj) => obj,
            _ => unreachable!(),
        }
    }
}

fn out_of_bounds(index: usize, len: usize) -> Error {
    Error::invalid_access(format!(
        "index {} out of bounds for array of length {}",
        index, len
    ))
}

fn missing_member(key: &str) -> Error {
    Error::invalid_access(format!("no member named `{}`", key))
}

fn wrong_variant(kind: Kind, by: &str) -> Error {
    Error::invalid_access(format!("cannot index a value of kind {} by {}", kind, by))
}

impl fmt::Display for Value {
    /// Renders the value as compact JSON-dialect text, at any depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::json::render(self, false, None).map_err(|_| fmt::Error)?;
        f.write_str(&text)
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
            Value::Char(c) => serializer.serialize_char(*c),
            Value::Unsigned(n) => serializer.serialize_u64(*n),
            Value::Signed(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Pointer(p) => serializer.serialize_u64(*p as u64),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
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
                formatter.write_str("any serial value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Signed(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Unsigned(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_char<E>(self, value: char) -> std::result::Result<Value, E> {
                Ok(Value::Char(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
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
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<Kind> for Value {
    fn from(kind: Kind) -> Self {
        Value::new(kind)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Unsigned(value as u64)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Signed(value as i64)
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from('c'), Value::Char('c'));
        assert_eq!(Value::from(42u8), Value::Unsigned(42));
        assert_eq!(Value::from(42u64), Value::Unsigned(42));
        assert_eq!(Value::from(-42i8), Value::Signed(-42));
        assert_eq!(Value::from(42i32), Value::Signed(42));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<u8>), Value::Null);
        assert_eq!(Value::from(Some(3u8)), Value::Unsigned(3));
        assert_eq!(Value::pointer(0xdead), Value::Pointer(0xdead));
    }

    #[test]
    fn test_new_defaults_every_kind() {
        for kind in Kind::ALL {
            assert_eq!(Value::new(kind).kind(), kind);
        }
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(Kind::from_tag(0xff), None);
    }

    #[test]
    fn test_set_array_twice_is_empty() {
        let mut value = Value::from(vec![Value::Null, Value::Null]);
        assert!(value.set_array().is_empty());
        value.set_array().push(Value::from(1u8));
        assert!(value.set_array().is_empty());
        assert_eq!(value, Value::Array(vec![]));
    }

    #[test]
    fn test_set_string_clears_in_place() {
        let mut value = Value::from(String::with_capacity(64));
        value.set_string().push_str("hello");
        assert_eq!(value.as_str(), Some("hello"));

        let s = value.set_string();
        assert!(s.is_empty());
        assert!(s.capacity() >= 64);
    }

    #[test]
    fn test_set_switches_variant() {
        let mut value = Value::from("owned");
        *value.set_unsigned() = 9;
        assert_eq!(value, Value::Unsigned(9));
        *value.set_char() = 'z';
        assert_eq!(value, Value::Char('z'));
        value.set_object().insert("k".to_string(), Value::Null);
        assert_eq!(value.len(), 1);
        value.set_null();
        assert!(value.is_null());
    }

    #[test]
    fn test_take_leaves_null() {
        let mut value = Value::from("moved");
        let taken = value.take();
        assert_eq!(taken, Value::from("moved"));
        assert!(value.is_null());

        let mut scalar = Value::from(7u8);
        assert_eq!(scalar.take(), Value::Unsigned(7));
        assert!(scalar.is_null());
    }

    #[test]
    fn test_clone_is_deep() {
        let original: Value = vec![Value::from("a"), Value::from(vec![Value::from(1u8)])]
            .into_iter()
            .collect();
        let mut copy = original.clone();
        copy.at_mut(1).unwrap().set_array().push(Value::Null);
        assert_ne!(original, copy);
        assert_eq!(original.at(1).unwrap().len(), 1);
    }

    #[test]
    fn test_indexing() {
        let mut obj = Value::new(Kind::Object);
        obj.set_object()
            .insert("name".to_string(), Value::from("Ada"));

        assert_eq!(obj.member("name").unwrap(), &Value::from("Ada"));
        assert_eq!(
            obj.member("missing").unwrap_err().kind(),
            ErrorKind::InvalidAccess
        );
        assert_eq!(obj.at(0).unwrap_err().kind(), ErrorKind::InvalidAccess);

        *obj.member_mut("name").unwrap() = Value::from("Grace");
        assert_eq!(obj.member("name").unwrap(), &Value::from("Grace"));

        let arr = Value::from(vec![Value::from(1u8)]);
        assert_eq!(arr.member("0").unwrap_err().kind(), ErrorKind::InvalidAccess);
        assert!(arr.at(5).unwrap_err().to_string().contains("length 1"));
    }

    #[test]
    fn test_equality_is_strict() {
        assert_ne!(Value::Unsigned(1), Value::Signed(1));
        assert_ne!(Value::Unsigned(1), Value::Float(1.0));
        assert_ne!(Value::Char('a'), Value::from("a"));
        assert_eq!(
            Value::from(vec![Value::from("a")]),
            Value::from(vec![Value::from("a")])
        );
    }

    #[test]
    fn test_len() {
        assert_eq!(Value::from("abc").len(), 0);
        assert!(Value::Null.is_empty());
        assert_eq!(Value::from(vec![Value::Null; 3]).len(), 3);
    }
}
