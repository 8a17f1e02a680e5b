//! Conversion of [`Value`] trees into Rust data structures.
//!
//! [`ValueDeserializer`] implements serde's
//! [`Deserializer`](serde::Deserializer) over an owned [`Value`].
//! Self-describing requests (`deserialize_any`) see the exact variant, while
//! typed requests go through the coercing accessors. A field declared as
//! `u16` therefore accepts `Unsigned(3)`, `"3"` and `'3'` alike, and a `Vec`
//! accepts an object keyed `"0".."n-1"`.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use serial_value::{from_json_str, from_value};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Settings {
//!     port: u16,
//!     verbose: bool,
//!     tags: Vec<String>,
//! }
//!
//! let value = from_json_str(r#"{"port": "8080", "verbose": "yes", "tags": {"1": "b", "0": "a"}}"#).unwrap();
//! let settings: Settings = from_value(value).unwrap();
//! assert_eq!(
//!     settings,
//!     Settings { port: 8080, verbose: true, tags: vec!["a".into(), "b".into()] }
//! );
//! ```

use crate::{Error, Kind, Map, Result, Value};
use serde::de::{self, DeserializeOwned, Deserializer as _, IntoDeserializer};

/// Deserializer reading from an owned [`Value`].
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

/// Converts a [`Value`] into any deserializable type, coercing where the
/// target type asks for a different variant.
///
/// # Errors
///
/// Fails when a coercion is impossible, a number is out of range for the
/// target type, or the shape does not match.
///
/// # Examples
///
/// ```rust
/// use serial_value::{from_value, Value};
///
/// let n: u8 = from_value(Value::from("42")).unwrap();
/// assert_eq!(n, 42);
/// assert!(from_value::<u8>(Value::Unsigned(300)).is_err());
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(ValueDeserializer::new(value))
}

fn out_of_range<N: std::fmt::Display>(n: N, ty: &str) -> Error {
    Error::custom(format!("{} is out of range for {}", n, ty))
}

macro_rules! deserialize_unsigned {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let n = self.value.get_unsigned()?;
                let n = <$ty>::try_from(n).map_err(|_| out_of_range(n, stringify!($ty)))?;
                visitor.$visit(n)
            }
        )*
    };
}

macro_rules! deserialize_signed {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let n = self.value.get_signed()?;
                let n = <$ty>::try_from(n).map_err(|_| out_of_range(n, stringify!($ty)))?;
                visitor.$visit(n)
            }
        )*
    };
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
            Value::Char(c) => visitor.visit_char(c),
            Value::Unsigned(n) => visitor.visit_u64(n),
            Value::Signed(n) => visitor.visit_i64(n),
            Value::Float(f) => visitor.visit_f64(f),
            Value::Pointer(p) => visitor.visit_u64(p as u64),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_bool(self.value.get_bool()?)
    }

    deserialize_unsigned! {
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
    }

    deserialize_signed! {
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f32(self.value.get_float()? as f32)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f64(self.value.get_float()?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_char(self.value.get_char()?)
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(mut self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(std::mem::take(self.value.get_string_mut()?))
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_byte_buf(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_byte_buf(s.into_bytes()),
            other => ValueDeserializer::new(other).deserialize_seq(visitor),
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

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            other => Err(Error::not_convertible(other.kind(), Kind::Null)),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(mut self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let items = std::mem::take(self.value.get_array_mut()?);
        visitor.visit_seq(SeqDeserializer::new(items))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(mut self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let map = std::mem::take(self.value.get_object_mut()?);
        visitor.visit_map(MapDeserializer::new(map))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
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
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            // One-letter variant names come back from text as chars.
            Value::Char(c) => visitor.visit_enum(c.to_string().into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => {
                let mut entries = obj.into_iter();
                match entries.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    None => Err(Error::custom("Expected enum variant")),
                }
            }
            Value::Object(_) => Err(Error::custom(
                "Expected an object with exactly one member for an enum",
            )),
            other => Err(Error::custom(format!(
                "Expected string or object for an enum, found {}",
                other.kind()
            ))),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
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
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
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
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
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
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(Error::not_convertible(other.kind(), Kind::Null)),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.value).deserialize_seq(visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.value).deserialize_map(visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug, PartialEq)]
    enum Command {
        Halt,
        Jump(i32),
        Scale(f32, f32),
        Label { text: String },
        A,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Record {
        id: u32,
        name: String,
        score: Option<f64>,
        initial: char,
    }

    fn object(pairs: &[(&str, Value)]) -> Value {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_any_sees_exact_variant() {
        let value: Value = from_value(Value::Signed(4)).unwrap();
        assert_eq!(value, Value::Signed(4));

        let pointer: Value = from_value(Value::pointer(0x10)).unwrap();
        assert_eq!(pointer, Value::Unsigned(0x10));
        assert!(from_value::<u64>(Value::pointer(0x10)).is_err());

        let nested = object(&[("k", Value::from(vec![Value::Char('c')]))]);
        assert_eq!(from_value::<Value>(nested.clone()).unwrap(), nested);
    }

    #[test]
    fn test_typed_requests_coerce() {
        assert_eq!(from_value::<u16>(Value::from(" 12 ")).unwrap(), 12);
        assert_eq!(from_value::<i8>(Value::Float(-3.7)).unwrap(), -3);
        assert!(from_value::<bool>(Value::Char('t')).unwrap());
        assert_eq!(from_value::<String>(Value::Char('z')).unwrap(), "z");
        assert_eq!(from_value::<char>(Value::Unsigned(4)).unwrap(), '4');
        assert_eq!(from_value::<f64>(Value::from("0.5")).unwrap(), 0.5);
    }

    #[test]
    fn test_range_checks() {
        assert!(from_value::<u8>(Value::Unsigned(256)).is_err());
        assert!(from_value::<i8>(Value::Signed(-129)).is_err());
        assert!(from_value::<u32>(Value::Signed(-1)).is_err());
        assert_eq!(from_value::<u128>(Value::Unsigned(9)).unwrap(), 9);
    }

    #[test]
    fn test_struct_from_object() {
        let value = object(&[
            ("id", Value::from("7")),
            ("name", Value::Char('x')),
            ("score", Value::Null),
            ("initial", Value::from("Q")),
        ]);
        let record: Record = from_value(value).unwrap();
        assert_eq!(
            record,
            Record {
                id: 7,
                name: "x".to_string(),
                score: None,
                initial: 'Q',
            }
        );
    }

    #[test]
    fn test_sequences_and_maps_coerce() {
        let keyed = object(&[("1", Value::Unsigned(20)), ("0", Value::Unsigned(10))]);
        assert_eq!(from_value::<Vec<u8>>(keyed).unwrap(), vec![10, 20]);

        let list = Value::from(vec![Value::from("a"), Value::from("b")]);
        let map: HashMap<usize, String> = from_value(list).unwrap();
        assert_eq!(map[&1], "b");

        assert!(from_value::<Vec<u8>>(Value::Unsigned(1)).is_err());
        let (a, b): (u8, String) =
            from_value(Value::from(vec![Value::Unsigned(1), Value::from("two")])).unwrap();
        assert_eq!((a, b.as_str()), (1, "two"));
    }

    #[test]
    fn test_enums() {
        assert_eq!(from_value::<Command>(Value::from("Halt")).unwrap(), Command::Halt);
        assert_eq!(from_value::<Command>(Value::Char('A')).unwrap(), Command::A);
        assert_eq!(
            from_value::<Command>(object(&[("Jump", Value::Signed(-2))])).unwrap(),
            Command::Jump(-2)
        );
        assert_eq!(
            from_value::<Command>(object(&[(
                "Scale",
                Value::from(vec![Value::Float(0.5), Value::Unsigned(2)])
            )]))
            .unwrap(),
            Command::Scale(0.5, 2.0)
        );
        assert_eq!(
            from_value::<Command>(object(&[("Label", object(&[("text", Value::from("hi"))]))]))
                .unwrap(),
            Command::Label {
                text: "hi".to_string()
            }
        );
        assert!(from_value::<Command>(Value::Unsigned(0)).is_err());
        assert!(from_value::<Command>(object(&[])).is_err());
    }

    #[test]
    fn test_unit_requires_null() {
        assert!(from_value::<()>(Value::Null).is_ok());
        assert_eq!(
            from_value::<()>(Value::Bool(false)).unwrap_err(),
            Error::not_convertible(Kind::Bool, Kind::Null)
        );
    }
}
