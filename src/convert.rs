//! Best-effort coercion between value variants.
//!
//! Every target variant has three accessors built on one primitive:
//!
//! - `coerce_*` returns `Option` and never allocates an error. It is the
//!   single source of truth for the conversion rules.
//! - `get_*` returns `Result`, failing with
//!   [`Error::NotConvertible`](crate::Error::NotConvertible).
//! - `get_*_mut` coerces, rewrites the value in place to the target
//!   variant, and returns a mutable reference to the payload.
//! - `is_*` reports whether `get_*` would succeed.
//!
//! Coercion is one-directional and partial:
//!
//! | Target | Accepted sources |
//! |---|---|
//! | bool | char `1yYtT` / `0nNfF`, numbers (`> 0`, floats `>= 0.5`), non-null pointer, yes/no style strings |
//! | char | bool (`'1'`/`'0'`), integral numbers `0..=9`, one-character strings |
//! | unsigned / signed | digit chars, bool, in-range numbers (floats truncate), numeric strings |
//! | float | digit chars, bool, integers, numeric strings |
//! | string | every scalar except pointer |
//! | array | objects keyed exactly `"0"..` `"n-1"` |
//! | object | arrays (keys become `"0"..` `"n-1"`) |
//! | pointer | nothing but pointers |
//!
//! ## Examples
//!
//! ```rust
//! use serial_value::{Kind, Value};
//!
//! let mut value = Value::from(" 42 ");
//! assert!(value.is_unsigned());
//! assert_eq!(value.get_unsigned().unwrap(), 42);
//! assert_eq!(value.kind(), Kind::String);
//!
//! *value.get_unsigned_mut().unwrap() += 1;
//! assert_eq!(value, Value::Unsigned(43));
//! ```

use crate::{Error, Kind, Map, Result, Value};
use std::borrow::Cow;

const TRUE_WORDS: [&str; 6] = ["1", "y", "yes", "t", "true", "on"];
const FALSE_WORDS: [&str; 6] = ["0", "n", "no", "f", "false", "off"];

// 2^64 and 2^63 as floats; the largest exclusive bounds a truncated float
// may reach before the integer cast saturates.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn digit_value(c: char) -> Option<u64> {
    c.to_digit(10).map(u64::from)
}

fn digit_char(n: u64) -> Option<char> {
    if n <= 9 {
        char::from_digit(n as u32, 10)
    } else {
        None
    }
}

fn word_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

/// Parses a canonical decimal array index: no sign, no leading zeros.
fn parse_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

/// Keys are unique, so `len` distinct canonical indices below `len` are
/// exactly `0..len`.
fn is_index_keyed(map: &Map) -> bool {
    let len = map.len();
    map.keys()
        .all(|key| parse_index(key).map_or(false, |index| index < len))
}

impl Value {
    fn not_convertible(&self, to: Kind) -> Error {
        Error::not_convertible(self.kind(), to)
    }

    /// Coerces to a boolean without failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Value;
    ///
    /// assert_eq!(Value::Char('Y').coerce_bool(), Some(true));
    /// assert_eq!(Value::Char('x').coerce_bool(), None);
    /// assert_eq!(Value::from("No").coerce_bool(), Some(false));
    /// assert_eq!(Value::Float(0.49).coerce_bool(), Some(false));
    /// ```
    #[must_use]
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Char('1' | 'y' | 'Y' | 't' | 'T') => Some(true),
            Value::Char('0' | 'n' | 'N' | 'f' | 'F') => Some(false),
            Value::Unsigned(n) => Some(*n > 0),
            Value::Signed(n) => Some(*n > 0),
            Value::Float(f) => Some(*f >= 0.5),
            Value::Pointer(p) => Some(*p != 0),
            Value::String(s) => word_bool(s),
            _ => None,
        }
    }

    /// Coerces to a character without failing.
    #[must_use]
    pub fn coerce_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            Value::Bool(b) => Some(if *b { '1' } else { '0' }),
            Value::Unsigned(n) => digit_char(*n),
            Value::Signed(n) => u64::try_from(*n).ok().and_then(digit_char),
            Value::Float(f) if f.fract() == 0.0 && (0.0..=9.0).contains(f) => {
                digit_char(*f as u64)
            }
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Coerces to an unsigned integer without failing.
    ///
    /// Negative numbers and out-of-range floats have no unsigned
    /// representation and yield `None`; in-range floats truncate toward zero.
    #[must_use]
    pub fn coerce_unsigned(&self) -> Option<u64> {
        match self {
            Value::Unsigned(n) => Some(*n),
            Value::Char(c) => digit_value(*c),
            Value::Bool(b) => Some(u64::from(*b)),
            Value::Signed(n) => u64::try_from(*n).ok(),
            Value::Float(f) => {
                let t = f.trunc();
                if f.is_finite() && t >= 0.0 && t < U64_BOUND {
                    Some(t as u64)
                } else {
                    None
                }
            }
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerces to a signed integer without failing.
    #[must_use]
    pub fn coerce_signed(&self) -> Option<i64> {
        match self {
            Value::Signed(n) => Some(*n),
            Value::Char(c) => digit_value(*c).map(|d| d as i64),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Unsigned(n) => i64::try_from(*n).ok(),
            Value::Float(f) => {
                let t = f.trunc();
                if f.is_finite() && t >= -I64_BOUND && t < I64_BOUND {
                    Some(t as i64)
                } else {
                    None
                }
            }
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerces to a float without failing.
    #[must_use]
    pub fn coerce_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Char(c) => digit_value(*c).map(|d| d as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Unsigned(n) => Some(*n as f64),
            Value::Signed(n) => Some(*n as f64),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the pointer word. Pointers never coerce.
    #[must_use]
    pub fn coerce_pointer(&self) -> Option<usize> {
        match self {
            Value::Pointer(p) => Some(*p),
            _ => None,
        }
    }

    /// Renders any scalar except a pointer as text without failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Value;
    ///
    /// assert_eq!(Value::Null.coerce_string().as_deref(), Some("null"));
    /// assert_eq!(Value::Bool(false).coerce_string().as_deref(), Some("false"));
    /// assert_eq!(Value::Signed(-3).coerce_string().as_deref(), Some("-3"));
    /// assert_eq!(Value::pointer(1).coerce_string(), None);
    /// ```
    #[must_use]
    pub fn coerce_string(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Null => Some(Cow::Borrowed("null")),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Char(c) => Some(Cow::Owned(c.to_string())),
            Value::Unsigned(n) => Some(Cow::Owned(n.to_string())),
            Value::Signed(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            _ => None,
        }
    }

    /// Returns the elements of an array, or of an object keyed `"0".."n-1"`
    /// ordered by index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert("1".to_string(), Value::from("b"));
    /// map.insert("0".to_string(), Value::from("a"));
    /// let value = Value::from(map);
    ///
    /// let items = value.coerce_array().unwrap();
    /// assert_eq!(items[0], Value::from("a"));
    /// assert_eq!(items[1], Value::from("b"));
    /// ```
    #[must_use]
    pub fn coerce_array(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Value::Array(arr) => Some(Cow::Borrowed(arr.as_slice())),
            Value::Object(map) if is_index_keyed(map) => {
                let mut items = vec![Value::Null; map.len()];
                for (key, value) in map {
                    let slot = parse_index(key).and_then(|index| items.get_mut(index))?;
                    *slot = value.clone();
                }
                Some(Cow::Owned(items))
            }
            _ => None,
        }
    }

    /// Returns the members of an object, or an array keyed by position.
    #[must_use]
    pub fn coerce_object(&self) -> Option<Cow<'_, Map>> {
        match self {
            Value::Object(map) => Some(Cow::Borrowed(map)),
            Value::Array(arr) => Some(Cow::Owned(
                arr.iter()
                    .enumerate()
                    .map(|(index, value)| (index.to_string(), value.clone()))
                    .collect(),
            )),
            _ => None,
        }
    }
}

macro_rules! scalar_accessors {
    ($(
        $kind:ident, $ty:ty, $coerce:ident, $get:ident, $get_mut:ident, $is:ident;
    )*) => {
        impl Value {
            $(
                #[doc = concat!("Returns the value as `", stringify!($ty), "`, coercing if needed.")]
                ///
                /// # Errors
                ///
                /// Fails with a not-convertible error when no coercion exists.
                pub fn $get(&self) -> Result<$ty> {
                    self.$coerce().ok_or_else(|| self.not_convertible(Kind::$kind))
                }

                #[doc = concat!("Coerces to `", stringify!($ty), "` and rewrites the value in place.")]
                ///
                /// On failure the value is left untouched.
                ///
                /// # Errors
                ///
                /// Fails with a not-convertible error when no coercion exists.
                pub fn $get_mut(&mut self) -> Result<&mut $ty> {
                    if !matches!(self, Value::$kind(_)) {
                        *self = Value::$kind(self.$get()?);
                    }
                    match self {
                        Value::$kind(payload) => Ok(payload),
                        _ => unreachable!(),
                    }
                }

                #[doc = concat!("Returns `true` if [`Value::", stringify!($get), "`] would succeed.")]
                #[must_use]
                pub fn $is(&self) -> bool {
                    self.$coerce().is_some()
                }
            )*
        }
    };
}

scalar_accessors! {
    Bool, bool, coerce_bool, get_bool, get_bool_mut, is_bool;
    Char, char, coerce_char, get_char, get_char_mut, is_char;
    Unsigned, u64, coerce_unsigned, get_unsigned, get_unsigned_mut, is_unsigned;
    Signed, i64, coerce_signed, get_signed, get_signed_mut, is_signed;
    Float, f64, coerce_float, get_float, get_float_mut, is_float;
    Pointer, usize, coerce_pointer, get_pointer, get_pointer_mut, is_pointer;
}

impl Value {
    /// Returns the value as text, coercing scalars.
    ///
    /// # Errors
    ///
    /// Fails for pointers, arrays and objects.
    pub fn get_string(&self) -> Result<Cow<'_, str>> {
        self.coerce_string()
            .ok_or_else(|| self.not_convertible(Kind::String))
    }

    /// Coerces to a string and rewrites the value in place.
    ///
    /// # Errors
    ///
    /// Fails for pointers, arrays and objects, leaving the value untouched.
    pub fn get_string_mut(&mut self) -> Result<&mut String> {
        if !matches!(self, Value::String(_)) {
            let text = self.get_string()?.into_owned();
            *self = Value::String(text);
        }
        match self {
            Value::String(s) => Ok(s),
            _ => unreachable!(),
        }
    }

    /// Returns `true` if [`Value::get_string`] would succeed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::Value;
    ///
    /// assert!(Value::Null.is_string());
    /// assert!(Value::Float(0.5).is_string());
    /// assert!(!Value::pointer(8).is_string());
    /// assert!(!Value::from(vec![Value::Null]).is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        !matches!(self, Value::Pointer(_) | Value::Array(_) | Value::Object(_))
    }

    /// Returns the value as a slice of elements, converting index-keyed objects.
    ///
    /// # Errors
    ///
    /// Fails for scalars and for objects whose keys are not exactly
    /// `"0".."n-1"`.
    pub fn get_array(&self) -> Result<Cow<'_, [Value]>> {
        self.coerce_array()
            .ok_or_else(|| self.not_convertible(Kind::Array))
    }

    /// Coerces to an array and rewrites the value in place.
    ///
    /// # Errors
    ///
    /// Fails for scalars and for objects whose keys are not exactly
    /// `"0".."n-1"`, leaving the value untouched.
    pub fn get_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        if !matches!(self, Value::Array(_)) {
            let items = self.get_array()?.into_owned();
            *self = Value::Array(items);
        }
        match self {
            Value::Array(arr) => Ok(arr),
            _ => unreachable!(),
        }
    }

    /// Checks the key set without building the array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        match self {
            Value::Array(_) => true,
            Value::Object(map) => is_index_keyed(map),
            _ => false,
        }
    }

    /// Returns the value as a map, converting arrays to index-keyed objects.
    ///
    /// # Errors
    ///
    /// Fails for every scalar.
    pub fn get_object(&self) -> Result<Cow<'_, Map>> {
        self.coerce_object()
            .ok_or_else(|| self.not_convertible(Kind::Object))
    }

    /// Coerces to an object and rewrites the value in place.
    ///
    /// # Errors
    ///
    /// Fails for every scalar, leaving the value untouched.
    pub fn get_object_mut(&mut self) -> Result<&mut Map> {
        if !matches!(self, Value::Object(_)) {
            let map = self.get_object()?.into_owned();
            *self = Value::Object(map);
        }
        match self {
            Value::Object(map) => Ok(map),
            _ => unreachable!(),
        }
    }

    /// Returns `true` if [`Value::get_object`] would succeed: objects, and
    /// arrays keyed by position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Kind, Value};
    ///
    /// assert!(Value::new(Kind::Object).is_object());
    /// assert!(Value::new(Kind::Array).is_object());
    /// assert!(!Value::from("{}").is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }
}

// TryFrom implementations for extracting values from Value
macro_rules! try_from_value {
    ($($ty:ty => $get:ident),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    value.$get()
                }
            }
        )*
    };
}

try_from_value!(bool => get_bool, char => get_char, u64 => get_unsigned, i64 => get_signed, f64 => get_float);

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(mut value: Value) -> Result<Self> {
        value.get_string_mut().map(std::mem::take)
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Error;

    fn try_from(mut value: Value) -> Result<Self> {
        value.get_array_mut().map(std::mem::take)
    }
}

impl TryFrom<Value> for Map {
    type Error = Error;

    fn try_from(mut value: Value) -> Result<Self> {
        value.get_object_mut().map(std::mem::take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn object(keys: &[&str]) -> Value {
        keys.iter()
            .map(|k| (k.to_string(), Value::from(*k)))
            .collect()
    }

    #[test]
    fn test_bool_from_char() {
        for c in ['1', 'y', 'Y', 't', 'T'] {
            assert!(Value::Char(c).get_bool().unwrap(), "{c}");
        }
        for c in ['0', 'n', 'N', 'f', 'F'] {
            assert!(!Value::Char(c).get_bool().unwrap(), "{c}");
        }
        let err = Value::Char('x').get_bool().unwrap_err();
        assert_eq!(err, Error::not_convertible(Kind::Char, Kind::Bool));
    }

    #[test]
    fn test_bool_from_numbers_and_strings() {
        assert!(Value::Unsigned(3).get_bool().unwrap());
        assert!(!Value::Unsigned(0).get_bool().unwrap());
        assert!(!Value::Signed(-4).get_bool().unwrap());
        assert!(Value::Float(0.5).get_bool().unwrap());
        assert!(!Value::Float(0.25).get_bool().unwrap());
        assert!(!Value::Float(f64::NAN).get_bool().unwrap());
        assert!(Value::pointer(8).get_bool().unwrap());
        assert!(!Value::pointer(0).get_bool().unwrap());

        assert!(Value::from("YES").get_bool().unwrap());
        assert!(Value::from("True").get_bool().unwrap());
        assert!(!Value::from("no").get_bool().unwrap());
        assert!(!Value::from("FALSE").get_bool().unwrap());
        assert!(Value::from("maybe").get_bool().is_err());
        assert!(Value::Null.get_bool().is_err());
        assert!(Value::new(Kind::Array).get_bool().is_err());
    }

    #[test]
    fn test_char_coercion() {
        assert_eq!(Value::Bool(true).get_char().unwrap(), '1');
        assert_eq!(Value::Unsigned(7).get_char().unwrap(), '7');
        assert_eq!(Value::Signed(0).get_char().unwrap(), '0');
        assert_eq!(Value::Float(9.0).get_char().unwrap(), '9');
        assert_eq!(Value::from("q").get_char().unwrap(), 'q');
        assert_eq!(Value::from("é").get_char().unwrap(), 'é');

        assert!(Value::Unsigned(10).get_char().is_err());
        assert!(Value::Signed(-1).get_char().is_err());
        assert!(Value::Float(2.5).get_char().is_err());
        assert!(Value::from("ab").get_char().is_err());
        assert!(Value::from("").get_char().is_err());
        assert!(Value::Null.get_char().is_err());
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(Value::from("42").get_unsigned().unwrap(), 42);
        assert_eq!(
            Value::from("abc").get_unsigned().unwrap_err().kind(),
            ErrorKind::NotConvertible
        );
        assert_eq!(Value::Char('5').get_unsigned().unwrap(), 5);
        assert!(Value::Char('x').get_unsigned().is_err());
        assert_eq!(Value::Bool(true).get_signed().unwrap(), 1);
        assert_eq!(Value::Float(3.99).get_unsigned().unwrap(), 3);
        assert_eq!(Value::Float(-3.99).get_signed().unwrap(), -3);
        assert!(Value::Float(f64::INFINITY).get_signed().is_err());
        assert!(Value::Float(1e30).get_unsigned().is_err());
        assert!(Value::Signed(-1).get_unsigned().is_err());
        assert!(Value::Unsigned(u64::MAX).get_signed().is_err());
        assert_eq!(Value::from("-12").get_signed().unwrap(), -12);
        assert!(Value::pointer(1).get_unsigned().is_err());
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(Value::from("2.5").get_float().unwrap(), 2.5);
        assert_eq!(Value::Unsigned(4).get_float().unwrap(), 4.0);
        assert_eq!(Value::Signed(-4).get_float().unwrap(), -4.0);
        assert_eq!(Value::Char('8').get_float().unwrap(), 8.0);
        assert!(Value::from("two").get_float().is_err());
    }

    #[test]
    fn test_string_coercion() {
        assert_eq!(Value::Null.get_string().unwrap(), "null");
        assert_eq!(Value::Char('c').get_string().unwrap(), "c");
        assert_eq!(Value::Bool(true).get_string().unwrap(), "true");
        assert_eq!(Value::Unsigned(12).get_string().unwrap(), "12");
        assert_eq!(Value::Float(1.5).get_string().unwrap(), "1.5");
        assert!(Value::pointer(3).get_string().is_err());
        assert!(Value::new(Kind::Object).get_string().is_err());
        assert!(matches!(
            Value::from("borrowed").get_string().unwrap(),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_object_to_array() {
        let value = object(&["2", "0", "1"]);
        let items = value.get_array().unwrap();
        assert_eq!(
            items.as_ref(),
            &[Value::from("0"), Value::from("1"), Value::from("2")]
        );

        assert!(object(&["0", "2"]).get_array().is_err());
        assert!(!object(&["0", "2"]).is_array());
        assert!(object(&["00"]).get_array().is_err());
        assert!(object(&["0", "x"]).get_array().is_err());
        assert!(object(&["+0"]).get_array().is_err());
        assert_eq!(object(&[]).get_array().unwrap().len(), 0);
        assert!(Value::Unsigned(1).get_array().is_err());
    }

    #[test]
    fn test_array_to_object() {
        let value = Value::from(vec![Value::from("a"), Value::from("b")]);
        let map = value.get_object().unwrap();
        assert_eq!(map.get("0"), Some(&Value::from("a")));
        assert_eq!(map.get("1"), Some(&Value::from("b")));
        assert!(Value::from("a").get_object().is_err());
        assert!(!Value::Null.is_object());
    }

    #[test]
    fn test_pointer_never_coerces() {
        assert_eq!(Value::pointer(5).get_pointer().unwrap(), 5);
        assert!(Value::Unsigned(5).get_pointer().is_err());
        assert!(Value::from("0x5").get_pointer().is_err());
        assert!(!Value::Null.is_pointer());
    }

    #[test]
    fn test_mutating_matches_read_only() {
        let samples = vec![
            Value::Char('7'),
            Value::from("13"),
            Value::Bool(true),
            Value::Float(2.75),
            Value::Signed(-2),
            object(&["1", "0"]),
        ];
        for sample in samples {
            let mut m = sample.clone();
            match (sample.get_unsigned(), m.get_unsigned_mut()) {
                (Ok(a), Ok(b)) => assert_eq!(a, *b),
                (Err(a), Err(b)) => assert_eq!(a, b),
                other => panic!("accessors disagree: {:?}", other),
            }

            let mut m = sample.clone();
            match (sample.get_string(), m.get_string_mut()) {
                (Ok(a), Ok(b)) => assert_eq!(a.as_ref(), b.as_str()),
                (Err(a), Err(b)) => assert_eq!(a, b),
                other => panic!("accessors disagree: {:?}", other),
            }

            let mut m = sample.clone();
            match (sample.get_array(), m.get_array_mut()) {
                (Ok(a), Ok(b)) => assert_eq!(a.as_ref(), b.as_slice()),
                (Err(a), Err(b)) => assert_eq!(a, b),
                other => panic!("accessors disagree: {:?}", other),
            }
        }
    }

    #[test]
    fn test_mutating_rewrites_variant() {
        let mut value = Value::from("1");
        assert!(*value.get_bool_mut().unwrap());
        assert_eq!(value, Value::Bool(true));

        let mut value = Value::from("not a number");
        assert!(value.get_float_mut().is_err());
        assert_eq!(value, Value::from("not a number"));

        let mut value = Value::from(vec![Value::Null]);
        value.get_object_mut().unwrap();
        assert_eq!(value.kind(), Kind::Object);
        assert_eq!(value.member("0").unwrap(), &Value::Null);
    }

    #[test]
    fn test_is_predicates() {
        assert!(Value::from("yes").is_bool());
        assert!(!Value::from("perhaps").is_bool());
        assert!(Value::Unsigned(3).is_char());
        assert!(Value::from("7").is_signed());
        assert!(Value::Null.is_string());
        assert!(!Value::pointer(0).is_string());
        assert!(Value::from(vec![]).is_object());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(u64::try_from(Value::from("9")).unwrap(), 9);
        assert!(bool::try_from(Value::from("x")).is_err());
        assert_eq!(String::try_from(Value::Unsigned(5)).unwrap(), "5");
        assert_eq!(
            Vec::<Value>::try_from(object(&["0"])).unwrap(),
            vec![Value::from("0")]
        );
    }
}
