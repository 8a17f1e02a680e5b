//! JSON-dialect text codec.
//!
//! The dialect is JSON with a few extensions so that every [`Value`]
//! variant survives a round trip:
//!
//! - Numbers keep their variant: `7` reads as unsigned, `-7` and `+7` as
//!   signed, and anything with a fraction or exponent as float. The writer
//!   always signs signed values and always gives floats a `.` or exponent.
//! - `NaN`, `Infinity` and `-Infinity` are float literals.
//! - A string of exactly one character reads as a char.
//! - A string `"@pointer=0x<hex>"` reads as a pointer.
//! - Commas between members are optional unless
//!   [`JsonOptions::strict`](crate::JsonOptions) is set.
//!
//! ## Examples
//!
//! ```rust
//! use serial_value::{Format, Json, Value};
//!
//! let json = Json::new();
//! let value = json.from_slice(br#"{"n": -3, "c": "x", "list": [1, 2.0]}"#).unwrap();
//!
//! assert_eq!(value.member("n").unwrap(), &Value::Signed(-3));
//! assert_eq!(value.member("c").unwrap(), &Value::Char('x'));
//! assert_eq!(value.member("list").unwrap().at(1).unwrap(), &Value::Float(2.0));
//! assert_eq!(value.to_string(), r#"{"n":-3,"c":"x","list":[1,2.0]}"#);
//! ```

use crate::options::JsonOptions;
use crate::{Error, Format, Map, Result, Value};
use log::trace;
use std::fmt::Write as _;
use std::io;

const POINTER_PREFIX: &str = "@pointer=0x";

/// The JSON-dialect codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Json {
    options: JsonOptions,
}

impl Json {
    /// Creates a codec with default options: compact output, permissive commas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec that writes one member per line.
    #[must_use]
    pub fn fancy() -> Self {
        Json::with_options(JsonOptions::fancy())
    }

    #[must_use]
    pub fn with_options(options: JsonOptions) -> Self {
        Json { options }
    }

    #[must_use]
    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Switches between compact and indented output.
    pub fn set_fancy_writing(&mut self, fancy: bool) {
        self.options.fancy = fancy;
    }

    /// Parses one value from the front of `text` and returns it with the
    /// number of bytes consumed, including whitespace after it.
    ///
    /// On failure nothing is consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Json, Value};
    ///
    /// let (value, used) = Json::new().parse_prefix("[1] tail").unwrap();
    /// assert_eq!(value, Value::from(vec![Value::Unsigned(1)]));
    /// assert_eq!(used, 4);
    /// ```
    pub fn parse_prefix(&self, text: &str) -> Result<(Value, usize)> {
        let mut parser = Parser::new(text, self.options);
        let value = parser.parse_value(0)?;
        Ok((value, parser.pos))
    }

    /// Renders `value` as text with this codec's options.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DepthLimitExceeded`] when containers nest deeper
    /// than [`JsonOptions::max_depth`], the same bound the reader enforces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Json, JsonOptions, Value};
    ///
    /// let nested = Value::from(vec![Value::from(vec![Value::Null])]);
    /// assert_eq!(Json::new().render(&nested).unwrap(), "[[null]]");
    ///
    /// let shallow = Json::with_options(JsonOptions::new().with_max_depth(1));
    /// assert!(shallow.render(&nested).is_err());
    /// ```
    pub fn render(&self, value: &Value) -> Result<String> {
        render(value, self.options.fancy, Some(self.options.max_depth))
    }

    /// Parses `text`, which must hold exactly one value.
    pub fn parse_str(&self, text: &str) -> Result<Value> {
        let mut parser = Parser::new(text, self.options);
        parser.parse_document()
    }
}

impl Format for Json {
    fn write<W: io::Write>(&self, value: &Value, mut writer: W) -> Result<()> {
        trace!(
            "json write: encoding {} value (fancy: {})",
            value.kind(),
            self.options.fancy
        );
        let text = self.render(value);
        if let Err(e) = &text {
            trace!("json write: encoding failed: {e:?}");
        }
        let text = text?;
        writer.write_all(text.as_bytes())?;
        trace!("json write: {} bytes written", text.len());
        Ok(())
    }

    fn read<R: io::Read>(&self, mut reader: R) -> Result<Value> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        trace!("json read: parsing {} bytes", input.len());

        let result = std::str::from_utf8(&input)
            .map_err(|e| Error::invalid_utf8(e.valid_up_to()))
            .and_then(|text| self.parse_str(text));
        match &result {
            Ok(value) => trace!("json read: parsed {} value", value.kind()),
            Err(e) => trace!("json read: parsing failed: {e:?}"),
        }
        result
    }
}

/// Renders `value` as dialect text. Without `max_depth` any nesting is
/// written.
pub(crate) fn render(value: &Value, fancy: bool, max_depth: Option<usize>) -> Result<String> {
    let mut writer = Writer {
        out: String::new(),
        fancy,
        max_depth,
    };
    writer.write_value(value, 0)?;
    Ok(writer.out)
}

struct Writer {
    out: String,
    fancy: bool,
    max_depth: Option<usize>,
}

impl Writer {
    /// `depth` counts the containers enclosing `value`.
    fn write_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Char(c) => {
                let mut buf = [0u8; 4];
                self.write_string(c.encode_utf8(&mut buf));
            }
            Value::Unsigned(n) => {
                let _ = write!(self.out, "{}", n);
            }
            Value::Signed(n) => {
                let _ = write!(self.out, "{:+}", n);
            }
            Value::Float(f) => self.write_float(*f),
            Value::Pointer(p) => self.write_string(&format!("{}{:x}", POINTER_PREFIX, p)),
            Value::String(s) => self.write_string(s),
            Value::Array(arr) => {
                self.enter(depth)?;
                if arr.is_empty() {
                    self.out.push_str("[]");
                    return Ok(());
                }
                self.out.push('[');
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.write_value(element, depth + 1)?;
                }
                self.newline(depth);
                self.out.push(']');
            }
            Value::Object(map) => {
                self.enter(depth)?;
                if map.is_empty() {
                    self.out.push_str("{}");
                    return Ok(());
                }
                self.out.push('{');
                for (i, (key, element)) in map.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.write_string(key);
                    self.out.push(':');
                    if self.fancy {
                        self.out.push(' ');
                    }
                    self.write_value(element, depth + 1)?;
                }
                self.newline(depth);
                self.out.push('}');
            }
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<()> {
        match self.max_depth {
            Some(limit) if depth >= limit => Err(Error::depth_limit(self.out.len(), limit)),
            _ => Ok(()),
        }
    }

    fn newline(&mut self, depth: usize) {
        if self.fancy {
            self.out.push('\n');
            for _ in 0..depth {
                self.out.push('\t');
            }
        }
    }

    /// Debug formatting is the shortest round-trip form and always keeps a
    /// `.` or exponent, so the token reads back as a float.
    fn write_float(&mut self, f: f64) {
        if f.is_nan() {
            self.out.push_str("NaN");
        } else if f.is_infinite() {
            self.out
                .push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
        } else {
            let _ = write!(self.out, "{:?}", f);
        }
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{08}' => self.out.push_str("\\b"),
                '\u{0c}' => self.out.push_str("\\f"),
                c if c < ' ' => {
                    let _ = write!(self.out, "\\u{:04x}", u32::from(c));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    options: JsonOptions,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: JsonOptions) -> Self {
        Parser {
            input,
            pos: 0,
            options,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value(0)?;
        if self.pos < self.input.len() {
            return Err(Error::trailing_data(self.pos));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn error_at(&self, offset: usize, msg: &str) -> Error {
        let before = &self.input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = before[line_start..].chars().count() + 1;
        Error::syntax(offset, line, col, msg)
    }

    fn unexpected(&self, expected: &str) -> Error {
        let msg = match self.rest().chars().next() {
            Some(c) => format!("unexpected character {:?}, expected {}", c, expected),
            None => format!("unexpected end of input, expected {}", expected),
        };
        self.error_at(self.pos, &msg)
    }

    /// Parses `ws value ws`. `depth` counts the enclosing containers. On
    /// failure the cursor is back where it was on entry.
    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        let start = self.pos;
        let result = self.parse_value_inner(depth);
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    fn parse_value_inner(&mut self, depth: usize) -> Result<Value> {
        self.skip_whitespace();
        let value = match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null)?,
            Some(b't') => self.parse_literal("true", Value::Bool(true))?,
            Some(b'f') => self.parse_literal("false", Value::Bool(false))?,
            Some(b'N') => self.parse_literal("NaN", Value::Float(f64::NAN))?,
            Some(b'I') => self.parse_literal("Infinity", Value::Float(f64::INFINITY))?,
            Some(b'"') => classify_string(self.parse_string()?),
            Some(b'[') => self.parse_array(depth)?,
            Some(b'{') => self.parse_object(depth)?,
            Some(b'-' | b'+' | b'0'..=b'9') => self.parse_number()?,
            _ => return Err(self.unexpected("a value")),
        };
        self.skip_whitespace();
        Ok(value)
    }

    fn parse_literal(&mut self, word: &str, value: Value) -> Result<Value> {
        if self.rest().starts_with(word) {
            self.pos += word.len();
            Ok(value)
        } else {
            Err(self.error_at(self.pos, &format!("invalid literal, expected `{}`", word)))
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let sign = match self.peek() {
            Some(b @ (b'-' | b'+')) => {
                self.pos += 1;
                Some(b)
            }
            _ => None,
        };

        if sign == Some(b'-') && self.rest().starts_with("Infinity") {
            self.pos += "Infinity".len();
            return Ok(Value::Float(f64::NEG_INFINITY));
        }

        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return Err(self.unexpected("a digit")),
        }

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            if self.skip_digits() == 0 {
                return Err(self.unexpected("a digit after the decimal point"));
            }
            is_float = true;
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.unexpected("a digit in the exponent"));
            }
            is_float = true;
        }

        if let Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-') = self.peek() {
            return Err(self.error_at(start, "malformed number"));
        }

        let token = &self.input[start..self.pos];
        let float = || {
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.error_at(start, "malformed number"))
        };
        if is_float {
            float()
        } else if sign.is_some() {
            token.parse::<i64>().map(Value::Signed).or_else(|_| float())
        } else {
            token.parse::<u64>().map(Value::Unsigned).or_else(|_| float())
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        if self.peek() != Some(b'"') {
            return Err(self.unexpected("'\"'"));
        }
        self.pos += 1;

        let mut out = String::new();
        loop {
            let rest = self.rest();
            let Some(stop) = rest.find(['"', '\\']) else {
                self.pos = self.input.len();
                return Err(self.unexpected("a closing '\"'"));
            };
            out.push_str(&rest[..stop]);
            self.pos += stop;

            if self.peek() == Some(b'"') {
                self.pos += 1;
                return Ok(out);
            }

            self.pos += 1;
            let escaped = match self.peek() {
                Some(b'"') => '"',
                Some(b'\\') => '\\',
                Some(b'/') => '/',
                Some(b'b') => '\u{08}',
                Some(b'f') => '\u{0c}',
                Some(b'n') => '\n',
                Some(b'r') => '\r',
                Some(b't') => '\t',
                Some(b'u') => {
                    self.pos += 1;
                    out.push(self.parse_unicode_escape()?);
                    continue;
                }
                _ => return Err(self.unexpected("an escape character")),
            };
            self.pos += 1;
            out.push(escaped);
        }
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let digits = self
            .input
            .get(self.pos..self.pos + 4)
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| self.error_at(self.pos, "expected four hex digits"))?;
        let code = u32::from_str_radix(digits, 16)
            .map_err(|_| self.error_at(self.pos, "expected four hex digits"))?;
        self.pos += 4;
        Ok(code)
    }

    /// Called with the cursor just past `\u`.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let start = self.pos - 2;
        let high = self.parse_hex4()?;
        let code = match high {
            0xd800..=0xdbff => {
                if !self.rest().starts_with("\\u") {
                    return Err(self.error_at(start, "unpaired surrogate in \\u escape"));
                }
                self.pos += 2;
                let low = self.parse_hex4()?;
                if !(0xdc00..=0xdfff).contains(&low) {
                    return Err(self.error_at(start, "invalid low surrogate in \\u escape"));
                }
                0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00)
            }
            0xdc00..=0xdfff => {
                return Err(self.error_at(start, "unpaired surrogate in \\u escape"));
            }
            code => code,
        };
        char::from_u32(code).ok_or_else(|| self.error_at(start, "invalid \\u escape"))
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            Err(Error::depth_limit(self.pos, self.options.max_depth))
        } else {
            Ok(())
        }
    }

    /// Walks the members of a container whose opening bracket is at the
    /// cursor, calling `member` with the cursor at the start of each member.
    fn parse_members<F>(&mut self, close: u8, expected: &str, mut member: F) -> Result<()>
    where
        F: FnMut(&mut Self) -> Result<()>,
    {
        self.pos += 1;
        let strict = self.options.strict;
        let mut count = 0usize;
        let mut after_comma = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b) if b == close => {
                    if strict && after_comma {
                        return Err(self.error_at(self.pos, "trailing comma"));
                    }
                    self.pos += 1;
                    return Ok(());
                }
                Some(b',') => {
                    if strict && (count == 0 || after_comma) {
                        return Err(self.error_at(self.pos, "unexpected comma"));
                    }
                    self.pos += 1;
                    after_comma = true;
                }
                None => return Err(self.unexpected(expected)),
                Some(_) => {
                    if strict && count > 0 && !after_comma {
                        return Err(self.unexpected(expected));
                    }
                    member(self)?;
                    count += 1;
                    after_comma = false;
                }
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        self.enter(depth)?;
        let mut items = Vec::new();
        self.parse_members(b']', "',' or ']'", |p| {
            items.push(p.parse_value(depth + 1)?);
            Ok(())
        })?;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        self.enter(depth)?;
        let mut map = Map::new();
        self.parse_members(b'}', "',' or '}'", |p| {
            if p.peek() != Some(b'"') {
                return Err(p.unexpected("a string key"));
            }
            let key = p.parse_string()?;
            p.skip_whitespace();
            if p.peek() != Some(b':') {
                return Err(p.unexpected("':'"));
            }
            p.pos += 1;
            let value = p.parse_value(depth + 1)?;
            map.insert(key, value);
            Ok(())
        })?;
        Ok(Value::Object(map))
    }
}

fn classify_string(s: String) -> Value {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Value::Char(c);
    }
    if let Some(hex) = s.strip_prefix(POINTER_PREFIX) {
        if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            if let Ok(address) = usize::from_str_radix(hex, 16) {
                return Value::Pointer(address);
            }
        }
    }
    Value::String(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(text: &str) -> Result<Value> {
        Json::new().parse_str(text)
    }

    fn render_text(value: &Value, fancy: bool) -> String {
        render(value, fancy, None).unwrap()
    }

    fn strict(text: &str) -> Result<Value> {
        Json::with_options(JsonOptions::new().with_strict(true)).parse_str(text)
    }

    #[test]
    fn test_null_round_trip() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(render_text(&Value::Null, false), "null");
        assert_eq!(parse("  null \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_unsigned_array() {
        let value = parse("[1,2,3]").unwrap();
        assert_eq!(
            value,
            Value::from(vec![
                Value::Unsigned(1),
                Value::Unsigned(2),
                Value::Unsigned(3)
            ])
        );
        assert_eq!(render_text(&value, false), "[1,2,3]");
    }

    #[test]
    fn test_object() {
        let value = parse(r#"{"a":1,"b":[true,false]}"#).unwrap();
        assert_eq!(value.member("a").unwrap(), &Value::Unsigned(1));
        assert_eq!(
            value.member("b").unwrap(),
            &Value::from(vec![Value::Bool(true), Value::Bool(false)])
        );
        assert_eq!(render_text(&value, false), r#"{"a":1,"b":[true,false]}"#);
    }

    #[test]
    fn test_char_and_pointer_extensions() {
        assert_eq!(parse(r#""x""#).unwrap(), Value::Char('x'));
        assert_eq!(parse(r#""xy""#).unwrap(), Value::from("xy"));
        assert_eq!(parse(r#""""#).unwrap(), Value::from(""));
        assert_eq!(render_text(&Value::Char('"'), false), r#""\"""#);

        let text = render_text(&Value::pointer(0xbeef), false);
        assert_eq!(text, r#""@pointer=0xbeef""#);
        assert_eq!(parse(&text).unwrap(), Value::pointer(0xbeef));
        assert_eq!(
            parse(r#""@pointer=0xzz""#).unwrap(),
            Value::from("@pointer=0xzz")
        );
    }

    #[test]
    fn test_number_variants() {
        assert_eq!(parse("0").unwrap(), Value::Unsigned(0));
        assert_eq!(parse("-5").unwrap(), Value::Signed(-5));
        assert_eq!(parse("+5").unwrap(), Value::Signed(5));
        assert_eq!(parse("1.5").unwrap(), Value::Float(1.5));
        assert_eq!(parse("2e3").unwrap(), Value::Float(2000.0));
        assert_eq!(parse("-0.25E-1").unwrap(), Value::Float(-0.025));
        assert_eq!(
            parse("18446744073709551616").unwrap(),
            Value::Float(18446744073709551616.0)
        );
        assert_eq!(parse("-Infinity").unwrap(), Value::Float(f64::NEG_INFINITY));
        assert!(matches!(parse("NaN").unwrap(), Value::Float(f) if f.is_nan()));
    }

    #[test]
    fn test_malformed_numbers() {
        for text in ["1.2.3", "--1", "1e", "01", "1.", ".5", "+", "1e+"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "{text}");
        }
    }

    #[test]
    fn test_number_writing() {
        assert_eq!(render_text(&Value::Signed(5), false), "+5");
        assert_eq!(render_text(&Value::Signed(-5), false), "-5");
        assert_eq!(render_text(&Value::Float(1.0), false), "1.0");
        assert_eq!(render_text(&Value::Float(1e300), false), "1e300");
        assert_eq!(render_text(&Value::Float(f64::INFINITY), false), "Infinity");
        assert_eq!(render_text(&Value::Float(f64::NAN), false), "NaN");

        for value in [Value::Signed(5), Value::Float(1.0), Value::Float(-0.5)] {
            assert_eq!(parse(&render_text(&value, false)).unwrap(), value);
        }
    }

    #[test]
    fn test_string_escapes() {
        let value = parse(r#""a\"b\\c\/d\n\té😀""#).unwrap();
        assert_eq!(value, Value::from("a\"b\\c/d\n\té😀"));

        let text = render_text(&Value::from("q\"\u{1}\n"), false);
        assert_eq!(text, r#""q\"\u0001\n""#);
        assert_eq!(parse(&text).unwrap(), Value::from("q\"\u{1}\n"));

        assert!(parse(r#""\ud83d""#).is_err());
        assert!(parse(r#""\x""#).is_err());
        assert!(parse(r#""\u12""#).is_err());
        assert!(parse(r#""open"#).is_err());
    }

    #[test]
    fn test_missing_value_names_character() {
        let err = parse(r#"{"a":}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("'}'"), "{err}");
        match err {
            Error::Syntax {
                offset, line, col, ..
            } => {
                assert_eq!(offset, 5);
                assert_eq!((line, col), (1, 6));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_error_line_and_column() {
        let err = parse("[\n  1,\n  ?]").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 3, col: 3, .. }), "{err:?}");
    }

    #[test]
    fn test_trailing_data() {
        assert_eq!(parse("1 2").unwrap_err(), Error::trailing_data(2));
        assert_eq!(parse("{} x").unwrap_err().kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_permissive_commas() {
        let expected = Value::from(vec![Value::Unsigned(1), Value::Unsigned(2)]);
        for text in ["[1,2]", "[,1,2]", "[1,2,]", "[1,,2]", "[1 2]"] {
            assert_eq!(parse(text).unwrap(), expected, "{text}");
        }
        let value = parse(r#"{"a":1 "b":2,}"#).unwrap();
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_strict_commas() {
        assert!(strict("[1,2]").is_ok());
        assert!(strict("[]").is_ok());
        for text in ["[,1,2]", "[1,2,]", "[1,,2]", "[1 2]", r#"{"a":1,}"#] {
            assert_eq!(
                strict(text).unwrap_err().kind(),
                ErrorKind::MalformedInput,
                "{text}"
            );
        }
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let value = parse(r#"{"k":1,"k":2}"#).unwrap();
        assert_eq!(value.len(), 1);
        assert_eq!(value.member("k").unwrap(), &Value::Unsigned(2));
    }

    #[test]
    fn test_depth_limit() {
        let json = Json::with_options(JsonOptions::new().with_max_depth(2));
        assert!(json.parse_str("[[1]]").is_ok());
        let err = json.parse_str("[[[1]]]").unwrap_err();
        assert_eq!(err, Error::depth_limit(2, 2));

        let deep = "[".repeat(200) + &"]".repeat(200);
        assert!(matches!(
            parse(&deep).unwrap_err(),
            Error::DepthLimitExceeded { limit: 128, .. }
        ));
    }

    #[test]
    fn test_writer_depth_matches_reader() {
        let json = Json::with_options(JsonOptions::new().with_max_depth(2));
        let fits = parse("[[1]]").unwrap();
        let too_deep = parse("[[[1]]]").unwrap();

        assert_eq!(json.render(&fits).unwrap(), "[[1]]");
        assert_eq!(json.render(&too_deep).unwrap_err(), Error::depth_limit(2, 2));

        let mut out = Vec::new();
        assert!(json.write(&too_deep, &mut out).is_err());
        assert!(out.is_empty());

        // Empty containers still count as a level.
        let empty_inside = parse("[[{}]]").unwrap();
        assert!(json.render(&empty_inside).is_err());

        // Display has no bound.
        let mut deep = Value::Null;
        for _ in 0..200 {
            deep = Value::from(vec![deep]);
        }
        assert_eq!(deep.to_string().len(), 404);
        assert!(Json::new().render(&deep).is_err());
    }

    #[test]
    fn test_parse_prefix() {
        let json = Json::new();
        let (value, used) = json.parse_prefix(r#"{"a":1}  rest"#).unwrap();
        assert_eq!(value.len(), 1);
        assert_eq!(used, 9);

        let mut parser = Parser::new(r#"  {"a":}"#, JsonOptions::new());
        assert!(parser.parse_value(0).is_err());
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn test_fancy_layout() {
        let value = parse(r#"{"a":[1,{}],"b":[]}"#).unwrap();
        assert_eq!(
            render_text(&value, true),
            "{\n\t\"a\": [\n\t\t1,\n\t\t{}\n\t],\n\t\"b\": []\n}"
        );
        assert_eq!(parse(&render_text(&value, true)).unwrap(), value);
    }

    #[test]
    fn test_set_fancy_writing() {
        let mut json = Json::new();
        let value = Value::from(vec![Value::Null]);
        json.set_fancy_writing(true);
        assert_eq!(json.to_vec(&value).unwrap(), b"[\n\tnull\n]");
        json.set_fancy_writing(false);
        assert_eq!(json.to_vec(&value).unwrap(), b"[null]");
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let err = Json::new().from_slice(b"\"a\xff\"").unwrap_err();
        assert_eq!(err, Error::invalid_utf8(2));
    }
}
