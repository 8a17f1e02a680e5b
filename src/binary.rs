//! Length-prefixed binary codec.
//!
//! Every value is a tag byte (the [`Kind`] discriminant) followed by its
//! payload, written depth-first:
//!
//! | Kind | Payload |
//! |---|---|
//! | null | nothing |
//! | char | 1 byte, code points up to U+00FF |
//! | bool | 1 byte |
//! | unsigned / signed / float | 8 bytes |
//! | pointer | `size_of::<usize>()` bytes |
//! | string | u16 byte length, UTF-8 bytes |
//! | array | u16 count, `count` values |
//! | object | u16 count, `count` times (u16 key length, key bytes, value) |
//!
//! Multi-byte fields use the host byte order, so streams are only portable
//! between hosts of the same endianness and pointer width.
//!
//! ## Examples
//!
//! ```rust
//! use serial_value::{Binary, Format, Value};
//!
//! let bytes = Binary::new().to_vec(&Value::from("hi")).unwrap();
//! let mut expected = vec![7];
//! expected.extend_from_slice(&2u16.to_ne_bytes());
//! expected.extend_from_slice(b"hi");
//! assert_eq!(bytes, expected);
//! ```

use crate::options::BinaryOptions;
use crate::{Error, Format, Kind, Map, Result, Value};
use log::trace;
use std::io;

/// The binary codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Binary {
    options: BinaryOptions,
}

impl Binary {
    /// Creates a codec with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with the given options.
    #[must_use]
    pub fn with_options(options: BinaryOptions) -> Self {
        Binary { options }
    }

    /// Returns the options this codec reads and writes with.
    #[must_use]
    pub fn options(&self) -> BinaryOptions {
        self.options
    }

    /// Decodes one value from the front of `bytes` and returns it with the
    /// number of bytes it occupied. Bytes after it are left alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Binary, Format, Value};
    ///
    /// let codec = Binary::new();
    /// let mut stream = codec.to_vec(&Value::Bool(true)).unwrap();
    /// stream.extend(codec.to_vec(&Value::Null).unwrap());
    ///
    /// let (first, used) = codec.decode_prefix(&stream).unwrap();
    /// assert_eq!(first, Value::Bool(true));
    /// let (second, _) = codec.decode_prefix(&stream[used..]).unwrap();
    /// assert_eq!(second, Value::Null);
    /// ```
    pub fn decode_prefix(&self, bytes: &[u8]) -> Result<(Value, usize)> {
        let mut decoder = Decoder::new(bytes, self.options.max_depth);
        let value = decoder.decode_value(0)?;
        Ok((value, decoder.offset))
    }
}

impl Format for Binary {
    /// Encodes into memory first, so a value that cannot be framed or nests
    /// deeper than [`BinaryOptions::max_depth`] leaves the writer untouched.
    fn write<W: io::Write>(&self, value: &Value, mut writer: W) -> Result<()> {
        trace!("binary write: encoding {} value", value.kind());
        let mut encoder = Encoder::new(self.options.max_depth);
        let result = encoder.encode_value(value, 0);
        if let Err(e) = &result {
            trace!("binary write: encoding failed: {e:?}");
        }
        result?;
        writer.write_all(&encoder.out)?;
        trace!("binary write: {} bytes written", encoder.out.len());
        Ok(())
    }

    fn read<R: io::Read>(&self, mut reader: R) -> Result<Value> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        trace!("binary read: decoding {} bytes", input.len());

        let result = self.decode_prefix(&input).and_then(|(value, used)| {
            if used < input.len() {
                Err(Error::trailing_data(used))
            } else {
                Ok(value)
            }
        });
        match &result {
            Ok(value) => trace!("binary read: decoded {} value", value.kind()),
            Err(e) => trace!("binary read: decoding failed: {e:?}"),
        }
        result
    }
}

struct Encoder {
    out: Vec<u8>,
    max_depth: usize,
}

impl Encoder {
    fn new(max_depth: usize) -> Self {
        Encoder {
            out: Vec::new(),
            max_depth,
        }
    }

    /// `depth` counts the containers enclosing `value`, as in the decoder.
    fn encode_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        let start = self.out.len();
        self.out.push(value.kind().tag());
        match value {
            Value::Null => {}
            Value::Char(c) => {
                let byte = u8::try_from(u32::from(*c)).map_err(|_| {
                    Error::unencodable(format!("char {:?} does not fit in one byte", c))
                })?;
                self.out.push(byte);
            }
            Value::Bool(b) => self.out.push(u8::from(*b)),
            Value::Unsigned(n) => self.out.extend_from_slice(&n.to_ne_bytes()),
            Value::Signed(n) => self.out.extend_from_slice(&n.to_ne_bytes()),
            Value::Float(f) => self.out.extend_from_slice(&f.to_ne_bytes()),
            Value::Pointer(p) => self.out.extend_from_slice(&p.to_ne_bytes()),
            Value::String(s) => self.encode_str(s, "string")?,
            Value::Array(arr) => {
                enter(depth, self.max_depth, start)?;
                self.encode_len(arr.len(), "array")?;
                for element in arr {
                    self.encode_value(element, depth + 1)?;
                }
            }
            Value::Object(map) => {
                enter(depth, self.max_depth, start)?;
                self.encode_len(map.len(), "object")?;
                for (key, element) in map {
                    self.encode_str(key, "key")?;
                    self.encode_value(element, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    fn encode_str(&mut self, s: &str, what: &str) -> Result<()> {
        self.encode_len(s.len(), what)?;
        self.out.extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn encode_len(&mut self, len: usize, what: &str) -> Result<()> {
        let len = u16::try_from(len).map_err(|_| {
            Error::unencodable(format!(
                "{} of length {} exceeds the frame limit of {}",
                what,
                len,
                u16::MAX
            ))
        })?;
        self.out.extend_from_slice(&len.to_ne_bytes());
        Ok(())
    }
}

struct Decoder<'input> {
    input: &'input [u8],
    offset: usize,
    max_depth: usize,
}

impl<'input> Decoder<'input> {
    fn new(input: &'input [u8], max_depth: usize) -> Self {
        Decoder {
            input,
            offset: 0,
            max_depth,
        }
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Caps a declared entry count by how many entries of at least
    /// `min_entry` bytes the rest of the input can hold.
    fn capacity_for(&self, count: usize, min_entry: usize) -> usize {
        count.min(self.remaining() / min_entry)
    }

    fn take(&mut self, len: usize) -> Result<&'input [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(Error::truncated(self.offset, len - remaining));
        }
        let bytes = &self.input[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    fn decode_u8(&mut self) -> Result<u8> {
        let [byte] = self.take_array::<1>()?;
        Ok(byte)
    }

    fn decode_u16(&mut self) -> Result<u16> {
        Ok(u16::from_ne_bytes(self.take_array()?))
    }

    fn decode_str(&mut self) -> Result<String> {
        let len = usize::from(self.decode_u16()?);
        let start = self.offset;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::invalid_utf8(start))
    }

    /// `depth` counts the containers enclosing the value being decoded.
    fn decode_value(&mut self, depth: usize) -> Result<Value> {
        let start = self.offset;
        let tag = self.decode_u8()?;
        let kind = Kind::from_tag(tag).ok_or_else(|| Error::unknown_tag(start, tag))?;

        let value = match kind {
            Kind::Null => Value::Null,
            Kind::Char => Value::Char(char::from(self.decode_u8()?)),
            Kind::Bool => Value::Bool(self.decode_u8()? != 0),
            Kind::Unsigned => Value::Unsigned(u64::from_ne_bytes(self.take_array()?)),
            Kind::Signed => Value::Signed(i64::from_ne_bytes(self.take_array()?)),
            Kind::Float => Value::Float(f64::from_ne_bytes(self.take_array()?)),
            Kind::Pointer => Value::Pointer(usize::from_ne_bytes(self.take_array()?)),
            Kind::String => Value::String(self.decode_str()?),
            Kind::Array => {
                enter(depth, self.max_depth, start)?;
                let count = usize::from(self.decode_u16()?);
                // Each element is at least a tag byte.
                let mut items = Vec::with_capacity(self.capacity_for(count, 1));
                for _ in 0..count {
                    items.push(self.decode_value(depth + 1)?);
                }
                Value::Array(items)
            }
            Kind::Object => {
                enter(depth, self.max_depth, start)?;
                let count = usize::from(self.decode_u16()?);
                // Each member is at least a key length and a tag byte.
                let mut map = Map::with_capacity(self.capacity_for(count, 3));
                for _ in 0..count {
                    let key = self.decode_str()?;
                    let element = self.decode_value(depth + 1)?;
                    map.insert(key, element);
                }
                Value::Object(map)
            }
        };
        Ok(value)
    }
}

/// Refuses a container at `depth` enclosing containers once the limit is
/// reached. `offset` is where the container's tag sits.
fn enter(depth: usize, max_depth: usize, offset: usize) -> Result<()> {
    if depth >= max_depth {
        Err(Error::depth_limit(offset, max_depth))
    } else {
        Ok(())
    }
}
