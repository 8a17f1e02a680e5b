//! Configuration options for the codecs.
//!
//! - [`JsonOptions`]: layout, comma strictness and nesting limit of the JSON codec
//! - [`BinaryOptions`]: nesting limit of the binary codec
//!
//! ## Examples
//!
//! ```rust
//! use serial_value::{Format, Json, JsonOptions, Value};
//!
//! let json = Json::with_options(JsonOptions::fancy().with_max_depth(16));
//! let value = Value::from(vec![Value::from(1u8)]);
//! let text = String::from_utf8(json.to_vec(&value).unwrap()).unwrap();
//! assert_eq!(text, "[\n\t1\n]");
//! ```

/// Nesting depth both codecs accept unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the JSON codec.
///
/// # Examples
///
/// ```rust
/// use serial_value::JsonOptions;
///
/// // Compact, permissive commas
/// let options = JsonOptions::new();
/// assert!(!options.fancy);
/// assert!(!options.strict);
///
/// // One member per line, tab indentation
/// let options = JsonOptions::fancy();
///
/// // Custom configuration
/// let options = JsonOptions::new()
///     .with_strict(true)
///     .with_max_depth(32);
/// assert_eq!(options.max_depth, 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    /// Put each array element and object member on its own line.
    pub fancy: bool,
    /// Reject leading, trailing, repeated and missing commas.
    pub strict: bool,
    pub max_depth: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            fancy: false,
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output, permissive commas, depth 128).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for indented output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::JsonOptions;
    ///
    /// let options = JsonOptions::fancy();
    /// assert!(options.fancy);
    /// ```
    #[must_use]
    pub fn fancy() -> Self {
        JsonOptions {
            fancy: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_fancy(mut self, fancy: bool) -> Self {
        self.fancy = fancy;
        self
    }

    /// Sets strict comma handling for the reader.
    ///
    /// The default reader tolerates `[,1,,2,]` and `[1 2]`; strict mode
    /// requires exactly one comma between members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_value::{Format, Json, JsonOptions};
    ///
    /// assert!(Json::new().from_slice(b"[1,,2]").is_ok());
    /// let strict = Json::with_options(JsonOptions::new().with_strict(true));
    /// assert!(strict.from_slice(b"[1,,2]").is_err());
    /// ```
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the deepest array/object nesting the reader accepts.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Configuration options for the binary codec.
///
/// # Examples
///
/// ```rust
/// use serial_value::BinaryOptions;
///
/// let options = BinaryOptions::new().with_max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryOptions {
    pub max_depth: usize,
}

impl Default for BinaryOptions {
    fn default() -> Self {
        BinaryOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BinaryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest array/object nesting the reader accepts.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
