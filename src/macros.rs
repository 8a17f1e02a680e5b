/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// `null`, `true`, `false`, `[...]` and `{"key": ...}` map to their
/// variants; any other token goes through [`to_value`](crate::to_value), so
/// integer literals follow their Rust type (`1` is an `i32`, hence signed).
///
/// # Examples
///
/// ```rust
/// use serial_value::{value, Value};
///
/// let v = value!({
///     "name": "Ada",
///     "tags": [1u8, 'x', null],
///     "nested": {}
/// });
///
/// assert_eq!(v.member("name").unwrap(), &Value::from("Ada"));
/// assert_eq!(v.member("tags").unwrap().at(0).unwrap(), &Value::Unsigned(1));
/// assert_eq!(v.member("tags").unwrap().at(1).unwrap(), &Value::Char('x'));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any serializable expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
