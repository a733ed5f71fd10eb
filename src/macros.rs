/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Byte-string keys and values accept string literals, byte-string literals
/// (`b"..."`), and any expression with a `From` conversion into `Value`.
///
/// ```rust
/// use serde_bencode::{bencode, encode};
///
/// let value = bencode!({
///     "foo": 42,
///     "bar": "spam",
///     "baz": [1, 2, 3]
/// });
/// assert_eq!(encode(&value), b"d3:bar4:spam3:bazli1ei2ei3ee3:fooi42ee");
/// ```
#[macro_export]
macro_rules! bencode {
    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::bencode!($elem)),*])
    };

    // Handle empty dictionary
    ({}) => {
        $crate::Value::Dict($crate::BencodeMap::new())
    };

    // Handle non-empty dictionary
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dict = $crate::BencodeMap::new();
        $(
            dict.insert($key, $crate::bencode!($value));
        )*
        $crate::Value::Dict(dict)
    }};

    // Fallback: anything with a From conversion into Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
