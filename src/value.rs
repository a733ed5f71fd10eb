//! Dynamic value representation for bencode data.
//!
//! This module provides the [`Value`] enum which represents any valid bencode
//! value. It's useful for working with bencode data when the structure isn't
//! known at compile time — most notably torrent metainfo, where dictionaries
//! mix text-shaped keys with opaque binary payloads.
//!
//! ## Core Type
//!
//! [`Value`] is a closed tagged union over exactly the four wire shapes:
//! byte-strings, arbitrary-precision integers, lists, and dictionaries.
//! Every operation on it is an exhaustive `match`, so the compiler guarantees
//! each primitive kind is handled.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_bencode::Value;
//!
//! // From primitives. Text becomes raw bytes at the boundary; nothing
//! // inside the codec depends on a text encoding.
//! let integer = Value::from(42);
//! let text = Value::from("spam");
//! let raw = Value::from(vec![0u8, 1, 2]);
//!
//! // Using the bencode! macro
//! use serde_bencode::bencode;
//! let dict = bencode!({
//!     "bar": "spam",
//!     "foo": 42
//! });
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_bencode::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_integer());
//! assert_eq!(value.as_i64(), Some(42));
//!
//! let value = Value::from("spam");
//! assert_eq!(value.as_bytes(), Some(&b"spam"[..]));
//! assert_eq!(value.as_str(), Some("spam"));
//! ```

use crate::BencodeMap;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any valid bencode value.
///
/// This enum can represent any value the wire format admits. It's
/// particularly useful when:
///
/// - The structure isn't known at compile time (arbitrary torrent files)
/// - You need to inspect or manipulate bencode data generically
/// - Building bencode structures programmatically
///
/// Integers are arbitrary-precision ([`BigInt`]): the format places no width
/// limit on digit sequences, and this type does not either.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::Value;
///
/// let bytes = Value::from("spam");
/// let num = Value::from(42);
///
/// assert!(bytes.is_bytes());
/// assert!(num.is_integer());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An opaque sequence of raw bytes. Not required to be valid text.
    Bytes(Vec<u8>),
    /// An arbitrary-precision signed integer.
    Integer(BigInt),
    /// An ordered, possibly-empty sequence of values.
    List(Vec<Value>),
    /// A mapping from byte-string keys to values.
    Dict(BencodeMap),
}

impl Value {
    /// Returns `true` if the value is a byte-string.
    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a dictionary.
    #[inline]
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// If the value is a byte-string, returns it as a slice. Otherwise
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::Value;
    ///
    /// assert_eq!(Value::from("spam").as_bytes(), Some(&b"spam"[..]));
    /// assert_eq!(Value::from(42).as_bytes(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// If the value is a byte-string holding valid UTF-8, returns it as
    /// `&str`. Otherwise returns `None`.
    ///
    /// This is a boundary convenience only; comparisons and key ordering
    /// inside the codec always work on raw bytes.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// If the value is an integer, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is an integer that fits in an `i64`, returns it.
    /// Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::{decode, Value};
    ///
    /// assert_eq!(Value::from(42).as_i64(), Some(42));
    /// // Values beyond the i64 range are still held exactly; they just
    /// // don't fit this window.
    /// let big = decode(b"i99999999999999999999e").unwrap();
    /// assert_eq!(big.as_i64(), None);
    /// assert!(big.as_integer().is_some());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to it. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a dictionary, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&BencodeMap> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders a human-oriented view of the value. Byte-strings are shown
    /// lossily as text; this is for diagnostics, not for the wire.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(b) => write!(f, "\"{}\"", String::from_utf8_lossy(b)),
            Value::Integer(n) => write!(f, "{}", n),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Dict(dict) => {
                write!(f, "{{")?;
                for (i, (key, value)) in dict.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", String::from_utf8_lossy(key), value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// From implementations for creating Value from primitives

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Bytes(value.into_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

macro_rules! value_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BencodeMap> for Value {
    fn from(value: BencodeMap) -> Self {
        Value::Dict(value)
    }
}

// TryFrom implementations for extracting values from Value

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(n) => i64::try_from(&n)
                .map_err(|_| crate::Error::custom(format!("integer {} does not fit in i64", n))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for BigInt {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected byte string, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bytes(b) => {
                String::from_utf8(b).map_err(|_| crate::Error::custom("byte string is not UTF-8"))
            }
            _ => Err(crate::Error::custom(format!(
                "expected byte string, found {:?}",
                value
            ))),
        }
    }
}

/// Wrapper forcing a dictionary key to serialize via `serialize_bytes`.
///
/// `Vec<u8>` serializes as a sequence under serde's blanket impl, which is
/// not a legal dictionary key on any bencode path.
struct RawKey<'a>(&'a [u8]);

impl Serialize for RawKey<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.0)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Integer(n) => {
                if let Ok(v) = i64::try_from(n) {
                    serializer.serialize_i64(v)
                } else if let Ok(v) = u64::try_from(n) {
                    serializer.serialize_u64(v)
                } else if let Ok(v) = i128::try_from(n) {
                    serializer.serialize_i128(v)
                } else if let Ok(v) = u128::try_from(n) {
                    serializer.serialize_u128(v)
                } else {
                    // The serde data model tops out at 128 bits; larger
                    // integers only travel through encode()/decode().
                    Err(serde::ser::Error::custom(format!(
                        "integer {} exceeds the serde data model; use serde_bencode::encode",
                        n
                    )))
                }
            }
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(dict) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict.iter() {
                    map.serialize_entry(&RawKey(key), value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid bencode value")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value.as_bytes().to_vec()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value.into_bytes()))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value.to_vec()))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut dict = BencodeMap::new();
                while let Some((key, value)) = map.next_entry::<Value, Value>()? {
                    match key {
                        Value::Bytes(k) => {
                            dict.insert(k, value);
                        }
                        other => {
                            return Err(de::Error::custom(format!(
                                "dictionary keys must be byte strings, found {:?}",
                                other
                            )))
                        }
                    }
                }
                Ok(Value::Dict(dict))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(42i32), Value::Integer(BigInt::from(42)));
        assert_eq!(Value::from(42u64), Value::Integer(BigInt::from(42)));
        assert_eq!(Value::from("spam"), Value::Bytes(b"spam".to_vec()));
        assert_eq!(
            Value::from("spam".to_string()),
            Value::Bytes(b"spam".to_vec())
        );
        assert_eq!(Value::from(vec![0u8, 1, 2]), Value::Bytes(vec![0, 1, 2]));
        assert_eq!(Value::from(b"spam"), Value::Bytes(b"spam".to_vec()));
    }

    #[test]
    fn test_from_collections() {
        let list = vec![Value::from(1), Value::from(2)];
        assert_eq!(Value::from(list.clone()), Value::List(list));

        let mut map = BencodeMap::new();
        map.insert("key", Value::from(42));
        assert_eq!(Value::from(map.clone()), Value::Dict(map));
    }

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::from(42);
        let n: i64 = i64::try_from(value).unwrap();
        assert_eq!(n, 42);

        let huge = Value::Integer("99999999999999999999".parse::<BigInt>().unwrap());
        assert!(i64::try_from(huge).is_err());

        assert!(i64::try_from(Value::from("spam")).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let value = Value::from("spam");
        assert_eq!(String::try_from(value).unwrap(), "spam");

        let raw = Value::Bytes(vec![0xff, 0xfe]);
        assert!(String::try_from(raw).is_err());
    }

    #[test]
    fn test_as_str_requires_utf8() {
        assert_eq!(Value::from("spam").as_str(), Some("spam"));
        assert_eq!(Value::Bytes(vec![0xff]).as_str(), None);
        assert_eq!(Value::Bytes(vec![0xff]).as_bytes(), Some(&[0xff][..]));
    }

    #[test]
    fn test_accessors() {
        let value = Value::from(42);
        assert!(value.is_integer());
        assert!(!value.is_bytes());
        assert_eq!(value.as_i64(), Some(42));
        assert_eq!(value.as_list(), None);
    }

    #[test]
    fn test_display() {
        let mut map = BencodeMap::new();
        map.insert("foo", Value::from(42));
        let value = Value::List(vec![Value::from("spam"), Value::Dict(map)]);
        assert_eq!(value.to_string(), "[\"spam\", {\"foo\": 42}]");
    }
}
