//! # serde_bencode
//!
//! A Serde-compatible serialization library for bencode, the binary format
//! used by BitTorrent (BEP-3).
//!
//! ## What is bencode?
//!
//! Bencode is a compact, self-delimiting binary format built from exactly
//! four primitive shapes: byte-strings, integers, lists, and dictionaries.
//! Torrent metainfo files, tracker responses, and most of the BitTorrent
//! wire protocol are bencoded.
//!
//! | Primitive   | Wire form           | Example                  |
//! |-------------|---------------------|--------------------------|
//! | Byte-string | `<len>:<bytes>`     | `4:spam`                 |
//! | Integer     | `i<digits>e`        | `i42e`, `i-3e`, `i0e`    |
//! | List        | `l<elem>*e`         | `l4:spami42ee`           |
//! | Dictionary  | `d(<key><value>)*e` | `d3:bar4:spam3:fooi42ee` |
//!
//! ## Key Features
//!
//! - **Strict decoding**: non-canonical encodings (leading zeros, `-0`,
//!   truncated payloads) are rejected with positioned errors, never
//!   silently normalized
//! - **Canonical encoding**: dictionary keys are always emitted in ascending
//!   byte-wise order, so `encode(decode(b)) == b` for every canonical buffer
//! - **Arbitrary precision**: integers are [`num_bigint::BigInt`]; the
//!   format has no width limit and neither does this crate
//! - **Binary-safe**: byte-strings carry raw bytes; nothing depends on a
//!   text encoding
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_bencode = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Typed Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_bencode::{to_bytes, from_slice};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Peer {
//!     ip: String,
//!     port: u16,
//! }
//!
//! let peer = Peer {
//!     ip: "10.0.0.1".to_string(),
//!     port: 6881,
//! };
//!
//! let encoded = to_bytes(&peer).unwrap();
//! assert_eq!(encoded, b"d2:ip8:10.0.0.14:porti6881ee");
//!
//! let peer_back: Peer = from_slice(&encoded).unwrap();
//! assert_eq!(peer, peer_back);
//! ```
//!
//! ### Dynamic Values
//!
//! When the structure isn't known at compile time, decode into a
//! [`Value`] tree:
//!
//! ```rust
//! use serde_bencode::{decode, encode};
//!
//! let value = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
//! let dict = value.as_dict().unwrap();
//! assert_eq!(dict.get(b"bar").unwrap().as_str(), Some("spam"));
//! assert_eq!(dict.get(b"foo").unwrap().as_i64(), Some(42));
//!
//! // Re-encoding a decoded canonical buffer reproduces it byte for byte.
//! assert_eq!(encode(&value), b"d3:bar4:spam3:fooi42ee");
//! ```
//!
//! ### Building Values with the bencode! Macro
//!
//! ```rust
//! use serde_bencode::{bencode, encode};
//!
//! let value = bencode!({
//!     "announce": "http://tracker.example/announce",
//!     "info": {
//!         "name": "example.txt",
//!         "length": 1024
//!     }
//! });
//! let bytes = encode(&value);
//! ```
//!
//! ## Data Model
//!
//! Bencode has no booleans, floats, or null. Serializing such a value is a
//! contract violation and fails fast with
//! [`Error::UnsupportedType`](crate::Error::UnsupportedType) rather than
//! silently coercing. `Option` fields should use
//! `#[serde(skip_serializing_if = "Option::is_none")]`.
//!
//! Integers wider than 128 bits round-trip exactly through
//! [`decode`]/[`encode`]; the serde path is limited to the data model's
//! 128-bit windows.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing is bounds-checked
//! - Decoding is all-or-nothing: a failed parse returns an error, never a
//!   partial tree
//! - Adversarially nested input is stopped by a recursion depth ceiling
//!   instead of exhausting the call stack

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod ser;
pub mod value;

pub use de::{decode, Deserializer};
pub use error::{Error, Result};
pub use map::BencodeMap;
pub use ser::{encode, Serializer, ValueSerializer};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to bencode bytes.
///
/// Dictionary entries (including struct fields) are emitted in canonical
/// ascending key order regardless of declaration order.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::to_bytes;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_bytes(&point).unwrap(), b"d1:xi1e1:yi2ee");
/// ```
///
/// # Errors
///
/// Returns an error if the value falls outside the bencode data model
/// (booleans, floats, null).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for inspecting or amending data dynamically before encoding.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_dict());
/// ```
///
/// # Errors
///
/// Returns an error if the value falls outside the bencode data model.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as bencode into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_bytes(value)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from bencode bytes.
///
/// Byte-string contents are borrowed from the input where the target type
/// allows it.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"d1:xi1e1:yi2ee").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed canonical bencode or
/// cannot be deserialized to type `T`. Error messages carry byte offsets.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(input: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_slice(input);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an I/O stream of bencode.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"d1:xi1e1:yi2ee");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid bencode, or
/// the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Peer {
        ip: String,
        port: u16,
        id: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: -2 };
        let bytes = to_bytes(&point).unwrap();
        let point_back: Point = from_slice(&bytes).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_peer() {
        let peer = Peer {
            ip: "10.0.0.1".to_string(),
            port: 6881,
            id: vec!["ab".to_string(), "cd".to_string()],
        };

        let bytes = to_bytes(&peer).unwrap();
        let peer_back: Peer = from_slice(&bytes).unwrap();
        assert_eq!(peer, peer_back);
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Dict(dict) => {
                assert_eq!(dict.get(b"x"), Some(&Value::from(1)));
                assert_eq!(dict.get(b"y"), Some(&Value::from(2)));
            }
            _ => panic!("Expected dictionary"),
        }
    }

    #[test]
    fn test_lists() {
        let numbers = vec![1, 2, 3, 4, 5];
        let bytes = to_bytes(&numbers).unwrap();
        assert_eq!(bytes, b"li1ei2ei3ei4ei5ee");
        let numbers_back: Vec<i32> = from_slice(&bytes).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_writer_reader_round_trip() {
        let point = Point { x: 7, y: 9 };
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &point).unwrap();
        let point_back: Point = from_reader(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_encode_decode_are_inverses() {
        let value = bencode!({
            "bar": "spam",
            "foo": 42
        });
        let bytes = encode(&value);
        assert_eq!(decode(&bytes).unwrap(), value);
    }
}
