//! Bencode deserialization.
//!
//! This module provides the core [`decode`] function that parses a byte
//! buffer into a [`Value`] tree, and the serde [`Deserializer`] built over
//! the same cursor for deserializing into arbitrary Rust types.
//!
//! ## Overview
//!
//! - **Single-pass parsing**: one recursive descent over the buffer, no
//!   backtracking, cursor advanced past each consumed primitive
//! - **Strict validation**: non-canonical encodings (leading zeros, `-0`)
//!   are rejected, never normalized
//! - **All-or-nothing**: any failure aborts the whole call with a positioned
//!   [`Error`](crate::Error); there is no partial result
//! - **Zero-copy**: byte-string payloads are borrowed from the input on the
//!   serde path
//!
//! ## Usage
//!
//! ```rust
//! use serde_bencode::{decode, from_slice};
//! use serde::Deserialize;
//!
//! // Dynamic: parse into a Value tree.
//! let value = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
//! assert_eq!(value.as_dict().unwrap().get(b"foo").unwrap().as_i64(), Some(42));
//!
//! // Typed: deserialize into a struct.
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Pair { bar: String, foo: i64 }
//!
//! let pair: Pair = from_slice(b"d3:bar4:spam3:fooi42ee").unwrap();
//! assert_eq!(pair, Pair { bar: "spam".to_string(), foo: 42 });
//! ```

use crate::{BencodeMap, Error, Result, Value};
use num_bigint::BigInt;
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// Ceiling on list/dictionary nesting.
///
/// Recursion depth is otherwise bounded only by input nesting, and a buffer
/// of a few kilobytes of `l` bytes would exhaust the call stack.
const MAX_DEPTH: usize = 2048;

/// Parses exactly one bencode value starting at offset 0 of `input`.
///
/// Trailing bytes after the complete value are ignored; decoding consumes
/// one top-level primitive and stops.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{decode, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::from(42));
/// assert_eq!(decode(b"4:spam").unwrap(), Value::from("spam"));
/// assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
/// ```
///
/// # Errors
///
/// Returns an error if the buffer is empty, truncated, or contains a
/// non-canonical or malformed encoding. See [`Error`](crate::Error) for the
/// full taxonomy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &[u8]) -> Result<Value> {
    let mut deserializer = Deserializer::from_slice(input);
    deserializer.parse_value()
}

/// The bencode deserializer.
///
/// Holds the input buffer and the single mutable cursor shared by every
/// recursive call within one parse. The cursor is threaded by `&mut self`,
/// never ambient state, so concurrent parses on separate instances cannot
/// interfere.
pub struct Deserializer<'de> {
    input: &'de [u8],
    position: usize,
    depth: usize,
}

impl<'de> Deserializer<'de> {
    pub fn from_slice(input: &'de [u8]) -> Self {
        Deserializer {
            input,
            position: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::NestingTooDeep {
                offset: self.position,
                limit: MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Parses one value at the cursor, dispatching on the leading byte.
    pub(crate) fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'd') => self.parse_dict().map(Value::Dict),
            Some(b'l') => self.parse_list().map(Value::List),
            Some(b'i') => self.parse_integer().map(Value::Integer),
            Some(b'0'..=b'9') => self.parse_byte_string().map(|b| Value::Bytes(b.to_vec())),
            Some(byte) => Err(Error::MalformedLeadingByte {
                offset: self.position,
                byte,
            }),
            None => Err(Error::unterminated(self.position, "a value")),
        }
    }

    fn parse_dict(&mut self) -> Result<BencodeMap> {
        let start = self.position;
        self.position += 1; // 'd'
        self.descend()?;

        let mut dict = BencodeMap::new();
        loop {
            match self.peek() {
                Some(b'e') => {
                    self.position += 1;
                    self.ascend();
                    return Ok(dict);
                }
                Some(b'0'..=b'9') => {
                    let key = self.parse_byte_string()?.to_vec();
                    let value = self.parse_value()?;
                    // Wire order is preserved as read. A repeated key keeps
                    // its first position and takes the last value.
                    dict.insert(key, value);
                }
                Some(byte) => {
                    // Keys are byte-strings only, so anything but a digit
                    // (or the terminator) is malformed here.
                    return Err(Error::MalformedLeadingByte {
                        offset: self.position,
                        byte,
                    });
                }
                None => return Err(Error::unterminated(start, "'e' closing a dictionary")),
            }
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Value>> {
        let start = self.position;
        self.position += 1; // 'l'
        self.descend()?;

        let mut items = Vec::new();
        loop {
            match self.peek() {
                Some(b'e') => {
                    self.position += 1;
                    self.ascend();
                    return Ok(items);
                }
                Some(_) => items.push(self.parse_value()?),
                None => return Err(Error::unterminated(start, "'e' closing a list")),
            }
        }
    }

    /// Parses `i<digits>e` with canonical validation: no empty digit run,
    /// no leading zero except the literal `0`, no `-0`.
    fn parse_integer(&mut self) -> Result<BigInt> {
        let start = self.position;
        self.position += 1; // 'i'

        let negative = if self.peek() == Some(b'-') {
            self.position += 1;
            true
        } else {
            false
        };

        let digits_start = self.position;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.position += 1;
        }
        let digits = &self.input[digits_start..self.position];

        match self.peek() {
            Some(b'e') => {}
            Some(byte) => {
                return Err(Error::invalid_integer(
                    self.position,
                    &format!("unexpected byte 0x{:02x} before 'e'", byte),
                ))
            }
            None => return Err(Error::unterminated(start, "'e' closing an integer")),
        }

        if digits.is_empty() {
            return Err(Error::invalid_integer(
                digits_start,
                "expected at least one digit",
            ));
        }
        if negative && digits[0] == b'0' {
            return Err(Error::invalid_integer(
                digits_start,
                "negative zero is not representable",
            ));
        }
        if digits[0] == b'0' && digits.len() > 1 {
            return Err(Error::invalid_integer(digits_start, "leading zero"));
        }

        self.position += 1; // 'e'

        let magnitude = BigInt::parse_bytes(digits, 10)
            .ok_or_else(|| Error::invalid_integer(digits_start, "unparseable digits"))?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Parses `<len>:<bytes>`, borrowing the payload from the input.
    ///
    /// The payload is taken verbatim; it may contain any byte value,
    /// including `e`, `:` and digits.
    fn parse_byte_string(&mut self) -> Result<&'de [u8]> {
        let start = self.position;

        let digits_start = self.position;
        let mut length: usize = 0;
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            length = length
                .checked_mul(10)
                .and_then(|n| n.checked_add(usize::from(byte - b'0')))
                .ok_or_else(|| Error::invalid_length(start, "length prefix overflows usize"))?;
            self.position += 1;
        }
        let digits = &self.input[digits_start..self.position];

        if digits.is_empty() {
            return Err(match self.peek() {
                Some(byte) => Error::MalformedLeadingByte {
                    offset: start,
                    byte,
                },
                None => Error::unterminated(start, "a byte string length"),
            });
        }
        if digits[0] == b'0' && digits.len() > 1 {
            return Err(Error::invalid_length(start, "leading zero"));
        }

        match self.peek() {
            Some(b':') => self.position += 1,
            Some(byte) => {
                return Err(Error::invalid_length(
                    self.position,
                    &format!("expected ':' after length, found 0x{:02x}", byte),
                ))
            }
            None => return Err(Error::unterminated(start, "':' after a byte string length")),
        }

        let remaining = self.input.len() - self.position;
        if length > remaining {
            return Err(Error::TruncatedPayload {
                offset: start,
                needed: length,
                remaining,
            });
        }

        let payload = &self.input[self.position..self.position + length];
        self.position += length;
        Ok(payload)
    }

    /// Parses a byte string and checks it for UTF-8, for `str`-shaped
    /// targets.
    fn parse_str(&mut self) -> Result<&'de str> {
        let start = self.position;
        let bytes = self.parse_byte_string()?;
        std::str::from_utf8(bytes).map_err(|_| {
            Error::custom(format!("byte string at offset {} is not UTF-8", start))
        })
    }

    /// Consumes the `e` that closes the container the visitor just drained.
    fn expect_close(&mut self, expected: &str) -> Result<()> {
        match self.peek() {
            Some(b'e') => {
                self.position += 1;
                Ok(())
            }
            Some(_) => Err(Error::custom(format!(
                "container not fully consumed at offset {}",
                self.position
            ))),
            None => Err(Error::unterminated(self.position, expected)),
        }
    }
}

/// Surfaces an arbitrary-precision integer through the widest serde window
/// it fits. Values beyond `u128` only travel through [`decode`].
fn visit_integer<'de, V>(n: BigInt, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    if let Ok(v) = i64::try_from(&n) {
        visitor.visit_i64(v)
    } else if let Ok(v) = u64::try_from(&n) {
        visitor.visit_u64(v)
    } else if let Ok(v) = i128::try_from(&n) {
        visitor.visit_i128(v)
    } else if let Ok(v) = u128::try_from(&n) {
        visitor.visit_u128(v)
    } else {
        Err(Error::custom(format!(
            "integer {} exceeds the serde data model; use serde_bencode::decode",
            n
        )))
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.peek() {
            Some(b'i') => {
                let n = self.parse_integer()?;
                visit_integer(n, visitor)
            }
            Some(b'0'..=b'9') => {
                let bytes = self.parse_byte_string()?;
                visitor.visit_borrowed_bytes(bytes)
            }
            Some(b'l') => {
                self.position += 1;
                self.descend()?;
                let value = visitor.visit_seq(ListAccess { de: &mut *self })?;
                self.ascend();
                self.expect_close("'e' closing a list")?;
                Ok(value)
            }
            Some(b'd') => {
                self.position += 1;
                self.descend()?;
                let value = visitor.visit_map(DictAccess { de: &mut *self })?;
                self.ascend();
                self.expect_close("'e' closing a dictionary")?;
                Ok(value)
            }
            Some(byte) => Err(Error::MalformedLeadingByte {
                offset: self.position,
                byte,
            }),
            None => Err(Error::unterminated(self.position, "a value")),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.parse_str()?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.parse_byte_string()?)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    /// Bencode has no null; a value that is present is always `Some`.
    /// Missing dictionary entries surface as `None` through serde's
    /// missing-field handling.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    /// Externally tagged: a unit variant is a bare byte-string, any other
    /// variant is a single-entry dictionary keyed by the variant name.
    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.peek() {
            Some(b'0'..=b'9') => {
                let variant = self.parse_str()?;
                visitor.visit_enum(variant.into_deserializer())
            }
            Some(b'd') => {
                self.position += 1;
                let value = visitor.visit_enum(EnumAccess { de: &mut *self })?;
                self.expect_close("'e' closing an enum dictionary")?;
                Ok(value)
            }
            Some(byte) => Err(Error::MalformedLeadingByte {
                offset: self.position,
                byte,
            }),
            None => Err(Error::unterminated(self.position, "an enum value")),
        }
    }

    fn is_human_readable(&self) -> bool {
        false
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 unit unit_struct
        seq tuple tuple_struct map struct ignored_any
    }
}

struct ListAccess<'a, 'de: 'a> {
    de: &'a mut Deserializer<'de>,
}

impl<'de, 'a> de::SeqAccess<'de> for ListAccess<'a, 'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.de.peek() {
            Some(b'e') => Ok(None),
            Some(_) => seed.deserialize(&mut *self.de).map(Some),
            None => Err(Error::unterminated(self.de.position, "'e' closing a list")),
        }
    }
}

struct DictAccess<'a, 'de: 'a> {
    de: &'a mut Deserializer<'de>,
}

impl<'de, 'a> de::MapAccess<'de> for DictAccess<'a, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.de.peek() {
            Some(b'e') => Ok(None),
            Some(b'0'..=b'9') => seed.deserialize(&mut *self.de).map(Some),
            Some(byte) => Err(Error::MalformedLeadingByte {
                offset: self.de.position,
                byte,
            }),
            None => Err(Error::unterminated(
                self.de.position,
                "'e' closing a dictionary",
            )),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        seed.deserialize(&mut *self.de)
    }
}

struct EnumAccess<'a, 'de: 'a> {
    de: &'a mut Deserializer<'de>,
}

impl<'de, 'a> de::EnumAccess<'de> for EnumAccess<'a, 'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(&mut *self.de)?;
        Ok((variant, self))
    }
}

impl<'de, 'a> de::VariantAccess<'de> for EnumAccess<'a, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Err(Error::custom(
            "unit variants are encoded as bare byte strings, not dictionaries",
        ))
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(&mut *self.de)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        serde::Deserializer::deserialize_seq(&mut *self.de, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        serde::Deserializer::deserialize_map(&mut *self.de, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_after_one_value() {
        let mut de = Deserializer::from_slice(b"i42etrailing");
        let value = de.parse_value().unwrap();
        assert_eq!(value, Value::from(42));
        assert_eq!(de.position, 4);
    }

    #[test]
    fn test_payload_may_contain_any_bytes() {
        // The payload is read by count, never by scanning for markers.
        let value = decode(b"7:e:il0d9").unwrap();
        assert_eq!(value, Value::Bytes(b"e:il0d9".to_vec()));
    }

    #[test]
    fn test_depth_ceiling() {
        let input = vec![b'l'; MAX_DEPTH + 10];
        let err = decode(&input).unwrap_err();
        assert!(matches!(err, Error::NestingTooDeep { .. }));
    }

    #[test]
    fn test_nesting_below_ceiling_is_fine() {
        let mut input = vec![b'l'; 100];
        input.extend(std::iter::repeat(b'e').take(100));
        assert!(decode(&input).is_ok());
    }
}
