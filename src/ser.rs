//! Bencode serialization.
//!
//! This module provides the core [`encode`] function that serializes a
//! [`Value`] tree into canonical bencode, and the serde [`Serializer`] that
//! converts arbitrary Rust data structures into the same wire form.
//!
//! ## Canonical output
//!
//! The encoder always emits canonical form:
//!
//! - dictionary entries are sorted by raw key bytes at emission time, no
//!   matter what order the map (or struct definition) holds them in
//! - integers carry no redundant leading zeros and `-0` cannot be produced
//! - byte-string payloads are written verbatim, with no escaping
//!
//! The decoder preserves input key order; the encoder canonicalizes. This
//! asymmetry is what lets a map with non-canonical key order still
//! round-trip to a valid encoding.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_bencode::to_bytes;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Pair { foo: i64, bar: String }
//!
//! let pair = Pair { foo: 42, bar: "spam".to_string() };
//! let encoded = to_bytes(&pair).unwrap();
//! // Struct fields are re-sorted into canonical key order.
//! assert_eq!(encoded, b"d3:bar4:spam3:fooi42ee");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_bencode::Serializer;
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new();
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), b"li1ei2ei3ee");
//! ```

use crate::{BencodeMap, Error, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializes a [`Value`] tree into canonical bencode.
///
/// This is a pure function with no retained state; it cannot fail because
/// every [`Value`] variant is encodable.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{bencode, encode};
///
/// let value = bencode!({
///     "foo": 42,
///     "bar": "spam"
/// });
/// // Keys come out in ascending byte order regardless of insertion order.
/// assert_eq!(encode(&value), b"d3:bar4:spam3:fooi42ee");
/// ```
#[must_use]
pub fn encode(value: &Value) -> Vec<u8> {
    let mut output = Vec::with_capacity(128);
    write_value(&mut output, value);
    output
}

fn write_value(output: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Bytes(bytes) => write_byte_string(output, bytes),
        Value::Integer(n) => write_integer(output, n),
        Value::List(items) => {
            output.push(b'l');
            for item in items {
                write_value(output, item);
            }
            output.push(b'e');
        }
        Value::Dict(dict) => {
            output.push(b'd');
            let mut entries: Vec<(&[u8], &Value)> =
                dict.iter().map(|(k, v)| (k.as_slice(), v)).collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, value) in entries {
                write_byte_string(output, key);
                write_value(output, value);
            }
            output.push(b'e');
        }
    }
}

fn write_byte_string(output: &mut Vec<u8>, bytes: &[u8]) {
    output.extend_from_slice(bytes.len().to_string().as_bytes());
    output.push(b':');
    output.extend_from_slice(bytes);
}

fn write_integer(output: &mut Vec<u8>, n: &BigInt) {
    output.push(b'i');
    output.extend_from_slice(n.to_str_radix(10).as_bytes());
    output.push(b'e');
}

/// Buffers pre-encoded dictionary entries, then emits them in ascending
/// byte-wise key order. The sort is stable so repeated keys keep their
/// relative order.
fn write_sorted_entries(output: &mut Vec<u8>, mut entries: Vec<(Vec<u8>, Vec<u8>)>) {
    output.push(b'd');
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, encoded_value) in entries {
        write_byte_string(output, &key);
        output.extend_from_slice(&encoded_value);
    }
    output.push(b'e');
}

/// The bencode serializer.
///
/// Converts Rust values implementing `Serialize` into canonical bencode
/// bytes. Created via [`Serializer::new`].
pub struct Serializer {
    output: Vec<u8>,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        Serializer {
            output: Vec::with_capacity(256),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = TupleVariantSerializer<'a>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = StructVariantSerializer<'a>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(Error::unsupported_type("bencode has no boolean primitive"))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.output.push(b'i');
        self.output.extend_from_slice(v.to_string().as_bytes());
        self.output.push(b'e');
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        self.output.push(b'i');
        self.output.extend_from_slice(v.to_string().as_bytes());
        self.output.push(b'e');
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.output.push(b'i');
        self.output.extend_from_slice(v.to_string().as_bytes());
        self.output.push(b'e');
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        self.output.push(b'i');
        self.output.extend_from_slice(v.to_string().as_bytes());
        self.output.push(b'e');
        Ok(())
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(Error::unsupported_type("bencode has no float primitive"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(Error::unsupported_type("bencode has no float primitive"))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        write_byte_string(&mut self.output, v.as_bytes());
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        write_byte_string(&mut self.output, v);
        Ok(())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type(
            "bencode has no null; skip optional fields instead",
        ))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type("bencode has no unit value"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(Error::unsupported_type(&format!(
            "unit struct {} has no bencode representation",
            name
        )))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.output.push(b'd');
        write_byte_string(&mut self.output, variant.as_bytes());
        value.serialize(&mut *self)?;
        self.output.push(b'e');
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.output.push(b'l');
        Ok(SeqSerializer { ser: self })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.output.push(b'd');
        write_byte_string(&mut self.output, variant.as_bytes());
        self.output.push(b'l');
        Ok(TupleVariantSerializer { ser: self })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            entries: Vec::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer {
            ser: self,
            entries: Vec::new(),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(StructVariantSerializer {
            ser: self,
            variant,
            entries: Vec::new(),
        })
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

/// Encodes one value into a fresh buffer, for dictionary entries that must
/// be buffered before sorting.
fn encode_to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut nested = Serializer::new();
    value.serialize(&mut nested)?;
    Ok(nested.into_inner())
}

pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.output.push(b'e');
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

impl<'a> ser::SerializeTupleStruct for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

pub struct TupleVariantSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> ser::SerializeTupleVariant for TupleVariantSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        // Close the list, then the wrapping variant dictionary.
        self.ser.output.push(b'e');
        self.ser.output.push(b'e');
        Ok(())
    }
}

pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    current_key: Option<Vec<u8>>,
}

impl<'a> ser::SerializeMap for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entries.push((key, encode_to_vec(value)?));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        write_sorted_entries(&mut self.ser.output, self.entries);
        Ok(())
    }
}

pub struct StructSerializer<'a> {
    ser: &'a mut Serializer,
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl<'a> ser::SerializeStruct for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries
            .push((key.as_bytes().to_vec(), encode_to_vec(value)?));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        write_sorted_entries(&mut self.ser.output, self.entries);
        Ok(())
    }
}

pub struct StructVariantSerializer<'a> {
    ser: &'a mut Serializer,
    variant: &'static str,
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl<'a> ser::SerializeStructVariant for StructVariantSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries
            .push((key.as_bytes().to_vec(), encode_to_vec(value)?));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.output.push(b'd');
        write_byte_string(&mut self.ser.output, self.variant.as_bytes());
        write_sorted_entries(&mut self.ser.output, self.entries);
        self.ser.output.push(b'e');
        Ok(())
    }
}

/// Serializer for dictionary keys: only string- and byte-shaped values are
/// legal, everything else is an `UnsupportedType` error.
struct MapKeySerializer;

macro_rules! key_must_be_bytes {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, _v: $ty) -> Result<Vec<u8>> {
                Err(Error::unsupported_type(
                    "dictionary keys must be byte strings",
                ))
            }
        )*
    };
}

impl ser::Serializer for MapKeySerializer {
    type Ok = Vec<u8>;
    type Error = Error;

    type SerializeSeq = ser::Impossible<Vec<u8>, Error>;
    type SerializeTuple = ser::Impossible<Vec<u8>, Error>;
    type SerializeTupleStruct = ser::Impossible<Vec<u8>, Error>;
    type SerializeTupleVariant = ser::Impossible<Vec<u8>, Error>;
    type SerializeMap = ser::Impossible<Vec<u8>, Error>;
    type SerializeStruct = ser::Impossible<Vec<u8>, Error>;
    type SerializeStructVariant = ser::Impossible<Vec<u8>, Error>;

    fn serialize_str(self, v: &str) -> Result<Vec<u8>> {
        Ok(v.as_bytes().to_vec())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Vec<u8>> {
        Ok(v.to_vec())
    }

    fn serialize_char(self, v: char) -> Result<Vec<u8>> {
        Ok(v.to_string().into_bytes())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Vec<u8>> {
        Ok(variant.as_bytes().to_vec())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Vec<u8>>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    key_must_be_bytes! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
    }

    fn serialize_none(self) -> Result<Vec<u8>> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<Vec<u8>>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_unit(self) -> Result<Vec<u8>> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Vec<u8>> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Vec<u8>>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("dictionary keys must be byte strings"))
    }
}

/// Serializer with `Ok = Value`, backing [`to_value`](crate::to_value).
///
/// Builds a [`Value`] tree instead of bytes, applying the same data-model
/// restrictions as the byte serializer.
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = ValueSeqSerializer;
    type SerializeTuple = ValueSeqSerializer;
    type SerializeTupleStruct = ValueSeqSerializer;
    type SerializeTupleVariant = ValueTupleVariantSerializer;
    type SerializeMap = ValueMapSerializer;
    type SerializeStruct = ValueMapSerializer;
    type SerializeStructVariant = ValueStructVariantSerializer;

    fn serialize_bool(self, _v: bool) -> Result<Value> {
        Err(Error::unsupported_type("bencode has no boolean primitive"))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, _v: f32) -> Result<Value> {
        Err(Error::unsupported_type("bencode has no float primitive"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Value> {
        Err(Error::unsupported_type("bencode has no float primitive"))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Bytes(v.to_string().into_bytes()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type(
            "bencode has no null; skip optional fields instead",
        ))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("bencode has no unit value"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(Error::unsupported_type(&format!(
            "unit struct {} has no bencode representation",
            name
        )))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut dict = BencodeMap::new();
        dict.insert(variant, value.serialize(ValueSerializer)?);
        Ok(Value::Dict(dict))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ValueSeqSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(ValueTupleVariantSerializer {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(ValueMapSerializer {
            dict: BencodeMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(ValueMapSerializer {
            dict: BencodeMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(ValueStructVariantSerializer {
            variant,
            dict: BencodeMap::new(),
        })
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

pub struct ValueSeqSerializer {
    items: Vec<Value>,
}

impl ser::SerializeSeq for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.items))
    }
}

impl ser::SerializeTuple for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct ValueTupleVariantSerializer {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for ValueTupleVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut dict = BencodeMap::new();
        dict.insert(self.variant, Value::List(self.items));
        Ok(Value::Dict(dict))
    }
}

pub struct ValueMapSerializer {
    dict: BencodeMap,
    current_key: Option<Vec<u8>>,
}

impl ser::SerializeMap for ValueMapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.dict.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.dict))
    }
}

impl ser::SerializeStruct for ValueMapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.dict.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.dict))
    }
}

pub struct ValueStructVariantSerializer {
    variant: &'static str,
    dict: BencodeMap,
}

impl ser::SerializeStructVariant for ValueStructVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.dict.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = BencodeMap::new();
        outer.insert(self.variant, Value::Dict(self.dict));
        Ok(Value::Dict(outer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode;

    #[test]
    fn test_encoder_sorts_dictionary_keys() {
        let mut dict = BencodeMap::new();
        dict.insert("foo", Value::from(42));
        dict.insert("bar", Value::from("spam"));
        assert_eq!(encode(&Value::Dict(dict)), b"d3:bar4:spam3:fooi42ee");
    }

    #[test]
    fn test_key_sort_is_bytewise_not_lexical() {
        // Shorter key that is a prefix of a longer one sorts first; sorting
        // compares raw bytes, never text.
        let value = bencode!({
            "spam": 1,
            "spa": 2
        });
        assert_eq!(encode(&value), b"d3:spai2e4:spami1ee");
    }

    #[test]
    fn test_encode_negative_and_zero() {
        assert_eq!(encode(&Value::from(-3)), b"i-3e");
        assert_eq!(encode(&Value::from(0)), b"i0e");
    }

    #[test]
    fn test_encode_empty_primitives() {
        assert_eq!(encode(&Value::from("")), b"0:");
        assert_eq!(encode(&Value::List(vec![])), b"le");
        assert_eq!(encode(&Value::Dict(BencodeMap::new())), b"de");
    }
}
