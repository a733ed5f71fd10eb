//! Bencode Wire Format Reference
//!
//! This module documents the bencode format (BEP-3) as implemented by this
//! library. It contains no code; it exists so the grammar and the strictness
//! rules live next to the implementation.
//!
//! # Overview
//!
//! Bencode is a compact, self-delimiting binary serialization format built
//! from four primitive shapes. Every value is prefix-classified: the first
//! byte of an encoding determines its kind, and every primitive carries its
//! own length or terminator, so no out-of-band framing is needed.
//!
//! | Primitive   | Wire form                | Example                  |
//! |-------------|--------------------------|--------------------------|
//! | Byte-string | `<len>:<bytes>`          | `4:spam`                 |
//! | Integer     | `i<digits>e`             | `i42e`, `i-3e`, `i0e`    |
//! | List        | `l<elem>*e`              | `l4:spami42ee`           |
//! | Dictionary  | `d(<key><value>)*e`      | `d3:bar4:spam3:fooi42ee` |
//!
//! # Byte-strings
//!
//! A decimal length, a colon, then exactly that many raw bytes. The payload
//! is copied verbatim: no escaping, no encoding assumption, any byte value
//! allowed (including `e`, `:` and digits). The length itself must be
//! canonical — no leading zero except for length `0` (`0:` is the empty
//! byte-string).
//!
//! # Integers
//!
//! `i`, an optional `-`, one or more decimal digits, `e`. Arbitrary
//! precision: the format places no width limit on the digit run, and neither
//! does this implementation. Rejected as non-canonical:
//!
//! - `i03e` (leading zero; `i0e` is the only encoding of zero)
//! - `i-0e` (negative zero)
//! - `ie`, `i-e` (no digits)
//!
//! # Lists
//!
//! `l`, the concatenated encodings of the elements in order, `e`.
//!
//! # Dictionaries
//!
//! `d`, then key/value pairs, then `e`. Keys are byte-strings only. In
//! canonical form the pairs appear in ascending byte-wise key order.
//!
//! This implementation is lenient on the way in and strict on the way out:
//! the decoder accepts keys in any order and reports them as read, while
//! the encoder always re-sorts entries into canonical order. Consequently
//! `encode(decode(b)) == b` holds for every canonical buffer `b`, and any
//! decoded tree re-encodes to canonical form.
//!
//! # Failure modes
//!
//! Decoding rejects, with no partial result:
//!
//! - a leading byte that starts no primitive (`x...`)
//! - truncated or unterminated input (`4:sp`, `l4:spam`, `d3:foo`, `i42`)
//! - non-canonical integers and lengths (`i03e`, `i-0e`, `03:abc`)
//! - a length prefix exceeding the remaining buffer (`10:abc`)
//! - nesting beyond the decoder's depth ceiling
