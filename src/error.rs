//! Error types for bencode serialization and deserialization.
//!
//! This module provides the single error taxonomy shared by the decoder and
//! the serde layer. Every decode failure is surfaced as a distinct variant
//! carrying the byte offset at which it was detected; nothing is silently
//! recovered and no partial value is ever returned.
//!
//! ## Error Categories
//!
//! - **Wire errors**: malformed leading bytes, unterminated containers,
//!   non-canonical integer or length encodings, truncated payloads
//! - **Hardening**: nesting depth ceiling exceeded
//! - **Serialization errors**: values outside the bencode data model
//!   (floats, booleans, null)
//! - **I/O errors**: reader/writer adapter failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_bencode::{decode, Error};
//!
//! // Leading zeros are not canonical and must be rejected.
//! let err = decode(b"i03e").unwrap_err();
//! assert!(matches!(err, Error::InvalidIntegerLiteral { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during bencode
/// serialization/deserialization.
///
/// Decode variants carry the byte offset into the input buffer at which the
/// problem was detected.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The byte at the cursor starts no primitive valid in this position.
    #[error("malformed leading byte 0x{byte:02x} at offset {offset}")]
    MalformedLeadingByte { offset: usize, byte: u8 },

    /// Input ended while a list, dictionary, integer or length prefix was
    /// still awaiting its terminator.
    #[error("unexpected end of input at offset {offset}: expected {expected}")]
    UnterminatedContainer { offset: usize, expected: String },

    /// Non-canonical or malformed integer literal (leading zero, `-0`,
    /// missing digits, or a stray byte before the terminating `e`).
    #[error("invalid integer literal at offset {offset}: {message}")]
    InvalidIntegerLiteral { offset: usize, message: String },

    /// Non-canonical or malformed byte-string length prefix.
    #[error("invalid length prefix at offset {offset}: {message}")]
    InvalidLengthPrefix { offset: usize, message: String },

    /// A byte-string length prefix requests more bytes than remain.
    #[error("truncated payload at offset {offset}: length prefix declares {needed} bytes but only {remaining} remain")]
    TruncatedPayload {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Nesting exceeded the decoder's depth ceiling.
    #[error("nesting too deep at offset {offset}: exceeded {limit} levels")]
    NestingTooDeep { offset: usize, limit: usize },

    /// Attempted to serialize a value outside the bencode data model.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used for serde type mismatches.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unterminated-container error at the given offset.
    ///
    /// `expected` names the terminator or token the decoder was waiting for,
    /// e.g. `"'e' closing a list"`.
    pub fn unterminated(offset: usize, expected: &str) -> Self {
        Error::UnterminatedContainer {
            offset,
            expected: expected.to_string(),
        }
    }

    /// Creates an invalid-integer-literal error at the given offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::Error;
    ///
    /// let err = Error::invalid_integer(1, "leading zero");
    /// assert!(err.to_string().contains("offset 1"));
    /// ```
    pub fn invalid_integer(offset: usize, message: &str) -> Self {
        Error::InvalidIntegerLiteral {
            offset,
            message: message.to_string(),
        }
    }

    /// Creates an invalid-length-prefix error at the given offset.
    pub fn invalid_length(offset: usize, message: &str) -> Self {
        Error::InvalidLengthPrefix {
            offset,
            message: message.to_string(),
        }
    }

    /// Creates an unsupported-type error for values that cannot be
    /// represented in bencode.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
