//! Working with bencode data when the structure isn't known at compile time.
//!
//! Run with: cargo run --example dynamic_values

use serde_bencode::{decode, encode, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A tracker-style response: keys in non-canonical order, a binary
    // payload mixed in with text.
    let wire = b"d8:intervali1800e5:peers6:\x0a\x00\x00\x01\x1a\xe18:completei10ee";

    let value = decode(wire)?;
    let dict = value.as_dict().ok_or("expected a dictionary")?;

    // Wire order is preserved on the way in.
    print!("keys as read:");
    for key in dict.keys() {
        print!(" {}", String::from_utf8_lossy(key));
    }
    println!();

    if let Some(interval) = dict.get(b"interval").and_then(Value::as_i64) {
        println!("interval = {}s", interval);
    }

    // Binary payloads stay raw bytes; no text encoding is assumed.
    if let Some(peers) = dict.get(b"peers").and_then(Value::as_bytes) {
        println!("peers blob = {} bytes", peers.len());
    }

    // Re-encoding canonicalizes the key order.
    let canonical = encode(&value);
    println!("canonical: {}", String::from_utf8_lossy(&canonical));

    Ok(())
}
