//! Basic bencode serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_bencode::{from_slice, to_bytes};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Peer {
    ip: String,
    port: u16,
    #[serde(rename = "peer id")]
    peer_id: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let peers = vec![
        Peer {
            ip: "10.0.0.1".to_string(),
            port: 6881,
            peer_id: "-RS0100-000000000001".to_string(),
        },
        Peer {
            ip: "10.0.0.2".to_string(),
            port: 6882,
            peer_id: "-RS0100-000000000002".to_string(),
        },
    ];

    // Serialize to bencode
    let bytes = to_bytes(&peers)?;
    println!("Wire output:\n{}\n", String::from_utf8_lossy(&bytes));

    // Deserialize back to structs
    let peers_back: Vec<Peer> = from_slice(&bytes)?;
    assert_eq!(peers, peers_back);
    println!("✓ Round-trip successful");

    Ok(())
}
