//! Building bencode values with the bencode! macro.
//!
//! Run with: cargo run --example macro

use serde_bencode::{bencode, encode};

fn main() {
    // A torrent-shaped dictionary, written as a literal. Keys may be given
    // in any order; encoding always emits them canonically sorted.
    let metainfo = bencode!({
        "info": {
            "name": "example.txt",
            "length": 1024,
            "piece length": 16384
        },
        "announce": "http://tracker.example/announce"
    });

    let bytes = encode(&metainfo);
    println!("Encoded ({} bytes):", bytes.len());
    println!("{}", String::from_utf8_lossy(&bytes));

    // Navigating the tree
    let info = metainfo.as_dict().unwrap().get(b"info").unwrap();
    let name = info.as_dict().unwrap().get(b"name").unwrap();
    println!("name = {}", name);
}
