use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_bencode::{bencode, decode, encode, from_slice, to_bytes, Value};

#[derive(Serialize, Deserialize, Clone)]
struct Peer {
    ip: String,
    port: u16,
}

#[derive(Serialize, Deserialize, Clone)]
struct FileEntry {
    length: u64,
    path: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Info {
    name: String,
    #[serde(rename = "piece length")]
    piece_length: u64,
    files: Vec<FileEntry>,
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let peer = Peer {
        ip: "10.0.0.1".to_string(),
        port: 6881,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_bytes(black_box(&peer)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let wire = b"d2:ip8:10.0.0.14:porti6881ee";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_slice::<Peer>(black_box(wire)))
    });
}

fn benchmark_serialize_file_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_file_list");

    for size in [10, 50, 100, 500].iter() {
        let info = Info {
            name: "archive".to_string(),
            piece_length: 16384,
            files: (0..*size)
                .map(|i| FileEntry {
                    length: 1024 * u64::from(i),
                    path: vec!["dir".to_string(), format!("file{}.bin", i)],
                })
                .collect(),
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), &info, |b, info| {
            b.iter(|| to_bytes(black_box(info)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_file_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_file_list");

    for size in [10, 50, 100, 500].iter() {
        let info = Info {
            name: "archive".to_string(),
            piece_length: 16384,
            files: (0..*size)
                .map(|i| FileEntry {
                    length: 1024 * u64::from(i),
                    path: vec!["dir".to_string(), format!("file{}.bin", i)],
                })
                .collect(),
        };
        let wire = to_bytes(&info).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &wire, |b, wire| {
            b.iter(|| from_slice::<Info>(black_box(wire)))
        });
    }
    group.finish();
}

fn benchmark_decode_value_tree(c: &mut Criterion) {
    let value = bencode!({
        "announce": "http://tracker.example/announce",
        "info": {
            "name": "example.txt",
            "length": 1048576,
            "private": 1
        }
    });
    let wire = encode(&value);

    c.bench_function("decode_value_tree", |b| {
        b.iter(|| decode(black_box(&wire)))
    });
}

fn benchmark_encode_value_tree(c: &mut Criterion) {
    let value = bencode!({
        "announce": "http://tracker.example/announce",
        "info": {
            "name": "example.txt",
            "length": 1048576,
            "private": 1
        }
    });

    c.bench_function("encode_value_tree", |b| b.iter(|| encode(black_box(&value))));
}

fn benchmark_decode_binary_payload(c: &mut Criterion) {
    // 20-byte SHA-1 piece hashes, 512 pieces.
    let pieces: Vec<u8> = (0..512u32 * 20).map(|i| (i % 251) as u8).collect();
    let wire = encode(&Value::Bytes(pieces));

    c.bench_function("decode_binary_payload", |b| {
        b.iter(|| decode(black_box(&wire)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_file_lists,
    benchmark_deserialize_file_lists,
    benchmark_decode_value_tree,
    benchmark_encode_value_tree,
    benchmark_decode_binary_payload,
);
criterion_main!(benches);
