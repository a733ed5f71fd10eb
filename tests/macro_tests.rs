use num_bigint::BigInt;
use serde_bencode::{bencode, encode, BencodeMap, Value};

#[test]
fn test_bencode_macro_integers() {
    let int_val = bencode!(42);
    assert_eq!(int_val, Value::Integer(BigInt::from(42)));

    let negative_val = bencode!(-123);
    assert_eq!(negative_val, Value::Integer(BigInt::from(-123)));

    let zero = bencode!(0);
    assert_eq!(zero, Value::Integer(BigInt::from(0)));
}

#[test]
fn test_bencode_macro_strings() {
    let string_val = bencode!("hello world");
    assert_eq!(string_val, Value::Bytes(b"hello world".to_vec()));

    let empty_string = bencode!("");
    assert_eq!(empty_string, Value::Bytes(vec![]));
}

#[test]
fn test_bencode_macro_raw_bytes() {
    let raw = bencode!(b"\x00\xff");
    assert_eq!(raw, Value::Bytes(vec![0x00, 0xff]));
}

#[test]
fn test_bencode_macro_lists() {
    let empty = bencode!([]);
    assert_eq!(empty, Value::List(vec![]));

    let list = bencode!(["spam", 42, []]);
    assert_eq!(
        list,
        Value::List(vec![
            Value::from("spam"),
            Value::from(42),
            Value::List(vec![]),
        ])
    );
}

#[test]
fn test_bencode_macro_dicts() {
    let empty = bencode!({});
    assert_eq!(empty, Value::Dict(BencodeMap::new()));

    let dict = bencode!({
        "bar": "spam",
        "foo": 42
    });
    match dict {
        Value::Dict(map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get(b"bar"), Some(&Value::from("spam")));
            assert_eq!(map.get(b"foo"), Some(&Value::from(42)));
        }
        _ => panic!("Expected dictionary"),
    }
}

#[test]
fn test_bencode_macro_byte_string_keys() {
    let dict = bencode!({
        b"\xffkey": 1
    });
    match dict {
        Value::Dict(map) => {
            assert_eq!(map.get(b"\xffkey"), Some(&Value::from(1)));
        }
        _ => panic!("Expected dictionary"),
    }
}

#[test]
fn test_bencode_macro_nesting() {
    let value = bencode!({
        "announce": "http://tracker.example/announce",
        "info": {
            "name": "example.txt",
            "length": 1024,
            "files": [{ "path": "a" }, { "path": "b" }]
        }
    });

    let info = value.as_dict().unwrap().get(b"info").unwrap();
    let files = info.as_dict().unwrap().get(b"files").unwrap();
    assert_eq!(files.as_list().unwrap().len(), 2);
}

#[test]
fn test_bencode_macro_output_encodes_canonically() {
    // Insertion order in the literal does not leak into the encoding.
    let value = bencode!({
        "foo": 42,
        "bar": "spam"
    });
    assert_eq!(encode(&value), b"d3:bar4:spam3:fooi42ee");
}

#[test]
fn test_bencode_macro_trailing_commas() {
    let value = bencode!({
        "a": [1, 2,],
    });
    assert_eq!(encode(&value), b"d1:ali1ei2eee");
}
