use serde::{Deserialize, Serialize};
use serde_bencode::{encode, from_slice, to_bytes, to_value, Error, Value};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Info {
    name: String,
    #[serde(rename = "piece length")]
    piece_length: u64,
    length: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Metainfo {
    announce: String,
    info: Info,
}

fn sample_metainfo() -> Metainfo {
    Metainfo {
        announce: "http://tracker.example/announce".to_string(),
        info: Info {
            name: "example.txt".to_string(),
            piece_length: 16384,
            length: 1024,
        },
    }
}

#[test]
fn test_struct_round_trip() {
    let metainfo = sample_metainfo();
    let bytes = to_bytes(&metainfo).unwrap();
    let back: Metainfo = from_slice(&bytes).unwrap();
    assert_eq!(metainfo, back);
}

#[test]
fn test_struct_fields_are_emitted_in_canonical_order() {
    // Info declares name before "piece length" before length; the wire
    // must carry them in byte order regardless.
    let bytes = to_bytes(&sample_metainfo().info).unwrap();
    assert_eq!(
        bytes,
        b"d6:lengthi1024e4:name11:example.txt12:piece lengthi16384ee"
    );
}

#[test]
fn test_renamed_keys_round_trip() {
    let bytes = to_bytes(&sample_metainfo()).unwrap();
    let as_value = serde_bencode::decode(&bytes).unwrap();
    let info = as_value.as_dict().unwrap().get(b"info").unwrap();
    assert!(info.as_dict().unwrap().contains_key(b"piece length"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    // Extra entries, including binary payloads, are skipped by derived
    // deserializers.
    let wire = b"d6:lengthi1024e4:name11:example.txt6:pieces3:\x00\x01\xff12:piece lengthi16384ee";
    let info: Info = from_slice(wire).unwrap();
    assert_eq!(info.length, 1024);
}

#[test]
fn test_borrowed_byte_strings() {
    #[derive(Deserialize)]
    struct Borrowed<'a> {
        name: &'a str,
    }

    let wire = b"d4:name11:example.txte";
    let borrowed: Borrowed = from_slice(wire).unwrap();
    assert_eq!(borrowed.name, "example.txt");
}

#[test]
fn test_map_round_trip() {
    let mut map = BTreeMap::new();
    map.insert("complete".to_string(), 10i64);
    map.insert("incomplete".to_string(), 3i64);

    let bytes = to_bytes(&map).unwrap();
    assert_eq!(bytes, b"d8:completei10e10:incompletei3ee");

    let back: BTreeMap<String, i64> = from_slice(&bytes).unwrap();
    assert_eq!(map, back);
}

#[test]
fn test_tuple_round_trip() {
    let pair = ("spam".to_string(), 42i64);
    let bytes = to_bytes(&pair).unwrap();
    assert_eq!(bytes, b"l4:spami42ee");
    let back: (String, i64) = from_slice(&bytes).unwrap();
    assert_eq!(pair, back);
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Event {
    Started,
    Completed,
    Announce(String),
    Scrape { seeders: u32, leechers: u32 },
}

#[test]
fn test_unit_variant_round_trip() {
    let bytes = to_bytes(&Event::Started).unwrap();
    assert_eq!(bytes, b"7:Started");
    let back: Event = from_slice(&bytes).unwrap();
    assert_eq!(back, Event::Started);
}

#[test]
fn test_newtype_variant_round_trip() {
    let event = Event::Announce("udp://tracker".to_string());
    let bytes = to_bytes(&event).unwrap();
    assert_eq!(bytes, b"d8:Announce13:udp://trackere");
    let back: Event = from_slice(&bytes).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_struct_variant_round_trip() {
    let event = Event::Scrape {
        seeders: 5,
        leechers: 2,
    };
    let bytes = to_bytes(&event).unwrap();
    assert_eq!(bytes, b"d6:Scraped8:leechersi2e7:seedersi5eee");
    let back: Event = from_slice(&bytes).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_optional_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Announce {
        port: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    }

    // A present Option serializes as its inner value.
    let with = Announce {
        port: 6881,
        key: Some("abc".to_string()),
    };
    let bytes = to_bytes(&with).unwrap();
    assert_eq!(bytes, b"d3:key3:abc4:porti6881ee");
    assert_eq!(from_slice::<Announce>(&bytes).unwrap(), with);

    // An absent entry deserializes to None.
    let without: Announce = from_slice(b"d4:porti6881ee").unwrap();
    assert_eq!(without.key, None);
}

#[test]
fn test_none_without_skip_is_an_error() {
    #[derive(Serialize)]
    struct Bad {
        key: Option<String>,
    }

    let err = to_bytes(&Bad { key: None }).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(_)));
}

#[test]
fn test_values_outside_the_data_model_fail_fast() {
    assert!(matches!(
        to_bytes(&true).unwrap_err(),
        Error::UnsupportedType(_)
    ));
    assert!(matches!(
        to_bytes(&1.5f64).unwrap_err(),
        Error::UnsupportedType(_)
    ));
    assert!(matches!(to_bytes(&()).unwrap_err(), Error::UnsupportedType(_)));
    assert!(matches!(
        to_value(&true).unwrap_err(),
        Error::UnsupportedType(_)
    ));
}

#[test]
fn test_integer_keys_are_rejected() {
    let mut map = BTreeMap::new();
    map.insert(1u32, "one");
    assert!(matches!(
        to_bytes(&map).unwrap_err(),
        Error::UnsupportedType(_)
    ));
}

#[test]
fn test_wide_integers_round_trip() {
    let big = u64::MAX;
    let bytes = to_bytes(&big).unwrap();
    assert_eq!(bytes, b"i18446744073709551615e");
    assert_eq!(from_slice::<u64>(&bytes).unwrap(), big);

    let wider = i128::from(u64::MAX) * -7;
    let bytes = to_bytes(&wider).unwrap();
    assert_eq!(from_slice::<i128>(&bytes).unwrap(), wider);
}

#[test]
fn test_narrowing_out_of_range_integer_fails() {
    assert!(from_slice::<u8>(b"i300e").is_err());
    assert!(from_slice::<u32>(b"i-1e").is_err());
}

#[test]
fn test_vec_u8_is_a_list_in_the_serde_data_model() {
    // Without a bytes wrapper, serde treats Vec<u8> as a sequence.
    let bytes = to_bytes(&vec![1u8, 2]).unwrap();
    assert_eq!(bytes, b"li1ei2ee");
}

#[test]
fn test_value_deserializes_through_serde() {
    let value: Value = from_slice(b"d3:bar4:spam3:fooi42ee").unwrap();
    let dict = value.as_dict().unwrap();
    assert_eq!(dict.get(b"bar").unwrap().as_str(), Some("spam"));
    assert_eq!(dict.get(b"foo").unwrap().as_i64(), Some(42));
}

#[test]
fn test_value_serializes_through_serde() {
    let value: Value = from_slice(b"d3:bar4:spam3:fooi42ee").unwrap();
    assert_eq!(to_bytes(&value).unwrap(), encode(&value));
}

#[test]
fn test_serde_json_values_encode_to_bencode() {
    let json = serde_json::json!({
        "name": "example",
        "sizes": [1, 2, 3]
    });
    let bytes = to_bytes(&json).unwrap();
    assert_eq!(bytes, b"d4:name7:example5:sizesli1ei2ei3eee");
}

#[test]
fn test_to_value_matches_direct_encoding() {
    let metainfo = sample_metainfo();
    let value = to_value(&metainfo).unwrap();
    assert_eq!(encode(&value), to_bytes(&metainfo).unwrap());
}
