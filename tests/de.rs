#![cfg(feature = "serde")]
#![allow(clippy::float_cmp)]

use serde_derive::Deserialize;

#[derive(Deserialize, Debug)]
struct Sample {
    #[serde(deserialize_with = "lexical_float::de::deserialize")]
    double: f64,
    #[serde(deserialize_with = "lexical_float::de::deserialize")]
    single: f32,
}

fn from_str(json: &str) -> serde_json::Result<Sample> {
    serde_json::from_str(json)
}

#[test]
fn test_numbers() {
    let sample = from_str(r#"{"double": 0.1, "single": 0.1}"#).unwrap();
    assert_eq!(sample.double, 0.1);
    assert_eq!(sample.single, 0.1);

    let sample = from_str(r#"{"double": -7, "single": 18446744073709551615}"#).unwrap();
    assert_eq!(sample.double, -7.0);
    assert_eq!(sample.single, 18446744073709551615u64 as f32);
}

#[test]
fn test_strings() {
    let sample = from_str(r#"{"double": "inf", "single": "-Infinity"}"#).unwrap();
    assert_eq!(sample.double, f64::INFINITY);
    assert_eq!(sample.single, f32::NEG_INFINITY);

    let sample = from_str(r#"{"double": "nan(1)", "single": "1e1000"}"#).unwrap();
    assert!(sample.double.is_nan());
    assert_eq!(sample.single, f32::INFINITY);

    // Parsed directly as f32, without rounding through f64.
    let sample = from_str(r#"{"double": "0", "single": "1.00000005960464477539062501"}"#).unwrap();
    assert_eq!(sample.single, 1.00000012);
}

#[test]
fn test_errors() {
    let err = from_str(r#"{"double": "1.5 ", "single": 0}"#).unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().starts_with("invalid value: string \"1.5 \""));

    let err = from_str(r#"{"double": true, "single": 0}"#).unwrap_err();
    assert!(err.to_string().contains("a number or a float literal string"));

    let err = from_str(r#"{"double": "", "single": 0}"#).unwrap_err();
    assert!(err.is_data());
}
