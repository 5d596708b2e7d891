// Rounds up to the smallest normal double.

#[test]
fn test() {
    let value: f64 = lexical_float::parse("2.2250738585072012e-308").unwrap();
    assert_eq!(value, f64::MIN_POSITIVE);

    let value: f64 = lexical_float::parse("0.00022250738585072012e-304").unwrap();
    assert_eq!(value, f64::MIN_POSITIVE);
}
