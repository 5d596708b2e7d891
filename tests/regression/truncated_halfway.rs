// More than 19 digits that differ from a tie only past the 19th digit.

#[test]
fn test() {
    let value: f64 = lexical_float::parse("9007199254740993.000000000000000000000000000001").unwrap();
    assert_eq!(value, 9007199254740994.0);

    let value: f64 = lexical_float::parse("9007199254740992.999999999999999999999999999999").unwrap();
    assert_eq!(value, 9007199254740992.0);

    let value: f32 = lexical_float::parse("16777217.00000000000000000000001").unwrap();
    assert_eq!(value, 16777218.0);
}
