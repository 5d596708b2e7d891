// Exponents that overflow an i32 while a long fraction pulls the other way.

#[test]
fn test() {
    let mut s = String::from("0.");
    s.push_str(&"0".repeat(100));
    s.push_str("1e2147483648");
    let value: f64 = lexical_float::parse(&s).unwrap();
    assert_eq!(value, f64::INFINITY);

    let mut s = "1".repeat(100);
    s.push_str("e-2147483648");
    let value: f64 = lexical_float::parse(&s).unwrap();
    assert_eq!(value, 0.0);
}
