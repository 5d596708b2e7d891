// Hung an x87 strtod loop forever: the value sits between the largest
// subnormal and the smallest normal double.

#[test]
fn test() {
    let value: f64 = lexical_float::parse("2.2250738585072011e-308").unwrap();
    assert_eq!(value.to_bits(), 0x000F_FFFF_FFFF_FFFF);
}
