#![no_main]

use libfuzzer_sys::fuzz_target;
use lexical_float::{from_chars, FromChars, Status};
use std::fmt::Debug;
use std::str::FromStr;

trait Bits: FromChars + FromStr + Copy + Debug {
    fn is_nan(self) -> bool;
    fn bits(self) -> u64;
}

impl Bits for f32 {
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    fn bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl Bits for f64 {
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    fn bits(self) -> u64 {
        self.to_bits()
    }
}

// Whatever the literal is, the standard library must agree on it.
fn check<F: Bits>(data: &[u8]) {
    let result = from_chars::<F>(data);
    if result.status != Status::Ok {
        assert_eq!(result.consumed, 0);
        return;
    }

    let literal = match std::str::from_utf8(&data[..result.consumed]) {
        Ok(literal) => literal,
        Err(_) => unreachable!(),
    };
    if literal.len() > 4096 || literal.contains('(') {
        return;
    }
    if let Ok(expected) = literal.parse::<F>() {
        if expected.is_nan() {
            assert!(result.value.is_nan());
        } else {
            assert_eq!(result.value.bits(), expected.bits(), "{:?}", literal);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    check::<f64>(data);
    check::<f32>(data);
});
