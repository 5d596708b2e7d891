//! Recognize the longest float literal at the start of a byte slice.
//!
//! The scanner never allocates: the digits of a decimal literal are handed
//! to the engine as subslices of the input, with the explicit exponent
//! parsed separately.

use super::digit::*;
use super::exponent::*;
use crate::format::Format;

/// Digits of a decimal literal, borrowed from the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decimal<'a> {
    pub integer: &'a [u8],
    pub fraction: &'a [u8],
    /// Explicit exponent, saturated to the `i32` range.
    pub exponent: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Literal<'a> {
    Decimal(Decimal<'a>),
    Infinity,
    NaN,
}

/// A recognized literal and where it ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Scan<'a> {
    pub negative: bool,
    pub literal: Literal<'a>,
    /// Offset one past the last consumed byte.
    pub end: usize,
}

struct Scanner<'a> {
    slice: &'a [u8],
    index: usize,
}

impl<'a> Scanner<'a> {
    fn peek_or_null(&self) -> u8 {
        self.slice.get(self.index).copied().unwrap_or(b'\x00')
    }

    fn eat_char(&mut self) {
        self.index += 1;
    }

    fn eat_digits(&mut self) -> &'a [u8] {
        let start = self.index;
        while is_digit(self.peek_or_null()) {
            self.eat_char();
        }
        &self.slice[start..self.index]
    }

    /// Consume `token` if the input starts with it, ignoring ASCII case.
    fn eat_token(&mut self, token: &[u8]) -> bool {
        match self.slice.get(self.index..self.index + token.len()) {
            Some(bytes) if bytes.eq_ignore_ascii_case(token) => {
                self.index += token.len();
                true
            }
            _ => false,
        }
    }

    fn scan_special(&mut self) -> Option<Literal<'a>> {
        if self.eat_token(b"infinity") || self.eat_token(b"inf") {
            Some(Literal::Infinity)
        } else if self.eat_token(b"nan") {
            self.scan_nan_payload();
            Some(Literal::NaN)
        } else {
            None
        }
    }

    // The payload is only consumed when it is well formed, otherwise the
    // literal ends right after `nan`.
    fn scan_nan_payload(&mut self) {
        if self.peek_or_null() != b'(' {
            return;
        }
        let start = self.index;
        self.eat_char();
        loop {
            match self.peek_or_null() {
                b')' => {
                    self.eat_char();
                    return;
                }
                b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'_' => self.eat_char(),
                _ => {
                    self.index = start;
                    return;
                }
            }
        }
    }

    fn scan_decimal(&mut self, format: Format) -> Option<Decimal<'a>> {
        let integer = self.eat_digits();
        let fraction = if self.peek_or_null() == b'.' {
            self.eat_char();
            self.eat_digits()
        } else {
            &[]
        };
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let exponent = match self.peek_or_null() {
            b'e' | b'E' if format.allows_exponent() => match self.scan_exponent() {
                Some(exponent) => exponent,
                None if format.requires_exponent() => return None,
                None => 0,
            },
            _ if format.requires_exponent() => return None,
            _ => 0,
        };

        Some(Decimal {
            integer,
            fraction,
            exponent,
        })
    }

    // Leaves the position untouched if no digit follows the marker.
    fn scan_exponent(&mut self) -> Option<i32> {
        let start = self.index;
        self.eat_char();

        let positive_exp = match self.peek_or_null() {
            b'+' => {
                self.eat_char();
                true
            }
            b'-' => {
                self.eat_char();
                false
            }
            _ => true,
        };

        let digits = self.eat_digits();
        if digits.is_empty() {
            self.index = start;
            return None;
        }

        let exp = digits
            .iter()
            .fold(0, |exp, &c| push_exponent_digit(exp, to_digit(c)));
        Some(if positive_exp { exp } else { -exp })
    }
}

/// Scan a float literal from the start of `slice`.
///
/// Returns `None` when no literal of the given format starts at the
/// first byte.
pub(crate) fn scan(slice: &[u8], format: Format) -> Option<Scan<'_>> {
    let mut scanner = Scanner { slice, index: 0 };

    let negative = match scanner.peek_or_null() {
        b'-' => {
            scanner.eat_char();
            true
        }
        b'+' => {
            scanner.eat_char();
            false
        }
        _ => false,
    };

    let literal = match scanner.peek_or_null() {
        b'0'..=b'9' | b'.' => Literal::Decimal(scanner.scan_decimal(format)?),
        _ => scanner.scan_special()?,
    };

    Some(Scan {
        negative,
        literal,
        end: scanner.index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal<'a>(integer: &'a [u8], fraction: &'a [u8], exponent: i32) -> Literal<'a> {
        Literal::Decimal(Decimal {
            integer,
            fraction,
            exponent,
        })
    }

    fn check(input: &str, negative: bool, literal: Literal, end: usize) {
        let scan = scan(input.as_bytes(), Format::General);
        let expected = Scan {
            negative,
            literal,
            end,
        };
        assert_eq!(scan, Some(expected), "{}", input);
    }

    #[test]
    fn scan_decimal_test() {
        check("0", false, decimal(b"0", b"", 0), 1);
        check("007", false, decimal(b"007", b"", 0), 3);
        check("-1.5", true, decimal(b"1", b"5", 0), 4);
        check("+.5", false, decimal(b"", b"5", 0), 3);
        check("5.", false, decimal(b"5", b"", 0), 2);
        check("1e10", false, decimal(b"1", b"", 10), 4);
        check("1E+10", false, decimal(b"1", b"", 10), 5);
        check("2.5e-3x", false, decimal(b"2", b"5", -3), 6);
        check("100000 3.14159265359", false, decimal(b"100000", b"", 0), 6);
        check("1e0000001", false, decimal(b"1", b"", 1), 9);
    }

    #[test]
    fn scan_dangling_exponent_test() {
        check("1e", false, decimal(b"1", b"", 0), 1);
        check("1e+", false, decimal(b"1", b"", 0), 1);
        check("1.5E-x", false, decimal(b"1", b"5", 0), 3);
    }

    #[test]
    fn scan_exponent_saturates_test() {
        check("1e99999999999999", false, decimal(b"1", b"", i32::MAX), 16);
        check("1e-99999999999999", false, decimal(b"1", b"", -i32::MAX), 17);
    }

    #[test]
    fn scan_special_test() {
        check("inf", false, Literal::Infinity, 3);
        check("-INF", true, Literal::Infinity, 4);
        check("Infinity", false, Literal::Infinity, 8);
        check("infinit", false, Literal::Infinity, 3);
        check("nan", false, Literal::NaN, 3);
        check("-NaN", true, Literal::NaN, 4);
        check("nan(123_abc)", false, Literal::NaN, 12);
        check("nan()", false, Literal::NaN, 5);
        check("nan(1 2)", false, Literal::NaN, 3);
        check("nan(abc", false, Literal::NaN, 3);
        check("nan(a\0b)", false, Literal::NaN, 3);
    }

    #[test]
    fn scan_nan_payload_stops_early_test() {
        // The payload ends at the first byte that cannot belong to it, even
        // with a closing parenthesis much further along.
        let mut input = [b'x'; 4096];
        input[..7].copy_from_slice(b"nan(ab-");
        input[4095] = b')';
        let result = scan(&input, Format::General);
        let expected = Scan {
            negative: false,
            literal: Literal::NaN,
            end: 3,
        };
        assert_eq!(result, Some(expected));

        let mut input = [b'7'; 4096];
        input[..5].copy_from_slice(b"-nan(");
        input[4094..].copy_from_slice(b")1");
        let end = scan(&input, Format::General).map(|scan| scan.end);
        assert_eq!(end, Some(input.len() - 1));
    }

    #[test]
    fn scan_invalid_test() {
        for input in ["", "-", "+", ".", "-.", "e5", ".e5", "in", "na", " 1", "--1", "x"] {
            assert_eq!(scan(input.as_bytes(), Format::General), None, "{:?}", input);
        }
    }

    #[test]
    fn scan_format_test() {
        let fixed = scan(b"1.5e5", Format::Fixed);
        let expected = Scan {
            negative: false,
            literal: decimal(b"1", b"5", 0),
            end: 3,
        };
        assert_eq!(fixed, Some(expected));

        assert_eq!(scan(b"1.5", Format::Scientific), None);
        assert_eq!(scan(b"1e", Format::Scientific), None);
        let scientific = scan(b"1.5e5", Format::Scientific);
        let expected = Scan {
            negative: false,
            literal: decimal(b"1", b"5", 5),
            end: 5,
        };
        assert_eq!(scientific, Some(expected));

        // Special tokens are accepted in every format.
        let nan = scan(b"nan", Format::Scientific).map(|scan| scan.literal);
        assert_eq!(nan, Some(Literal::NaN));
        let inf = scan(b"-inf", Format::Fixed).map(|scan| scan.literal);
        assert_eq!(inf, Some(Literal::Infinity));
    }
}
