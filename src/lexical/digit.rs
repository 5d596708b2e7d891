//! Helpers to classify and convert digit characters.

// Convert an ASCII digit to its value.
//
// The scanner only hands over bytes in `b'0'..=b'9'`.
#[inline]
pub(crate) fn to_digit(c: u8) -> u32 {
    debug_assert!(c.is_ascii_digit(), "to_digit() called on a non-digit");
    (c - b'0') as u32
}

// Is the byte an ASCII decimal digit.
#[inline]
pub(crate) fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_digit_test() {
        assert_eq!(to_digit(b'0'), 0);
        assert_eq!(to_digit(b'7'), 7);
        assert_eq!(to_digit(b'9'), 9);
    }

    #[test]
    fn is_digit_test() {
        assert!(is_digit(b'0'));
        assert!(is_digit(b'9'));
        assert!(!is_digit(b'.'));
        assert!(!is_digit(b'e'));
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
    }
}
