//! Parse float literals from bytes or strings.

use crate::error::{Error, ErrorCode, Result};
use crate::format::Format;
use crate::lexical::scan::{scan, Literal};
use crate::lexical::{parse_float, Float};

/// Outcome of a prefix parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// A literal was recognized and converted.
    Ok,

    /// No literal starts at the first byte.
    InvalidFormat,

    /// The literal is outside the range of the target type.
    ///
    /// Never produced by this crate: magnitudes above the largest finite
    /// value parse as a signed infinity, and magnitudes below half the
    /// smallest subnormal parse as a signed zero, both with `Status::Ok`.
    OutOfRange,
}

/// Result of [`from_chars`].
///
/// ```
/// use lexical_float::{from_chars, Status};
///
/// let result = from_chars::<f32>(b"-inf, 1");
/// assert_eq!(result.status, Status::Ok);
/// assert_eq!(result.value, f32::NEG_INFINITY);
/// assert_eq!(result.consumed, 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParseResult<F> {
    /// Number of bytes consumed from the start of the input, which is the
    /// offset one past the end of the literal. Zero unless the status is
    /// [`Status::Ok`].
    pub consumed: usize,

    /// Whether a literal was recognized.
    pub status: Status,

    /// The parsed value. Positive zero unless the status is [`Status::Ok`].
    pub value: F,
}

impl<F> ParseResult<F> {
    /// Returns true if a literal was recognized.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Convert into the value and the number of bytes consumed.
    pub fn into_result(self) -> Result<(F, usize)> {
        match self.status {
            Status::Ok => Ok((self.value, self.consumed)),
            Status::InvalidFormat | Status::OutOfRange => {
                Err(Error::syntax(ErrorCode::InvalidNumber, self.consumed))
            }
        }
    }
}

mod private {
    pub trait Sealed: Sized {
        fn convert(bytes: &[u8], format: super::Format) -> super::ParseResult<Self>;

        #[cfg(feature = "serde")]
        fn from_f64(value: f64) -> Self;

        #[cfg(feature = "serde")]
        fn from_i64(value: i64) -> Self;

        #[cfg(feature = "serde")]
        fn from_u64(value: u64) -> Self;
    }
}

/// Binary floating-point types that float literals parse into.
///
/// This trait is sealed and implemented for `f32` and `f64`.
pub trait FromChars: private::Sealed {
    /// Parse the longest float literal at the start of `bytes`.
    ///
    /// See [`from_chars`].
    fn from_chars(bytes: &[u8]) -> ParseResult<Self> {
        Self::convert(bytes, Format::General)
    }

    /// Parse the longest float literal of the given format at the start of
    /// `bytes`.
    ///
    /// See [`from_chars_with_format`].
    fn from_chars_with_format(bytes: &[u8], format: Format) -> ParseResult<Self> {
        Self::convert(bytes, format)
    }
}

fn convert<F>(bytes: &[u8], format: Format) -> ParseResult<F>
where
    F: Float,
{
    let scan = match scan(bytes, format) {
        Some(scan) => scan,
        None => {
            return ParseResult {
                consumed: 0,
                status: Status::InvalidFormat,
                value: F::ZERO,
            }
        }
    };

    let value = match scan.literal {
        Literal::Decimal(decimal) => {
            parse_float::<F>(decimal.integer, decimal.fraction, decimal.exponent)
        }
        Literal::Infinity => F::from_bits(F::INFINITY_BITS),
        Literal::NaN => F::from_bits(F::NAN_BITS),
    };

    ParseResult {
        consumed: scan.end,
        status: Status::Ok,
        value: if scan.negative { -value } else { value },
    }
}

macro_rules! impl_from_chars {
    ($($ty:ident)*) => {
        $(
            impl private::Sealed for $ty {
                #[inline]
                fn convert(bytes: &[u8], format: Format) -> ParseResult<Self> {
                    convert(bytes, format)
                }

                #[cfg(feature = "serde")]
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[cfg(feature = "serde")]
                #[inline]
                fn from_i64(value: i64) -> Self {
                    value as $ty
                }

                #[cfg(feature = "serde")]
                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $ty
                }
            }

            impl FromChars for $ty {}
        )*
    };
}

impl_from_chars!(f32 f64);

/// Parse the longest float literal at the start of `bytes`.
///
/// The literal must start at the first byte; whitespace is not skipped.
/// Parsing stops at the first byte that cannot extend the literal, which
/// is not consumed.
///
/// On [`Status::InvalidFormat`] nothing is consumed.
///
/// ```
/// use lexical_float::{from_chars, Status};
///
/// let result = from_chars::<f64>(b"100000 3.14159265359");
/// assert_eq!(result.status, Status::Ok);
/// assert_eq!(result.value, 100000.0);
/// assert_eq!(result.consumed, 6);
///
/// let result = from_chars::<f64>(b" 1");
/// assert_eq!(result.status, Status::InvalidFormat);
/// assert_eq!(result.consumed, 0);
/// ```
pub fn from_chars<F>(bytes: &[u8]) -> ParseResult<F>
where
    F: FromChars,
{
    F::from_chars(bytes)
}

/// Parse the longest float literal of the given format at the start of
/// `bytes`.
///
/// ```
/// use lexical_float::{from_chars_with_format, Format, Status};
///
/// // The exponent is not part of a fixed literal.
/// let result = from_chars_with_format::<f64>(b"1.5e3", Format::Fixed);
/// assert_eq!((result.value, result.consumed), (1.5, 3));
///
/// // A scientific literal requires one.
/// let result = from_chars_with_format::<f64>(b"1.5", Format::Scientific);
/// assert_eq!(result.status, Status::InvalidFormat);
/// ```
pub fn from_chars_with_format<F>(bytes: &[u8], format: Format) -> ParseResult<F>
where
    F: FromChars,
{
    F::from_chars_with_format(bytes, format)
}

/// Parse a string that holds exactly one float literal.
///
/// ```
/// # fn main() -> lexical_float::Result<()> {
/// let value: f64 = lexical_float::parse("6.02214076e23")?;
/// assert_eq!(value, 6.02214076e23);
///
/// let err = lexical_float::parse::<f64>("6.02e23 mol").unwrap_err();
/// assert_eq!(err.offset(), 7);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails with [`ErrorCode::EofWhileParsingNumber`] on empty input, with
/// [`ErrorCode::InvalidNumber`] if no literal starts at the first byte, and
/// with [`ErrorCode::TrailingCharacters`] if the literal does not extend to
/// the end of the input.
pub fn parse<F>(s: &str) -> Result<F>
where
    F: FromChars,
{
    let (value, consumed) = parse_partial(s)?;
    if consumed != s.len() {
        return Err(Error::syntax(ErrorCode::TrailingCharacters, consumed));
    }
    Ok(value)
}

/// Parse the float literal at the start of a string, returning the value and
/// the number of bytes consumed.
///
/// ```
/// let (value, consumed) = lexical_float::parse_partial::<f32>("1e5, 2e5").unwrap();
/// assert_eq!(value, 1e5);
/// assert_eq!(consumed, 3);
/// ```
///
/// # Errors
///
/// Fails with [`ErrorCode::EofWhileParsingNumber`] on empty input and with
/// [`ErrorCode::InvalidNumber`] if no literal starts at the first byte.
pub fn parse_partial<F>(s: &str) -> Result<(F, usize)>
where
    F: FromChars,
{
    if s.is_empty() {
        return Err(Error::syntax(ErrorCode::EofWhileParsingNumber, 0));
    }
    from_chars::<F>(s.as_bytes()).into_result()
}
