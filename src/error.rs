//! When parsing a float literal goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::result;
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur when parsing a
/// float literal with [`parse`](crate::parse) or
/// [`parse_partial`](crate::parse_partial).
///
/// The error is two words and never allocates.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    offset: usize,
}

/// Alias for a `Result` with the error type `lexical_float::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, offset: usize) -> Self {
        Error { code, offset }
    }

    /// Byte offset in the input at which the error was detected.
    ///
    /// For [`ErrorCode::TrailingCharacters`] this is the end of the literal,
    /// which is also the first byte that could not be consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a valid float literal
    /// - `Category::Eof` - the input was empty
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::EofWhileParsingNumber => Category::Eof,
            ErrorCode::InvalidNumber | ErrorCode::TrailingCharacters => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by input that was not a valid
    /// float literal.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by empty input.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }
}

/// Categorizes the cause of a `lexical_float::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that is not a valid float literal.
    Syntax,

    /// The error was caused by reaching the end of the input before any
    /// literal started.
    Eof,
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `lexical_float::Error` into an `io::Error`.
    ///
    /// Every error is turned into an `InvalidData` IO error.
    ///
    /// ```
    /// use std::io;
    ///
    /// let err = lexical_float::parse::<f64>("1.5kg").unwrap_err();
    /// let io_err = io::Error::from(err);
    /// assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    /// ```
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// This type describe all possible errors that can occur when parsing a
/// float literal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// The input was empty.
    EofWhileParsingNumber,

    /// No float literal starts at the offset.
    InvalidNumber,

    /// The literal is followed by bytes that are not part of it.
    TrailingCharacters,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EofWhileParsingNumber => f.write_str("EOF while parsing a number"),
            ErrorCode::InvalidNumber => f.write_str("invalid number"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at offset {}", self.code, self.offset)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error(\"{}\", offset: {})", self.code, self.offset)
    }
}
