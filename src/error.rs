//! # Error Types
//!
//! This module defines the error type returned by the framing parser, the
//! sentence extractors and the top-level decoder.

use std::{fmt, str::Utf8Error};

use nom::error::{ErrorKind, FromExternalError, ParseError};

use crate::sentences::SentenceKind;

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding a sentence.
///
/// With the default [`SentenceDecoder`](crate::SentenceDecoder) configuration only
/// [`Error::MalformedEncoding`] and [`Error::TooFewFields`] reach the caller:
/// [`Error::UnsupportedType`] is turned into "no output", and the checksum
/// related variants require checksum verification to be switched on.
#[derive(Debug, PartialEq)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The raw line is not valid UTF-8 text.
    ///
    /// Carries the underlying decoding error, which is also exposed through
    /// [`std::error::Error::source`].
    MalformedEncoding(Utf8Error),

    /// The sentence has fewer fields than its kind needs.
    ///
    /// Reported instead of reading past the end of the field sequence.
    TooFewFields {
        /// The sentence kind resolved from the prefix
        kind: SentenceKind,
        /// The number of fields the extractor needs
        expected: usize,
        /// The number of fields the sentence actually has
        found: usize,
    },

    /// The leading field does not name one of the supported sentence types.
    ///
    /// This is not a failure: the decoder maps it to "no output" so that
    /// unrecognized traffic can be skipped silently. Contains the leading field.
    UnsupportedType(I),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Only produced when checksum verification is enabled.
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The framing around the sentence content was invalid.
    ///
    /// Wraps nom's parsing errors, e.g. a checksum suffix that is not two hex
    /// digits or a line ending that violates the configured policy.
    ParsingError(E),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<I, E> fmt::Display for Error<I, E>
where
    I: fmt::Display,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedEncoding(e) => write!(f, "malformed encoding: {e}"),
            Error::TooFewFields {
                kind,
                expected,
                found,
            } => write!(
                f,
                "too few fields for {kind}: expected at least {expected}, found {found}"
            ),
            Error::UnsupportedType(prefix) => write!(f, "unsupported sentence type {prefix}"),
            Error::ChecksumMismatch { expected, found } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, found {found:02X}"
            ),
            Error::ParsingError(e) => write!(f, "invalid framing: {e:?}"),
        }
    }
}

impl<I, E> std::error::Error for Error<I, E>
where
    I: fmt::Debug + fmt::Display,
    E: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedEncoding(e) => Some(e),
            _ => None,
        }
    }
}
