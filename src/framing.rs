//! # Sentence Framing
//!
//! Separates the frame of a sentence from its content:
//! `$HHHHH,D1,D2,...,Dn[*CC][\r\n]`
//!
//! The framing parser handles the line ending and the `*CC` checksum suffix,
//! then hands the remaining content (prefix included) to a content parser.
//! Both the checksum and the line ending policies are configurable.

use nom::{
    Err, Parser,
    branch::alt,
    bytes::complete::{tag, take, take_until},
    character::complete::{char, hex_digit0},
    combinator::{opt, rest, rest_len, verify},
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
    sequence::terminated,
};

use crate::{Error, IResult};

/// Defines how the checksum suffix of a sentence is handled.
///
/// NMEA 0183 sentences can end with a `*CC` suffix where CC is a two-digit
/// hexadecimal value: the XOR of all bytes between the `$` and the `*`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// The suffix is stripped without being validated.
    ///
    /// Everything from the first `*` onward is removed before the content is
    /// split into fields. Receivers connected over short serial links are
    /// usually decoded this way.
    #[default]
    Ignore,

    /// Checksum is optional but will be validated if present.
    ///
    /// - If no checksum is present (`*CC` missing), parsing continues normally
    /// - If a checksum is present, it must be valid or parsing will fail
    Optional,

    /// Checksum is required and must be present.
    ///
    /// The parser will fail if no `*CC` checksum is found at the end of the sentence.
    /// If a checksum is present, it will be validated against the calculated checksum.
    Required,
}

/// Defines how the parser should handle CRLF line endings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// Any trailing `\r` and `\n` characters are stripped.
    #[default]
    Optional,

    /// CRLF line ending is required and must be present.
    ///
    /// The parser will fail if the sentence does not end with `\r\n`.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode for sentences taken from sources that already removed
    /// line endings, where a stray terminator indicates corrupted input.
    Forbidden,
}

/// Builds a framing parser around a content parser.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{ChecksumMode, FramingBuilder, IResult, LineEndingMode};
///
/// fn content_parser(i: &str) -> IResult<&str, Vec<&str>> {
///     Ok(("", i.split(',').collect()))
/// }
///
/// let mut parser = FramingBuilder::new()
///     .checksum_mode(ChecksumMode::Required)
///     .line_ending_mode(LineEndingMode::Required)
///     .build(content_parser);
///
/// let (_, fields) = parser("$GPGGA,data*6A\r\n").unwrap();
/// assert_eq!(fields, ["$GPGGA", "data"]);
///
/// assert!(parser("$GPGGA,data*6A").is_err()); // (missing CRLF)
/// assert!(parser("$GPGGA,data\r\n").is_err()); // (missing checksum)
/// assert!(parser("$GPGGA,data*99\r\n").is_err()); // (invalid checksum)
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FramingBuilder {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
}

impl FramingBuilder {
    /// Creates a builder with the lenient defaults:
    /// [`ChecksumMode::Ignore`] and [`LineEndingMode::Optional`].
    pub const fn new() -> Self {
        FramingBuilder {
            checksum_mode: ChecksumMode::Ignore,
            line_ending_mode: LineEndingMode::Optional,
        }
    }

    /// Sets the checksum mode for the parser.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the framing parser with the configured settings.
    ///
    /// The returned parser will:
    /// * Apply the line ending policy
    /// * Separate the content from the `*CC` suffix
    /// * Validate the checksum, unless it is ignored
    /// * Call the content parser on the content, `$` prefix included
    pub fn build<'a, O, F, E>(
        self,
        mut content_parser: F,
    ) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
    where
        F: Parser<&'a str, Output = O, Error = Error<&'a str, E>>,
        E: ParseError<&'a str>,
    {
        move |i: &'a str| {
            let (line, _) = crlf(self.line_ending_mode).parse(i)?;
            let (cc, data) = alt((take_until("*"), rest)).parse(line)?;
            let (_, cc) = checksum_suffix(self.checksum_mode).parse(cc)?;

            if let Some(found) = cc {
                let expected = checksum(data);
                if found != expected {
                    return Err(Err::Error(Error::ChecksumMismatch { expected, found }));
                }
            }

            content_parser.parse(data)
        }
    }
}

/// Parses the checksum suffix (`*CC` or nothing) according to the mode.
///
/// Returns the checksum value, [`None`] if it is absent or ignored.
pub(crate) fn checksum_suffix<'a, E: ParseError<&'a str>>(
    mode: ChecksumMode,
) -> impl Fn(&'a str) -> nom::IResult<&'a str, Option<u8>, E> {
    move |i: &'a str| {
        let (cc, parse_cc) = match mode {
            ChecksumMode::Ignore => return Ok(("", None)),
            ChecksumMode::Optional => opt(char('*')).map(|asterisk| asterisk.is_some()).parse(i)?,
            ChecksumMode::Required => char('*').map(|_| true).parse(i)?,
        };

        if parse_cc {
            let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
            let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

            hex_u32.map(|cc| Some(cc as u8)).parse(cc)
        } else if !cc.is_empty() {
            Err(Err::Error(E::from_error_kind(cc, ErrorKind::Count)))
        } else {
            Ok((cc, None))
        }
    }
}

/// Applies the line ending policy.
///
/// On success the remaining input is the line without its terminator.
pub(crate) fn crlf<'a, E: ParseError<&'a str>>(
    mode: LineEndingMode,
) -> impl Fn(&'a str) -> nom::IResult<&'a str, (), E> {
    move |i: &'a str| {
        let data = match mode {
            LineEndingMode::Optional => i.trim_end_matches(|c| c == '\r' || c == '\n'),
            LineEndingMode::Required => {
                let (rest, data) = opt(take_until("\r\n")).parse(i)?;
                match data {
                    Some(data) => {
                        let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(rest)?;
                        data
                    }
                    None => return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf))),
                }
            }
            LineEndingMode::Forbidden if i.ends_with(['\r', '\n']) => {
                return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
            }
            LineEndingMode::Forbidden => i,
        };

        Ok((data, ()))
    }
}

/// Calculates the NMEA 0183 checksum of the sentence content.
///
/// XOR of every byte after the leading `$`, up to the `*` delimiter (which is
/// not part of `data`).
pub(crate) fn checksum(data: &str) -> u8 {
    data.strip_prefix('$')
        .unwrap_or(data)
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Ensures that the parser consumes all input.
fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: nom::Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}
