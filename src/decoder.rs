//! # Sentence Decoder
//!
//! Turns one received line into a decoded sentence, "no output" for sentence
//! types that are not supported, or an error.

use nom::error::ErrorKind;

use crate::{
    ChecksumMode, Error, FramingBuilder, LineEndingMode,
    sentences::{NmeaSentence, Parsable, SentenceKind},
};

/// A configurable, stateless sentence decoder.
///
/// The decoder holds configuration only: decoding the same line twice gives
/// the same result, and one decoder can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{ChecksumMode, Error, NmeaSentence, SentenceDecoder};
///
/// let decoder = SentenceDecoder::new();
///
/// let line = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
/// match decoder.decode(line) {
///     Ok(Some(NmeaSentence::GGA(gga))) => assert_eq!(gga.satellite_count, "08"),
///     other => panic!("unexpected result: {other:?}"),
/// }
///
/// // Unsupported sentence types produce no output
/// assert_eq!(decoder.decode(b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n"), Ok(None));
///
/// // Checksum verification is opt-in
/// let strict = SentenceDecoder::new().checksum_mode(ChecksumMode::Required);
/// assert_eq!(
///     strict.decode(b"$GPGLL,4916.45,N,12311.12,W,225444,A*00\r\n"),
///     Err(Error::ChecksumMismatch { expected: 0x31, found: 0x00 })
/// );
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentenceDecoder {
    framing: FramingBuilder,
}

impl SentenceDecoder {
    /// Creates a decoder that strips the checksum without validating it and
    /// accepts lines with or without their CR/LF terminator.
    pub const fn new() -> Self {
        SentenceDecoder {
            framing: FramingBuilder::new(),
        }
    }

    /// Sets the checksum mode.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.framing = self.framing.checksum_mode(mode);
        self
    }

    /// Sets the line ending mode.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.framing = self.framing.line_ending_mode(mode);
        self
    }

    /// Decodes one line of raw bytes.
    ///
    /// Bytes that are not valid UTF-8 are reported as
    /// [`Error::MalformedEncoding`].
    pub fn decode<'a>(&self, line: &'a [u8]) -> Result<Option<NmeaSentence<'a>>, Error<&'a str>> {
        let line = std::str::from_utf8(line).map_err(Error::MalformedEncoding)?;
        self.decode_str(line)
    }

    /// Decodes one line of text.
    ///
    /// Returns `Ok(None)` when the sentence type is not supported, whatever
    /// the checksum and line ending modes.
    pub fn decode_str<'a>(
        &self,
        line: &'a str,
    ) -> Result<Option<NmeaSentence<'a>>, Error<&'a str>> {
        if SentenceKind::from_prefix(leading_field(line)) == SentenceKind::Unsupported {
            return Ok(None);
        }

        let mut parser = self.framing.build(NmeaSentence::parser);

        match parser(line) {
            Ok((_, sentence)) => Ok(Some(sentence)),
            Err(nom::Err::Error(Error::UnsupportedType(_))) => Ok(None),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
            Err(nom::Err::Incomplete(_)) => Err(Error::ParsingError(nom::error::Error::new(
                line,
                ErrorKind::Complete,
            ))),
        }
    }
}

/// The text before the first delimiter or line terminator.
fn leading_field(line: &str) -> &str {
    line.split([',', '*', '\r', '\n']).next().unwrap_or_default()
}

/// Decodes one line with the default [`SentenceDecoder`].
///
/// ```rust
/// use nmea0183_decoder::{NmeaSentence, decode};
///
/// let line = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
/// let Ok(Some(NmeaSentence::RMC(rmc))) = decode(line) else {
///     panic!("expected an RMC sentence");
/// };
///
/// assert_eq!(rmc.time, "123519");
/// assert_eq!(rmc.status, "A");
/// assert_eq!(rmc.speed_over_ground.parse::<f32>(), Some(Ok(22.4)));
/// ```
pub fn decode(line: &[u8]) -> Result<Option<NmeaSentence<'_>>, Error<&str>> {
    SentenceDecoder::new().decode(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_field() {
        let cases = [
            ("$GPGGA,123519,4807.038", "$GPGGA"),
            ("$GPGLL*1D", "$GPGLL"),
            ("$GPVTG\r\n", "$GPVTG"),
            ("$GPRMC\n", "$GPRMC"),
            ("$PMTK001,604,3*32\r\n", "$PMTK001"),
            (",,", ""),
            ("", ""),
        ];

        for (line, expected) in cases {
            assert_eq!(leading_field(line), expected, "Failed: {line:?}");
        }
    }
}
