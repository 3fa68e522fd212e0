//! # NMEA 0183 Sentence Decoder
//!
//! This library decodes the sentences a GPS receiver emits:
//! `$GPxxx,D1,D2,...,Dn*CC\r\n`
//!
//! Six sentence types are supported: GGA, RMC, VTG, GSV, GSA and GLL. Every
//! other sentence type produces no output, so unrelated traffic on the same
//! serial line can be skipped silently.
//!
//! Field values are kept as the text the receiver sent ([`Field`]), with empty
//! fields marking absent values. Numeric interpretation is left to the caller.
//!
//! The decoder is configurable to handle:
//! - Ignored, optional or required checksum validation
//! - Optional, required or forbidden CRLF line endings
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{NmeaSentence, decode};
//!
//! let line = b"$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00*49\r\n";
//!
//! match decode(line) {
//!     Ok(Some(NmeaSentence::GSV(gsv))) => {
//!         assert_eq!(gsv.satellites_in_view, "11");
//!         assert_eq!(gsv.satellites.len(), 3);
//!     }
//!     Ok(Some(other)) => println!("{other}"),
//!     Ok(None) => {}
//!     Err(e) => println!("Error decoding data: {e}"),
//! }
//! ```

mod decoder;
pub mod error;
mod framing;
pub mod sentences;

pub use decoder::{SentenceDecoder, decode};
pub use error::{Error, IResult};
pub use framing::{ChecksumMode, FramingBuilder, LineEndingMode};
pub use sentences::{Field, NmeaSentence, SentenceKind};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod checksum;
    mod crlf;
    mod decode;
}
