mod field;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;

pub use field::{Field, RawSentence};
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::{GSV, Satellite};
pub use rmc::RMC;
pub use vtg::VTG;

use std::fmt;

use crate::{Error, IResult};

/// A trait for types that can be parsed from a string input.
///
/// Implemented by [`RawSentence`] (the field splitter) and [`NmeaSentence`]
/// (split, dispatch and extract), so both can be plugged into the
/// [`FramingBuilder`](crate::FramingBuilder) as content parsers.
pub trait Parsable<'a>: Sized {
    /// Parses the input and returns a result.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`.
    /// - On failure: An [`Error`] indicating the parsing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_decoder::sentences::{NmeaSentence, Parsable};
    ///
    /// let content = "$GPGGA,123456.00,4916.29,N,12311.76,W,1,08,0.9,545.4,M,46.9,M,,";
    /// let result = NmeaSentence::parser(content);
    /// assert!(result.is_ok());
    /// ```
    fn parser(input: &'a str) -> IResult<&'a str, Self>;
}

/// Positional extraction of a record from the fields of one sentence.
///
/// Extractors read fields at fixed offsets. [`FromFields::extract`] checks
/// [`FromFields::MIN_FIELDS`] first, so `from_fields` only runs on a sequence
/// long enough for every mandatory offset.
pub trait FromFields<'a>: Sized {
    /// The kind this extractor is dispatched for.
    const KIND: SentenceKind;

    /// The number of fields, prefix included, the extractor needs.
    const MIN_FIELDS: usize;

    /// Builds the record from a field sequence of sufficient length.
    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>>;

    /// Checks the field count, then builds the record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_decoder::{
    ///     Error, SentenceKind,
    ///     sentences::{FromFields, Parsable, RawSentence, VTG},
    /// };
    ///
    /// let (_, fields) = RawSentence::parser("$GPVTG,054.7,T,034.4,M").unwrap();
    /// assert_eq!(
    ///     VTG::extract(&fields),
    ///     Err(Error::TooFewFields { kind: SentenceKind::VTG, expected: 8, found: 5 })
    /// );
    /// ```
    fn extract(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        fields.require(Self::KIND, Self::MIN_FIELDS)?;
        Self::from_fields(fields)
    }
}

/// A decoded sentence, one variant per supported sentence type.
///
/// Every field borrows from the line it was decoded from and keeps the exact
/// text the receiver sent; see [`Field`] for numeric access.
///
/// ## Supported Sentence Types
///
/// | Prefix   | Variant      | Description                                |
/// |----------|--------------|--------------------------------------------|
/// | `$GPGGA` | GGA([`GGA`]) | Global Positioning System Fix Data         |
/// | `$GPGLL` | GLL([`GLL`]) | Geographic Position - Latitude/Longitude   |
/// | `$GPGSA` | GSA([`GSA`]) | GPS DOP and active satellites              |
/// | `$GPGSV` | GSV([`GSV`]) | Satellites in View                         |
/// | `$GPRMC` | RMC([`RMC`]) | Recommended Minimum Navigation Information |
/// | `$GPVTG` | VTG([`VTG`]) | Track made good and Ground speed           |
///
/// ## Error Handling
///
/// [`NmeaSentence::parser`] works on sentence content (no line ending, no
/// checksum suffix) and fails with:
/// - [`Error::UnsupportedType`] when the prefix is not in the table above
/// - [`Error::TooFewFields`] when the sentence is truncated
///
/// ```rust
/// use nmea0183_decoder::{Error, SentenceKind, sentences::{NmeaSentence, Parsable}};
///
/// let result = NmeaSentence::parser("$GPZDA,123519,04,07,2025,,");
/// assert_eq!(result, Err(nom::Err::Error(Error::UnsupportedType("$GPZDA"))));
///
/// let result = NmeaSentence::parser("$GPGLL,4916.45,N");
/// assert_eq!(
///     result,
///     Err(nom::Err::Error(Error::TooFewFields { kind: SentenceKind::GLL, expected: 7, found: 3 }))
/// );
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NmeaSentence<'a> {
    /// Global Positioning System Fix Data
    GGA(GGA<'a>),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL<'a>),
    /// GPS DOP and active satellites
    GSA(GSA<'a>),
    /// Satellites in View
    GSV(GSV<'a>),
    /// Recommended Minimum Navigation Information
    RMC(RMC<'a>),
    /// Track made good and Ground speed
    VTG(VTG<'a>),
}

impl NmeaSentence<'_> {
    /// The kind of the decoded sentence.
    pub fn kind(&self) -> SentenceKind {
        match self {
            NmeaSentence::GGA(_) => SentenceKind::GGA,
            NmeaSentence::GLL(_) => SentenceKind::GLL,
            NmeaSentence::GSA(_) => SentenceKind::GSA,
            NmeaSentence::GSV(_) => SentenceKind::GSV,
            NmeaSentence::RMC(_) => SentenceKind::RMC,
            NmeaSentence::VTG(_) => SentenceKind::VTG,
        }
    }
}

impl<'a> Parsable<'a> for NmeaSentence<'a> {
    fn parser(i: &'a str) -> IResult<&'a str, Self> {
        let (i, fields) = RawSentence::parser(i)?;

        let sentence = match fields.kind() {
            SentenceKind::GGA => GGA::extract(&fields).map(Self::GGA),
            SentenceKind::GLL => GLL::extract(&fields).map(Self::GLL),
            SentenceKind::GSA => GSA::extract(&fields).map(Self::GSA),
            SentenceKind::GSV => GSV::extract(&fields).map(Self::GSV),
            SentenceKind::RMC => RMC::extract(&fields).map(Self::RMC),
            SentenceKind::VTG => VTG::extract(&fields).map(Self::VTG),
            SentenceKind::Unsupported => Err(Error::UnsupportedType(fields.prefix())),
        };

        sentence
            .map(|sentence| (i, sentence))
            .map_err(nom::Err::Error)
    }
}

impl fmt::Display for NmeaSentence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmeaSentence::GGA(gga) => fmt::Display::fmt(gga, f),
            NmeaSentence::GLL(gll) => fmt::Display::fmt(gll, f),
            NmeaSentence::GSA(gsa) => fmt::Display::fmt(gsa, f),
            NmeaSentence::GSV(gsv) => fmt::Display::fmt(gsv, f),
            NmeaSentence::RMC(rmc) => fmt::Display::fmt(rmc, f),
            NmeaSentence::VTG(vtg) => fmt::Display::fmt(vtg, f),
        }
    }
}

macro_rules! sentence_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $prefix:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Any other leading field
            Unsupported,
        }

        impl $name {
            /// Resolves the kind from the leading field of a sentence.
            ///
            /// The match is exact and case-sensitive.
            pub fn from_prefix(prefix: &str) -> Self {
                match prefix {
                    $($prefix => Self::$variant,)*
                    _ => Self::Unsupported,
                }
            }

            /// The leading field of this kind, [`None`] for `Unsupported`.
            pub const fn prefix(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($prefix),)*
                    Self::Unsupported => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => f.write_str(stringify!($variant)),)*
                    Self::Unsupported => f.write_str("Unsupported"),
                }
            }
        }
    };
}

sentence_kinds! {
    /// Sentence type, determined by the first field of a sentence
    pub enum SentenceKind {
        /// `$GPGGA` - Global Positioning System Fix Data
        "$GPGGA" => GGA,
        /// `$GPRMC` - Recommended Minimum Navigation Information
        "$GPRMC" => RMC,
        /// `$GPVTG` - Track made good and Ground speed
        "$GPVTG" => VTG,
        /// `$GPGSV` - Satellites in View
        "$GPGSV" => GSV,
        /// `$GPGSA` - GPS DOP and active satellites
        "$GPGSA" => GSA,
        /// `$GPGLL` - Geographic Position - Latitude/Longitude
        "$GPGLL" => GLL,
    }
}
