use std::{fmt, ops::Range, str::FromStr};

use nom::{Parser, bytes::complete::take_till, character::complete::char, multi::separated_list1};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error, IResult,
    sentences::{Parsable, SentenceKind},
};

/// One field of a sentence, kept as the text the receiver sent.
///
/// Receivers emit empty fields when they have nothing to report (e.g. no
/// position while there is no fix). An empty field is the "absent" marker;
/// there is no numeric default.
///
/// ```rust
/// use nmea0183_decoder::Field;
///
/// let speed = Field::new("022.4");
/// assert_eq!(speed, "022.4");
/// assert_eq!(speed.parse::<f32>(), Some(Ok(22.4)));
///
/// let missing = Field::new("");
/// assert!(missing.is_absent());
/// assert_eq!(missing.parse::<f32>(), None);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<'a>(&'a str);

impl<'a> Field<'a> {
    /// Wraps the raw text of a field.
    pub const fn new(value: &'a str) -> Self {
        Field(value)
    }

    /// The raw text, empty when the field is absent.
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Whether the receiver left the field empty.
    pub const fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw text, [`None`] when the field is absent.
    pub fn value(&self) -> Option<&'a str> {
        (!self.is_absent()).then_some(self.0)
    }

    /// Parses the text into `T`, [`None`] when the field is absent.
    pub fn parse<T: FromStr>(&self) -> Option<Result<T, T::Err>> {
        self.value().map(|value| value.parse())
    }

    /// Drops everything from the first `*` onward.
    pub(crate) fn without_checksum(self) -> Self {
        Field(self.0.split_once('*').map_or(self.0, |(value, _)| value))
    }
}

impl PartialEq<str> for Field<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Field<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The comma-delimited fields of one sentence, prefix first.
///
/// Empty fields are preserved, so positional offsets stay stable however many
/// fields the receiver left blank. Every accessor is bounds-checked and reports
/// [`Error::TooFewFields`] instead of reading past the end.
///
/// ```rust
/// use nmea0183_decoder::sentences::{Parsable, RawSentence};
///
/// let (_, fields) = RawSentence::parser("$GPGSA,A,3,04,,,07").unwrap();
/// assert_eq!(fields.fields(), ["$GPGSA", "A", "3", "04", "", "", "07"]);
/// assert_eq!(fields.prefix(), "$GPGSA");
/// assert!(fields.field(7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawSentence<'a> {
    /// The leading field, e.g. `$GPGGA`.
    pub fn prefix(&self) -> &'a str {
        self.fields.first().copied().unwrap_or_default()
    }

    /// The kind named by the leading field.
    pub fn kind(&self) -> SentenceKind {
        SentenceKind::from_prefix(self.prefix())
    }

    /// All fields, prefix included.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Number of fields, prefix included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`: even an empty line has one (empty) field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index`, [`None`] past the end.
    pub fn get(&self, index: usize) -> Option<Field<'a>> {
        self.fields.get(index).copied().map(Field::new)
    }

    /// The field at `index`.
    pub fn field(&self, index: usize) -> Result<Field<'a>, Error<&'a str>> {
        self.get(index)
            .ok_or_else(|| self.too_few_fields(self.kind(), index + 1))
    }

    /// The fields within `range`.
    pub fn range(&self, range: Range<usize>) -> Result<&[&'a str], Error<&'a str>> {
        let expected = range.end;
        self.fields
            .get(range)
            .ok_or_else(|| self.too_few_fields(self.kind(), expected))
    }

    /// Checks that there are at least `expected` fields.
    pub fn require(&self, kind: SentenceKind, expected: usize) -> Result<(), Error<&'a str>> {
        if self.len() < expected {
            return Err(self.too_few_fields(kind, expected));
        }

        Ok(())
    }

    fn too_few_fields(&self, kind: SentenceKind, expected: usize) -> Error<&'a str> {
        Error::TooFewFields {
            kind,
            expected,
            found: self.len(),
        }
    }
}

impl<'a> Parsable<'a> for RawSentence<'a> {
    /// Splits on `,`. Never fails: an empty input yields a single empty field.
    fn parser(i: &'a str) -> IResult<&'a str, Self> {
        separated_list1(char(','), take_till(|c: char| c == ','))
            .map(|fields| RawSentence { fields })
            .parse(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_empty_fields() {
        let cases: [(&str, &[&str]); 6] = [
            ("", &[""]),
            (",", &["", ""]),
            ("$GPGGA", &["$GPGGA"]),
            ("$GPGGA,", &["$GPGGA", ""]),
            ("$GPGSA,A,3,04,,,07,,", &["$GPGSA", "A", "3", "04", "", "", "07", "", ""]),
            (",,a,,", &["", "", "a", "", ""]),
        ];

        for (input, expected) in cases {
            let result = RawSentence::parser(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

            let (rest, fields) = result.unwrap();
            assert_eq!(rest, "");
            assert_eq!(fields.fields(), expected, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_bounds_checked_access() {
        let (_, fields) = RawSentence::parser("$GPGLL,4916.45,N").unwrap();
        let too_few = |expected| Error::TooFewFields {
            kind: SentenceKind::GLL,
            expected,
            found: 3,
        };

        assert_eq!(fields.field(2), Ok(Field::new("N")));
        assert_eq!(fields.field(3), Err(too_few(4)));
        assert_eq!(fields.get(3), None);
        assert_eq!(fields.range(1..3), Ok(&["4916.45", "N"][..]));
        assert_eq!(fields.range(1..5), Err(too_few(5)));
        assert_eq!(fields.require(SentenceKind::GLL, 3), Ok(()));
        assert_eq!(fields.require(SentenceKind::GLL, 7), Err(too_few(7)));
    }

    #[test]
    fn test_field() {
        assert_eq!(Field::new("1.0*75").without_checksum(), "1.0");
        assert_eq!(Field::new("*75").without_checksum(), "");
        assert_eq!(Field::new("1.0").without_checksum(), "1.0");

        assert_eq!(Field::new("08").parse::<u8>(), Some(Ok(8)));
        assert!(matches!(Field::new("A8").parse::<u8>(), Some(Err(_))));
        assert_eq!(Field::new("").parse::<u8>(), None);
        assert_eq!(Field::new("").value(), None);
        assert_eq!(Field::new("A").value(), Some("A"));
        assert_eq!(Field::new("4807.038").to_string(), "4807.038");
    }
}
