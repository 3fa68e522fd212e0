use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error,
    sentences::{Field, FromFields, RawSentence, SentenceKind},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTG<'a> {
    /// Course over ground in degrees true
    pub course_over_ground: Field<'a>,
    /// Course over ground in degrees magnetic
    pub course_over_ground_magnetic: Field<'a>,
    /// Speed over ground in knots
    pub speed_knots: Field<'a>,
    /// Speed over ground in km/h
    pub speed_kph: Field<'a>,
}

impl<'a> FromFields<'a> for VTG<'a> {
    const KIND: SentenceKind = SentenceKind::VTG;
    const MIN_FIELDS: usize = 8;

    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        Ok(Self {
            course_over_ground: fields.field(1)?,
            course_over_ground_magnetic: fields.field(3)?,
            speed_knots: fields.field(5)?,
            speed_kph: fields.field(7)?,
        })
    }
}

impl fmt::Display for VTG<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course: {}, Speed: {} Knots, {} Km/h",
            self.course_over_ground, self.speed_knots, self.speed_kph
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentences::Parsable;

    #[test]
    fn test_vtg_parsing() {
        let cases = [
            (",T,,M,,N,,K,N", ["", "", "", ""]),
            ("360.0,T,348.7,M,000.0,N,000.0,K,N", ["360.0", "348.7", "000.0", "000.0"]),
            ("054.7,T,034.4,M,005.5,N,010.2,K", ["054.7", "034.4", "005.5", "010.2"]),
            ("360.0,T,348.7,M,,,100.0,K,N", ["360.0", "348.7", "", "100.0"]),
        ];

        for (input, [course, magnetic, knots, kph]) in cases {
            let i = format!("$GPVTG,{input}");
            let (_, fields) = RawSentence::parser(&i).unwrap();

            let result = VTG::extract(&fields);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

            let vtg = result.unwrap();
            assert_eq!(vtg.course_over_ground, course);
            assert_eq!(vtg.course_over_ground_magnetic, magnetic);
            assert_eq!(vtg.speed_knots, knots);
            assert_eq!(vtg.speed_kph, kph);
        }
    }

    #[test]
    fn test_vtg_display() {
        let (_, fields) = RawSentence::parser("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").unwrap();
        let vtg = VTG::extract(&fields).unwrap();

        assert_eq!(vtg.to_string(), "Course: 054.7, Speed: 005.5 Knots, 010.2 Km/h");
    }

    #[test]
    fn test_vtg_too_few_fields() {
        let (_, fields) = RawSentence::parser("$GPVTG,054.7,T,034.4,M,005.5,N,010.2").unwrap();
        assert!(VTG::extract(&fields).is_ok());

        let (_, fields) = RawSentence::parser("$GPVTG,054.7,T,034.4,M,005.5,N").unwrap();
        assert_eq!(
            VTG::extract(&fields),
            Err(Error::TooFewFields {
                kind: SentenceKind::VTG,
                expected: 8,
                found: 7
            })
        );
    }
}
