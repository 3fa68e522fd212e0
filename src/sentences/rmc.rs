use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error,
    sentences::{Field, FromFields, RawSentence, SentenceKind},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RMC<'a> {
    /// Fix time in UTC
    pub time: Field<'a>,
    /// Status, `A` = active, `V` = void
    pub status: Field<'a>,
    /// Latitude, `ddmm.mm`
    pub latitude: Field<'a>,
    /// `N` or `S`
    pub latitude_hemisphere: Field<'a>,
    /// Longitude, `dddmm.mm`
    pub longitude: Field<'a>,
    /// `E` or `W`
    pub longitude_hemisphere: Field<'a>,
    /// Speed over ground in knots
    pub speed_over_ground: Field<'a>,
    /// Course over ground in degrees
    pub course_over_ground: Field<'a>,
    /// Fix date, `ddmmyy`
    pub date: Option<Field<'a>>,
}

impl<'a> FromFields<'a> for RMC<'a> {
    const KIND: SentenceKind = SentenceKind::RMC;
    const MIN_FIELDS: usize = 9;

    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        Ok(Self {
            time: fields.field(1)?,
            status: fields.field(2)?,
            latitude: fields.field(3)?,
            latitude_hemisphere: fields.field(4)?,
            longitude: fields.field(5)?,
            longitude_hemisphere: fields.field(6)?,
            speed_over_ground: fields.field(7)?,
            course_over_ground: fields.field(8)?,
            date: fields.get(9),
        })
    }
}

impl fmt::Display for RMC<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {}, Status: {}, Latitude: {}, Longitude: {}, Speed: {}, Course: {}",
            self.time,
            self.status,
            self.latitude,
            self.longitude,
            self.speed_over_ground,
            self.course_over_ground
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sentences::Parsable;

    #[test]
    fn test_rmc_parsing() {
        let (_, fields) = RawSentence::parser(
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W",
        )
        .unwrap();
        let rmc = RMC::extract(&fields).unwrap();

        assert_eq!(rmc.time, "123519");
        assert_eq!(rmc.status, "A");
        assert_eq!(rmc.latitude, "4807.038");
        assert_eq!(rmc.latitude_hemisphere, "N");
        assert_eq!(rmc.longitude, "01131.000");
        assert_eq!(rmc.longitude_hemisphere, "E");
        assert_eq!(rmc.speed_over_ground, "022.4");
        assert_eq!(rmc.course_over_ground, "084.4");
        assert_eq!(rmc.date, Some(Field::new("230394")));
        assert_eq!(
            rmc.to_string(),
            "Time: 123519, Status: A, Latitude: 4807.038, Longitude: 01131.000, Speed: 022.4, Course: 084.4"
        );
    }

    #[test]
    fn test_rmc_void() {
        let cases = ["$GPRMC,235947.000,V,,,,,,", "$GPRMC,235947.000,V,,,,,,,"];

        for input in cases {
            let (_, fields) = RawSentence::parser(input).unwrap();
            let result = RMC::extract(&fields);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

            let rmc = result.unwrap();
            assert_eq!(rmc.status, "V");
            assert!(rmc.speed_over_ground.is_absent());
            assert!(rmc.course_over_ground.is_absent());
        }
    }

    #[test]
    fn test_rmc_too_few_fields() {
        let (_, fields) = RawSentence::parser("$GPRMC,123519,A,4807.038,N").unwrap();
        assert_eq!(
            RMC::extract(&fields),
            Err(Error::TooFewFields {
                kind: SentenceKind::RMC,
                expected: 9,
                found: 5
            })
        );
    }
}
