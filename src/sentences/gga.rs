use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error,
    sentences::{Field, FromFields, RawSentence, SentenceKind},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Fields 1 to 7 are required; HDOP and altitude are kept when the receiver
/// sends them.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GGA<'a> {
    /// Fix time in UTC, `hhmmss.sss`
    pub time: Field<'a>,
    /// Latitude, `ddmm.mm`
    pub latitude: Field<'a>,
    /// `N` or `S`
    pub latitude_hemisphere: Field<'a>,
    /// Longitude, `dddmm.mm`
    pub longitude: Field<'a>,
    /// `E` or `W`
    pub longitude_hemisphere: Field<'a>,
    /// GPS Quality Indicator, `0` when there is no fix
    pub fix_quality: Field<'a>,
    /// Number of satellites in use
    pub satellite_count: Field<'a>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<Field<'a>>,
    /// Altitude above mean sea level, in meters
    pub altitude: Option<Field<'a>>,
}

impl<'a> FromFields<'a> for GGA<'a> {
    const KIND: SentenceKind = SentenceKind::GGA;
    const MIN_FIELDS: usize = 8;

    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        Ok(Self {
            time: fields.field(1)?,
            latitude: fields.field(2)?,
            latitude_hemisphere: fields.field(3)?,
            longitude: fields.field(4)?,
            longitude_hemisphere: fields.field(5)?,
            fix_quality: fields.field(6)?,
            satellite_count: fields.field(7)?,
            hdop: fields.get(8),
            altitude: fields.get(9),
        })
    }
}

impl fmt::Display for GGA<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {}, Latitude: {}, Longitude: {}, Satellites: {}",
            self.time, self.latitude, self.longitude, self.satellite_count
        )
    }
}
