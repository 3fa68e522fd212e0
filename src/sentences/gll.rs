use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error,
    sentences::{Field, FromFields, RawSentence, SentenceKind},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GLL<'a> {
    /// Latitude, `ddmm.mm`
    pub latitude: Field<'a>,
    /// `N` or `S`
    pub latitude_hemisphere: Field<'a>,
    /// Longitude, `dddmm.mm`
    pub longitude: Field<'a>,
    /// `E` or `W`
    pub longitude_hemisphere: Field<'a>,
    /// Fix time in UTC
    pub time: Field<'a>,
    /// Status, `A` = active, `V` = void
    pub status: Field<'a>,
}

impl<'a> FromFields<'a> for GLL<'a> {
    const KIND: SentenceKind = SentenceKind::GLL;
    const MIN_FIELDS: usize = 7;

    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        Ok(Self {
            latitude: fields.field(1)?,
            latitude_hemisphere: fields.field(2)?,
            longitude: fields.field(3)?,
            longitude_hemisphere: fields.field(4)?,
            time: fields.field(5)?,
            status: fields.field(6)?,
        })
    }
}

impl fmt::Display for GLL<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {} {}, Longitude: {} {}, Time: {}, Status: {}",
            self.latitude,
            self.latitude_hemisphere,
            self.longitude,
            self.longitude_hemisphere,
            self.time,
            self.status
        )
    }
}
