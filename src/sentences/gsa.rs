use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error,
    sentences::{Field, FromFields, RawSentence, SentenceKind},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         | |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GSA<'a> {
    /// Selection mode, `A` = automatic, `M` = manual
    pub selection_mode: Field<'a>,
    /// Fix mode, `1` = no fix, `2` = 2D, `3` = 3D
    pub fix_mode: Field<'a>,
    /// PRN numbers of the satellites used in the fix, empty slots left out
    pub fix_sats_prn: heapless::Vec<Field<'a>, 12>,
    /// Position Dilution of Precision
    pub pdop: Field<'a>,
    /// Horizontal Dilution of Precision
    pub hdop: Field<'a>,
    /// Vertical Dilution of Precision
    pub vdop: Field<'a>,
}

impl<'a> FromFields<'a> for GSA<'a> {
    const KIND: SentenceKind = SentenceKind::GSA;
    const MIN_FIELDS: usize = 18;

    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        let fix_sats_prn = fields
            .range(3..15)?
            .iter()
            .copied()
            .map(Field::new)
            .filter(|prn| !prn.is_absent())
            .collect();

        Ok(Self {
            selection_mode: fields.field(1)?,
            fix_mode: fields.field(2)?,
            fix_sats_prn,
            pdop: fields.field(15)?,
            hdop: fields.field(16)?,
            vdop: fields.field(17)?.without_checksum(),
        })
    }
}

impl fmt::Display for GSA<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode: {}, Fix Type: {}, Satellites: [", self.selection_mode, self.fix_mode)?;
        for (n, prn) in self.fix_sats_prn.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{prn}'")?;
        }
        write!(
            f,
            "], PDOP: {}, HDOP: {}, VDOP: {}",
            self.pdop, self.hdop, self.vdop
        )
    }
}
