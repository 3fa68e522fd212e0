use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Error,
    sentences::{Field, FromFields, RawSentence, SentenceKind},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Fields 4 onward come in blocks of four, one block per satellite. Only
/// complete blocks are kept, and at most four per sentence. Merging the pages
/// of a multi-sentence group is left to the caller.
///
/// [`decode`](crate::decode) strips the `*hh` suffix before splitting, so the
/// last SNR holds the digits only (`00`, not `00*7F`). [`FromFields::extract`]
/// on raw fields keeps whatever text it is given.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GSV<'a> {
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: Field<'a>,
    /// Sentence number of this GSV message within current group
    pub message_number: Field<'a>,
    /// Total number of satellites in view
    pub satellites_in_view: Field<'a>,
    /// Satellite information
    pub satellites: heapless::Vec<Satellite<'a>, 4>,
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Satellite<'a> {
    /// PRN number
    pub id: Field<'a>,
    /// Elevation in degrees, 90 maximum
    pub elevation: Field<'a>,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: Field<'a>,
    /// Signal to noise ratio in dB, empty when not tracking
    pub snr: Field<'a>,
}

impl<'a> Satellite<'a> {
    fn from_block(block: &[&'a str]) -> Option<Self> {
        match *block {
            [id, elevation, azimuth, snr] => Some(Self {
                id: Field::new(id),
                elevation: Field::new(elevation),
                azimuth: Field::new(azimuth),
                snr: Field::new(snr),
            }),
            _ => None,
        }
    }
}

impl<'a> FromFields<'a> for GSV<'a> {
    const KIND: SentenceKind = SentenceKind::GSV;
    const MIN_FIELDS: usize = 4;

    fn from_fields(fields: &RawSentence<'a>) -> Result<Self, Error<&'a str>> {
        let satellites = fields
            .fields()
            .get(4..)
            .unwrap_or_default()
            .chunks(4)
            .filter_map(Satellite::from_block)
            .take(4)
            .collect();

        Ok(Self {
            total_messages: fields.field(1)?,
            message_number: fields.field(2)?,
            satellites_in_view: fields.field(3)?,
            satellites,
        })
    }
}

impl fmt::Display for Satellite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Satellite ID: {}, Elevation: {}, Azimuth: {}, SNR: {}",
            self.id, self.elevation, self.azimuth, self.snr
        )
    }
}

impl fmt::Display for GSV<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Satellites in View: {}, Details: [", self.satellites_in_view)?;
        for satellite in &self.satellites {
            write!(f, "{satellite}; ")?;
        }
        f.write_str("]")
    }
}
