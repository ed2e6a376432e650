//! Century encoding carried in the month field.
//!
//! Each century shifts the two month digits by a fixed offset. Bands are
//! disjoint and scanned in table order; the first match wins.

use crate::consts::{CENTURY_CYCLE, MAX_MONTH};
use std::ops::RangeInclusive;

/// One row of the century table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenturyBand {
    /// Encoded month values belonging to this century
    pub raw:    RangeInclusive<u8>,
    /// First year of the century
    pub base:   u16,
    /// Amount added to the true month when encoding
    pub offset: u8,
}

impl CenturyBand {
    const fn new(offset: u8, base: u16) -> Self {
        Self {
            raw: (offset + 1)..=(offset + MAX_MONTH),
            base,
            offset,
        }
    }

    /// Whether `year` falls in this band's century
    pub const fn covers_year(&self, year: u16) -> bool {
        year >= self.base && year < self.base + CENTURY_CYCLE
    }
}

/// Ordered century table.
pub const CENTURY_BANDS: [CenturyBand; 5] = [
    CenturyBand::new(0, 1900),
    CenturyBand::new(20, 2000),
    CenturyBand::new(40, 2100),
    CenturyBand::new(60, 2200),
    CenturyBand::new(80, 1800),
];

/// Decodes the raw month digits into `(century base, month)`.
/// Returns `None` when `raw` is in no band.
pub fn decode_month(raw: u8) -> Option<(u16, u8)> {
    CENTURY_BANDS
        .iter()
        .find(|band| band.raw.contains(&raw))
        .map(|band| (band.base, raw - band.offset))
}

/// Encodes a true month for `year` into its raw month digits.
/// Returns `None` for months outside 1..=12 and for years outside every
/// band's century.
pub fn encode_month(year: u16, month: u8) -> Option<u8> {
    if !(1..=MAX_MONTH).contains(&month) {
        return None;
    }
    CENTURY_BANDS
        .iter()
        .find(|band| band.covers_year(year))
        .map(|band| month + band.offset)
}
