/// Number of digits in a PESEL
pub const PESEL_LEN: usize = 11;

/// Checksum coefficients for digit positions 0..=9
pub const WEIGHTS: [u8; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Checksum modulus
pub(crate) const CHECKSUM_MODULUS: u32 = 10;

/// Earliest year a PESEL can encode
pub const MIN_ENCODABLE_YEAR: u16 = 1800;
/// Latest year a PESEL can encode (inclusive)
pub const MAX_ENCODABLE_YEAR: u16 = 2299;

/// Largest 4-digit ordinal (positions 6..=9)
pub const MAX_SERIAL: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // unused
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator used when rendering a birth date as `YYYY-MM-DD`
pub const DATE_SEPARATOR: char = '-';
