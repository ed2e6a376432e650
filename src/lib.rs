mod century;
mod checksum;
mod consts;
mod pesel;
mod prelude;
mod types;

pub use century::{CENTURY_BANDS, CenturyBand, decode_month, encode_month};
pub use checksum::check_digit;
pub use consts::*;
pub use pesel::{EncodeError, Pesel};
pub use types::{BirthDate, DateError, Gender, days_in_month, is_leap_year};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Why an identifier was rejected. `Display` yields the fixed user-facing
/// message for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    #[error("PESEL must be 11 digits.")]
    MalformedInput,
    #[error("Invalid checksum.")]
    InvalidChecksum,
    #[error("Invalid month in PESEL.")]
    InvalidMonth,
    #[error("Invalid date in PESEL.")]
    InvalidDate,
}

/// Outcome of [`validate`]. Either both decoded fields are present or a
/// single reason is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
    Valid { birth_date: BirthDate, gender: Gender },
    Invalid { reason: ErrorKind },
}

impl Validation {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub const fn birth_date(&self) -> Option<BirthDate> {
        match *self {
            Self::Valid { birth_date, .. } => Some(birth_date),
            Self::Invalid { .. } => None,
        }
    }

    pub const fn gender(&self) -> Option<Gender> {
        match *self {
            Self::Valid { gender, .. } => Some(gender),
            Self::Invalid { .. } => None,
        }
    }

    pub const fn error(&self) -> Option<ErrorKind> {
        match *self {
            Self::Valid { .. } => None,
            Self::Invalid { reason } => Some(reason),
        }
    }

    /// Flattens into the optional-field shape collaborators render.
    pub fn to_report(&self) -> ValidationReport {
        match *self {
            Self::Valid { birth_date, gender } => ValidationReport {
                valid:      true,
                birth_date: Some(birth_date.ymd()),
                gender:     Some(gender),
                error:      None,
            },
            Self::Invalid { reason } => ValidationReport {
                valid:      false,
                birth_date: None,
                gender:     None,
                error:      Some(reason.to_string()),
            },
        }
    }
}

impl From<Result<Pesel, ErrorKind>> for Validation {
    fn from(result: Result<Pesel, ErrorKind>) -> Self {
        match result {
            Ok(pesel) => Self::Valid {
                birth_date: pesel.birth_date(),
                gender:     pesel.gender(),
            },
            Err(reason) => Self::Invalid { reason },
        }
    }
}

/// Serializable view of a [`Validation`]. Absent fields are omitted and the
/// birth date is a `(year, month, day)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid:      bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<(u16, u8, u8)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender:     Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:      Option<String>,
}

impl From<Validation> for ValidationReport {
    fn from(validation: Validation) -> Self {
        validation.to_report()
    }
}

/// Validates `input` as a PESEL and decodes its birth date and gender.
///
/// Never panics. Stages run in order (format, checksum, century/month,
/// calendar date) and the first failure is returned.
pub fn validate(input: &str) -> Validation {
    let result = Pesel::parse(input);
    match &result {
        Ok(_) => trace!("PESEL accepted"),
        // The identifier itself is personal data and is never logged
        Err(reason) => debug!(reason = ?reason, "PESEL rejected"),
    }
    result.into()
}
