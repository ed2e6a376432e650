use crate::century::{decode_month, encode_month};
use crate::checksum::check_digit;
use crate::consts::{MAX_ENCODABLE_YEAR, MAX_SERIAL, MIN_ENCODABLE_YEAR, PESEL_LEN};
use crate::prelude::*;
use crate::{BirthDate, ErrorKind, Gender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A PESEL that passed every validation stage.
///
/// The decoded birth date and gender are kept alongside the digits, so a
/// `Pesel` can never exist without them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Serialize, Deserialize)]
#[display(fmt = "{number}")]
#[serde(try_from = "String", into = "String")]
pub struct Pesel {
    #[deref]
    number:     String,
    digits:     [u8; PESEL_LEN],
    birth_date: BirthDate,
    gender:     Gender,
}

/// Error building a PESEL from its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Year {0} cannot be encoded (must be {min}-{max})", min = MIN_ENCODABLE_YEAR, max = MAX_ENCODABLE_YEAR)]
    YearOutOfRange(u16),
    #[error("Serial {0} out of range (must be 0-{max})", max = MAX_SERIAL)]
    SerialOutOfRange(u16),
}

impl Pesel {
    /// Runs the full validation pipeline, stopping at the first failing stage.
    ///
    /// # Errors
    /// Returns the `ErrorKind` of the first stage that rejects `input`.
    pub fn parse(input: &str) -> Result<Self, ErrorKind> {
        let digits = parse_digits(input)?;

        let mut head = [0u8; 10];
        head.copy_from_slice(&digits[..10]);
        if check_digit(&head) != digits[10] {
            return Err(ErrorKind::InvalidChecksum);
        }

        let year2 = u16::from(pair(digits[0], digits[1]));
        let (base, month) =
            decode_month(pair(digits[2], digits[3])).ok_or(ErrorKind::InvalidMonth)?;
        let day = pair(digits[4], digits[5]);

        let birth_date =
            BirthDate::new(base + year2, month, day).map_err(|_| ErrorKind::InvalidDate)?;

        Ok(Self::from_digits(digits, birth_date))
    }

    /// Builds the PESEL for `birth_date` with the given 4-digit ordinal.
    /// The ordinal's last digit decides gender.
    ///
    /// # Errors
    /// Returns `EncodeError` if the year lies outside the encodable span or
    /// `serial` has more than four digits.
    pub fn from_parts(birth_date: BirthDate, serial: u16) -> Result<Self, EncodeError> {
        let year = birth_date.year();
        if !(MIN_ENCODABLE_YEAR..=MAX_ENCODABLE_YEAR).contains(&year) {
            return Err(EncodeError::YearOutOfRange(year));
        }
        if serial > MAX_SERIAL {
            return Err(EncodeError::SerialOutOfRange(serial));
        }

        let raw_month =
            encode_month(year, birth_date.month()).ok_or(EncodeError::YearOutOfRange(year))?;
        let year2 = (year % 100) as u8;
        let day = birth_date.day();

        let mut digits = [0u8; PESEL_LEN];
        digits[0] = year2 / 10;
        digits[1] = year2 % 10;
        digits[2] = raw_month / 10;
        digits[3] = raw_month % 10;
        digits[4] = day / 10;
        digits[5] = day % 10;
        digits[6] = (serial / 1000) as u8;
        digits[7] = (serial / 100 % 10) as u8;
        digits[8] = (serial / 10 % 10) as u8;
        digits[9] = (serial % 10) as u8;

        let mut head = [0u8; 10];
        head.copy_from_slice(&digits[..10]);
        digits[10] = check_digit(&head);

        Ok(Self::from_digits(digits, birth_date))
    }

    fn from_digits(digits: [u8; PESEL_LEN], birth_date: BirthDate) -> Self {
        Self {
            number: digits.iter().map(|&d| char::from(b'0' + d)).collect(),
            digits,
            birth_date,
            gender: Gender::from_digit(digits[9]),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }

    pub const fn digits(&self) -> [u8; PESEL_LEN] {
        self.digits
    }

    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// The 4-digit ordinal in positions 6..=9, gender digit included
    pub fn serial(&self) -> u16 {
        self.digits[6..10]
            .iter()
            .fold(0, |acc, &d| acc * 10 + u16::from(d))
    }

    pub const fn check_digit(&self) -> u8 {
        self.digits[PESEL_LEN - 1]
    }
}

// Must run before any numeric parsing.
fn parse_digits(input: &str) -> Result<[u8; PESEL_LEN], ErrorKind> {
    let bytes = input.as_bytes();
    if bytes.len() != PESEL_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ErrorKind::MalformedInput);
    }

    let mut digits = [0u8; PESEL_LEN];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        *slot = byte - b'0';
    }
    Ok(digits)
}

#[inline]
const fn pair(tens: u8, ones: u8) -> u8 {
    tens * 10 + ones
}

impl FromStr for Pesel {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pesel {
    type Error = ErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pesel> for String {
    fn from(pesel: Pesel) -> Self {
        pesel.number
    }
}

impl AsRef<str> for Pesel {
    fn as_ref(&self) -> &str {
        &self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> BirthDate {
        BirthDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_accessors() {
        let pesel = Pesel::parse("44051401359").unwrap();
        assert_eq!(pesel.as_str(), "44051401359");
        assert_eq!(pesel.digits(), [4, 4, 0, 5, 1, 4, 0, 1, 3, 5, 9]);
        assert_eq!(pesel.birth_date(), date(1944, 5, 14));
        assert_eq!(pesel.gender(), Gender::Male);
        assert_eq!(pesel.serial(), 135);
        assert_eq!(pesel.check_digit(), 9);
        assert_eq!(pesel.len(), 11);
    }

    #[test]
    fn test_parse_stage_errors() {
        struct TestCase {
            input:       &'static str,
            expected:    ErrorKind,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "",
                expected:    ErrorKind::MalformedInput,
                description: "empty input",
            },
            TestCase {
                input:       "4405140135",
                expected:    ErrorKind::MalformedInput,
                description: "ten digits",
            },
            TestCase {
                input:       "440514013590",
                expected:    ErrorKind::MalformedInput,
                description: "twelve digits",
            },
            TestCase {
                input:       " 4405140135",
                expected:    ErrorKind::MalformedInput,
                description: "leading whitespace",
            },
            TestCase {
                input:       "4405140135\u{0669}",
                expected:    ErrorKind::MalformedInput,
                description: "arabic-indic digit",
            },
            TestCase {
                input:       "\u{ff14}405140135",
                expected:    ErrorKind::MalformedInput,
                description: "full-width digit",
            },
            TestCase {
                input:       "44051401358",
                expected:    ErrorKind::InvalidChecksum,
                description: "check digit off by one",
            },
            TestCase {
                input:       "00000000001",
                expected:    ErrorKind::InvalidChecksum,
                description: "zero sum needs zero check digit",
            },
            TestCase {
                input:       "99191512340",
                expected:    ErrorKind::InvalidMonth,
                description: "raw month 19",
            },
            TestCase {
                input:       "00000000000",
                expected:    ErrorKind::InvalidMonth,
                description: "raw month 0",
            },
            TestCase {
                input:       "99023112340",
                expected:    ErrorKind::InvalidDate,
                description: "31 February",
            },
        ];

        for case in &cases {
            assert_eq!(
                Pesel::parse(case.input),
                Err(case.expected),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let pesel: Pesel = "02311311145".parse().unwrap();
        assert_eq!(pesel.to_string(), "02311311145");
        assert_eq!(pesel.gender(), Gender::Female);
        assert_eq!(pesel.birth_date(), date(2002, 11, 13));

        assert_eq!("12345".parse::<Pesel>(), Err(ErrorKind::MalformedInput));
    }

    #[test]
    fn test_serde() {
        let pesel = Pesel::parse("44051401359").unwrap();
        let json = serde_json::to_string(&pesel).unwrap();
        assert_eq!(json, "\"44051401359\"");

        let parsed: Pesel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pesel);

        let err = serde_json::from_str::<Pesel>("\"80060910045\"").unwrap_err();
        assert!(err.to_string().contains("Invalid checksum."));
    }

    #[test]
    fn test_from_parts_known_values() {
        let male = Pesel::from_parts(date(1944, 5, 14), 135).unwrap();
        assert_eq!(male.as_str(), "44051401359");

        let female = Pesel::from_parts(date(2002, 11, 13), 1114).unwrap();
        assert_eq!(female.as_str(), "02311311145");
    }

    #[test]
    fn test_from_parts_every_century() {
        let cases = [
            (date(1800, 1, 1), "008101"),
            (date(1899, 12, 31), "999231"),
            (date(1900, 2, 28), "000228"),
            (date(2000, 2, 29), "002229"),
            (date(2100, 3, 1), "004301"),
            (date(2299, 12, 31), "997231"),
        ];

        for (birth_date, prefix) in cases {
            let pesel = Pesel::from_parts(birth_date, 4321).unwrap();
            assert!(pesel.starts_with(prefix), "{pesel} should start with {prefix}");
            assert_eq!(pesel.serial(), 4321);
            assert_eq!(pesel.gender(), Gender::Male);
            assert_eq!(Pesel::parse(pesel.as_str()), Ok(pesel.clone()));
        }
    }

    #[test]
    fn test_from_parts_out_of_range() {
        assert_eq!(
            Pesel::from_parts(date(1799, 12, 31), 0),
            Err(EncodeError::YearOutOfRange(1799))
        );
        assert_eq!(
            Pesel::from_parts(date(2300, 1, 1), 0),
            Err(EncodeError::YearOutOfRange(2300))
        );
        assert_eq!(
            Pesel::from_parts(date(1990, 1, 1), 10000),
            Err(EncodeError::SerialOutOfRange(10000))
        );
        assert_eq!(
            EncodeError::YearOutOfRange(2300).to_string(),
            "Year 2300 cannot be encoded (must be 1800-2299)"
        );
    }
}
