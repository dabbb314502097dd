//! Resident identity number parsing and validation.
//!
//! Format (18 characters): `PPCCAA YYYYMMDD SSS V`
//! Format (15 characters): `PPCCAA YYMMDD SSS`
//!
//! `PP` province, `CC` city, `AA` area, `SSS` sequence code and `V` the
//! check character (`0-9` or `X`). Fifteen-character numbers predate the
//! check character and carry a two-digit year in the 1900s.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

use crate::province::province_name;

/// Errors that can occur while parsing an identity number.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Invalid identity length: {0} characters, must be 15 or 18")]
    InvalidLength(usize),
    #[error("Invalid identity body: {body:?} must be {expected} digits")]
    InvalidBody { body: String, expected: usize },
    #[error("Invalid check character: {0:?} must be 0-9 or X")]
    InvalidCheckDigit(char),
    #[error("Invalid birthday: {0:?} is not a YYYYMMDD calendar date")]
    InvalidBirthday(String),
}

impl IdentityError {
    /// Short name of the failure, free of any input characters.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLength(_) => "invalid_length",
            Self::InvalidBody { .. } => "invalid_body",
            Self::InvalidCheckDigit(_) => "invalid_check_digit",
            Self::InvalidBirthday(_) => "invalid_birthday",
        }
    }
}

/// Which of the two fixed-length formats a number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variant {
    Length15,
    Length18,
}

impl Variant {
    /// Number of characters in this format.
    pub fn bit_len(self) -> usize {
        match self {
            Self::Length15 => 15,
            Self::Length18 => 18,
        }
    }

    /// Format with exactly `len` characters, if any.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            15 => Some(Self::Length15),
            18 => Some(Self::Length18),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Lowercase name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }

    /// Odd digits are male, even digits female.
    pub fn from_digit(digit: u32) -> Self {
        if digit % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// A parsed identity number.
///
/// Built only through [`Identity::parse`], so every value of this type
/// holds a structurally valid number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    raw: String,
    variant: Variant,
    province: String,
    province_name: &'static str,
    city: String,
    area: String,
    birthday: String,
    birth_date: NaiveDate,
    sequence_code: String,
    verify_code: String,
    sex: Sex,
}

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

fn parse_birthday(birthday: &str) -> Option<NaiveDate> {
    let year: i32 = birthday.get(0..4)?.parse().ok()?;
    let month: u32 = birthday.get(4..6)?.parse().ok()?;
    let day: u32 = birthday.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Check the length, digit body and check character.
fn check_structure(input: &str) -> Result<Variant, IdentityError> {
    let len = input.chars().count();
    let variant = Variant::from_len(len).ok_or(IdentityError::InvalidLength(len))?;

    match variant {
        Variant::Length18 => {
            let (split, check) = input
                .char_indices()
                .nth(17)
                .ok_or(IdentityError::InvalidLength(len))?;
            let body = &input[..split];
            if !DIGITS.is_match(body) {
                return Err(IdentityError::InvalidBody {
                    body: body.to_string(),
                    expected: 17,
                });
            }
            if !check.is_ascii_digit() && !check.eq_ignore_ascii_case(&'X') {
                return Err(IdentityError::InvalidCheckDigit(check));
            }
        }
        Variant::Length15 => {
            if !DIGITS.is_match(input) {
                return Err(IdentityError::InvalidBody {
                    body: input.to_string(),
                    expected: 15,
                });
            }
        }
    }

    Ok(variant)
}

impl Identity {
    /// Parse an identity number into its fields.
    ///
    /// Parsing is all-or-nothing: the first failing check is returned and
    /// no record is produced.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let result = Self::parse_fields(input);
        match &result {
            Ok(id) => trace!(variant = ?id.variant, "parsed identity number"),
            Err(err) => debug!(
                len = input.chars().count(),
                kind = err.kind(),
                "rejected identity number"
            ),
        }
        result
    }

    fn parse_fields(input: &str) -> Result<Self, IdentityError> {
        let variant = check_structure(input)?;
        // The input is all ASCII from here on, byte offsets are char offsets.

        let province = &input[0..2];
        let city = &input[2..4];
        let area = &input[4..6];

        let birthday = match variant {
            Variant::Length18 => input[6..14].to_string(),
            Variant::Length15 => format!("19{}", &input[6..12]),
        };
        let birth_date = parse_birthday(&birthday)
            .ok_or_else(|| IdentityError::InvalidBirthday(birthday.clone()))?;

        let (sequence_code, verify_code) = match variant {
            Variant::Length18 => (&input[14..17], &input[17..18]),
            Variant::Length15 => (&input[12..15], ""),
        };

        let sex_digit = u32::from(sequence_code.as_bytes()[2] - b'0');
        let sex = Sex::from_digit(sex_digit);

        Ok(Self {
            raw: input.to_string(),
            variant,
            province: province.to_string(),
            province_name: province_name(province),
            city: city.to_string(),
            area: area.to_string(),
            birthday,
            birth_date,
            sequence_code: sequence_code.to_string(),
            verify_code: verify_code.to_string(),
            sex,
        })
    }

    /// The input exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 15 or 18.
    pub fn bit_len(&self) -> usize {
        self.variant.bit_len()
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    /// Display name of the province, empty when the code is unknown.
    pub fn province_name(&self) -> &'static str {
        self.province_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    /// Birthday as `YYYYMMDD`; 15-character numbers get a `19` prefix.
    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn sequence_code(&self) -> &str {
        &self.sequence_code
    }

    /// Check character as given (case preserved), empty for 15-character numbers.
    pub fn verify_code(&self) -> &str {
        &self.verify_code
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse an identity number into its components.
pub fn parse_identity(input: &str) -> Result<Identity, IdentityError> {
    Identity::parse(input)
}

/// Validate an identity number.
pub fn validate_identity(input: &str) -> bool {
    parse_identity(input).is_ok()
}
