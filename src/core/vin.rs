use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::check_digit::{CheckDigit, validate_check_digit};
use super::error::VinError;
use super::model_year::estimate_model_year;
use super::region::{Region, infer_region};

/// Number of characters in a modern (1981+) VIN.
pub const VIN_LENGTH: usize = 17;

/// 0-based index of the check digit (position 9).
pub const CHECK_DIGIT_INDEX: usize = 8;

/// 0-based index of the model-year character (position 10).
pub const MODEL_YEAR_INDEX: usize = 9;

/// 0-based index of the model-year cycle flag (position 7).
pub const CYCLE_FLAG_INDEX: usize = 6;

/// A normalised 17-character Vehicle Identification Number.
///
/// Only constructed through [`Vin::parse`], so every `Vin` is uppercase ASCII,
/// exactly 17 characters long and free of `I`, `O` and `Q`. The check digit
/// is *not* enforced here: a mismatch is a soft warning, see [`Vin::check_digit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vin(String);

impl Vin {
    /// Trim, uppercase and validate raw user input.
    ///
    /// ```
    /// use vindecode::Vin;
    ///
    /// let vin = Vin::parse("  1hgcm82633a004352 ").unwrap();
    /// assert_eq!(vin.as_str(), "1HGCM82633A004352");
    /// assert!(Vin::parse("1HGCM82633A00435").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, VinError> {
        let normalised = raw.trim().to_uppercase();
        if normalised.is_empty() {
            return Err(VinError::Empty);
        }

        let len = normalised.chars().count();
        if len != VIN_LENGTH {
            return Err(VinError::InvalidLength { len });
        }

        for (i, ch) in normalised.chars().enumerate() {
            match ch {
                'I' | 'O' | 'Q' => {
                    return Err(VinError::ForbiddenCharacter { ch, position: i + 1 });
                }
                'A'..='Z' | '0'..='9' => {}
                _ => return Err(VinError::InvalidCharacter { ch, position: i + 1 }),
            }
        }

        Ok(Self(normalised))
    }

    /// The normalised VIN.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// World Manufacturer Identifier (positions 1-3).
    pub fn wmi(&self) -> &str {
        &self.0[..3]
    }

    /// Vehicle Descriptor Section (positions 4-9, check digit included).
    pub fn vds(&self) -> &str {
        &self.0[3..9]
    }

    /// Vehicle Identifier Section (positions 10-17).
    pub fn vis(&self) -> &str {
        &self.0[9..]
    }

    /// Production sequence number (positions 12-17).
    pub fn serial(&self) -> &str {
        &self.0[11..]
    }

    /// First character of the WMI, used for region inference.
    pub fn lead_char(&self) -> char {
        self.byte_at(0)
    }

    /// The check-digit character as written in the VIN.
    pub fn check_char(&self) -> char {
        self.byte_at(CHECK_DIGIT_INDEX)
    }

    /// The model-year character (position 10).
    pub fn year_char(&self) -> char {
        self.byte_at(MODEL_YEAR_INDEX)
    }

    /// Check-digit result. Always applicable on a parsed VIN.
    pub fn check_digit(&self) -> CheckDigit {
        // Length is guaranteed by `parse`, so the guard in the free function never trips.
        validate_check_digit(&self.0).unwrap_or(CheckDigit {
            expected: '?',
            actual: self.check_char(),
            is_valid: false,
        })
    }

    /// Estimated model year, or `None` if the year character is not encodable.
    pub fn model_year(&self) -> Option<u16> {
        estimate_model_year(&self.0)
    }

    /// Region of manufacture inferred from the lead character.
    pub fn region(&self) -> Region {
        infer_region(self.lead_char())
    }

    fn byte_at(&self, index: usize) -> char {
        char::from(self.0.as_bytes()[index])
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

impl Serialize for Vin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Vin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Vin::parse(&raw).map_err(serde::de::Error::custom)
    }
}
