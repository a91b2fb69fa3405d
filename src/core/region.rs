//! Region of manufacture from the first WMI character.
//!
//! This is a coarse partition of the ISO 3780 ranges and is kept as-is
//! for compatibility: e.g. every `H`-`R` code counts as Asia.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Continent-level region of manufacture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
    /// Lead character outside every known range.
    Unknown,
}

impl Region {
    /// All known regions, excluding `Unknown`.
    pub const KNOWN: [Region; 6] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::Oceania,
        Region::SouthAmerica,
    ];

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Oceania => "Oceania",
            Self::SouthAmerica => "South America",
            Self::Unknown => "Unknown",
        }
    }

    /// `false` only for [`Region::Unknown`].
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the region of manufacture from the lead VIN character.
///
/// Case-insensitive. Characters outside the known ranges yield
/// [`Region::Unknown`].
///
/// ```
/// use vindecode::{Region, infer_region};
///
/// assert_eq!(infer_region('1'), Region::NorthAmerica);
/// assert_eq!(infer_region('w'), Region::Europe);
/// assert_eq!(infer_region('I'), Region::Unknown);
/// ```
pub fn infer_region(lead: char) -> Region {
    match lead.to_ascii_uppercase() {
        'A' | 'B' | 'C' => Region::Africa,
        'H' | 'J' | 'K' | 'L' | 'M' | 'N' | 'P' | 'R' => Region::Asia,
        'S' | 'T' | 'U' | 'V' | 'W' | 'X' | 'Y' | 'Z' => Region::Europe,
        '1' | '2' | '3' | '4' | '5' => Region::NorthAmerica,
        '6' | '7' => Region::Oceania,
        '8' | '9' => Region::SouthAmerica,
        _ => Region::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(infer_region('1'), Region::NorthAmerica);
        assert_eq!(infer_region('W'), Region::Europe);
        assert_eq!(infer_region('9'), Region::SouthAmerica);
        assert_eq!(infer_region('Z'), Region::Europe);
    }

    #[test]
    fn every_range() {
        let cases = [
            ("ABC", Region::Africa),
            ("HJKLMNPR", Region::Asia),
            ("STUVWXYZ", Region::Europe),
            ("12345", Region::NorthAmerica),
            ("67", Region::Oceania),
            ("89", Region::SouthAmerica),
        ];
        for (chars, region) in cases {
            for ch in chars.chars() {
                assert_eq!(infer_region(ch), region, "lead {ch}");
                assert_eq!(infer_region(ch.to_ascii_lowercase()), region, "lead {ch}");
            }
        }
    }

    #[test]
    fn gaps_are_unknown() {
        for ch in ['D', 'E', 'F', 'G', 'I', 'O', 'Q', '0', ' ', '-', 'é'] {
            assert_eq!(infer_region(ch), Region::Unknown, "lead {ch:?}");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
        assert_eq!(Region::Unknown.to_string(), "Unknown");
        assert!(Region::KNOWN.iter().all(|r| r.is_known()));
    }
}
