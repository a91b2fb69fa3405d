//! Model-year inference from position 10, disambiguated by position 7.
//!
//! The year code repeats every 30 years. Since the 2010 model year,
//! manufacturers put a letter at position 7 for the second cycle and a digit
//! for the first, so the same code resolves to `1980 + offset` or
//! `2010 + offset`.

use super::vin::{CYCLE_FLAG_INDEX, MODEL_YEAR_INDEX, VIN_LENGTH};

/// First model year of the first 30-year cycle.
pub const BASE_YEAR: u16 = 1980;

/// Length of one model-year cycle.
pub const CYCLE_YEARS: u16 = 30;

/// Offset of a position-10 code from the start of its cycle.
///
/// `I`, `O`, `Q`, `U`, `Z` and `0` are never used as year codes.
pub fn year_offset(code: char) -> Option<u16> {
    let offset = match code {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        'D' => 3,
        'E' => 4,
        'F' => 5,
        'G' => 6,
        'H' => 7,
        'J' => 8,
        'K' => 9,
        'L' => 10,
        'M' => 11,
        'N' => 12,
        'P' => 13,
        'R' => 14,
        'S' => 15,
        'T' => 16,
        'V' => 17,
        'W' => 18,
        'X' => 19,
        'Y' => 20,
        '1'..='9' => 20 + (code as u16 - '0' as u16),
        _ => return None,
    };
    Some(offset)
}

/// Estimate the model year of an uppercase 17-character VIN.
///
/// Returns `None` if the input is not 17 characters long or position 10
/// holds a character that is not a year code.
///
/// ```
/// use vindecode::estimate_model_year;
///
/// assert_eq!(estimate_model_year("1HGCM82633A004352"), Some(2003));
/// assert_eq!(estimate_model_year("5YJ3E1EA2KF317000"), Some(2019));
/// ```
pub fn estimate_model_year(vin: &str) -> Option<u16> {
    if vin.chars().count() != VIN_LENGTH {
        return None;
    }

    let year_code = vin.chars().nth(MODEL_YEAR_INDEX)?;
    let cycle_flag = vin.chars().nth(CYCLE_FLAG_INDEX)?;

    let base = BASE_YEAR + year_offset(year_code)?;
    if cycle_flag.is_ascii_digit() {
        Some(base)
    } else {
        Some(base + CYCLE_YEARS)
    }
}
