//! Position-9 check digit (weighted sum modulo 11).

use serde::{Deserialize, Serialize};

use super::vin::{CHECK_DIGIT_INDEX, VIN_LENGTH};

/// Per-position weights. Index 8 is the check digit itself and carries weight 0.
pub const CHECK_DIGIT_WEIGHTS: [u32; VIN_LENGTH] =
    [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Outcome of a check-digit computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckDigit {
    /// Digit computed from the other 16 characters (`0`-`9` or `X`).
    pub expected: char,
    /// Character found at position 9.
    pub actual: char,
    /// Whether `expected == actual`.
    pub is_valid: bool,
}

/// Map a VIN character to its numeric value for the weighted sum.
///
/// Characters outside the table (including `I`, `O`, `Q`) count as 0.
pub fn transliterate(ch: char) -> u32 {
    match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => 0,
    }
}

/// Compute and compare the check digit of an uppercase 17-character VIN.
///
/// Returns `None` when the input is not exactly 17 characters long.
/// A mismatch is reported through [`CheckDigit::is_valid`], never as an error.
///
/// ```
/// use vindecode::validate_check_digit;
///
/// let result = validate_check_digit("1HGCM82633A004352").unwrap();
/// assert_eq!(result.expected, '3');
/// assert!(result.is_valid);
///
/// assert!(validate_check_digit("1HGCM82633A00435").is_none());
/// ```
pub fn validate_check_digit(vin: &str) -> Option<CheckDigit> {
    if vin.chars().count() != VIN_LENGTH {
        return None;
    }

    let mut sum = 0u32;
    let mut actual = '\0';
    for (i, (ch, weight)) in vin.chars().zip(CHECK_DIGIT_WEIGHTS).enumerate() {
        if i == CHECK_DIGIT_INDEX {
            actual = ch;
            continue;
        }
        sum += transliterate(ch) * weight;
    }

    let expected = match sum % 11 {
        10 => 'X',
        r => char::from_digit(r, 10)?,
    };

    Some(CheckDigit {
        expected,
        actual,
        is_valid: expected == actual,
    })
}
