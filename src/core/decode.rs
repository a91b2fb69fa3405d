use std::fmt;

use serde::{Deserialize, Serialize};

use super::check_digit::CheckDigit;
use super::region::Region;
use super::vin::Vin;

/// Everything the structural decoder can tell without network access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinDecode {
    /// The decoded VIN.
    pub vin: Vin,
    /// World Manufacturer Identifier (first three characters).
    pub wmi: String,
    /// Check-digit outcome.
    pub check_digit: CheckDigit,
    /// Estimated model year, `None` if undeterminable.
    pub model_year: Option<u16>,
    /// Region of manufacture.
    pub region: Region,
}

/// A soft, non-blocking finding about a VIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    /// Which part of the VIN the warning is about (e.g. "check_digit").
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Run check-digit validation, model-year and region inference on a VIN.
///
/// ```
/// use vindecode::{Region, Vin, decode};
///
/// let vin = Vin::parse("JH4KA7561PC008269").unwrap();
/// let d = decode(&vin);
/// assert!(d.check_digit.is_valid);
/// assert_eq!(d.model_year, Some(1993));
/// assert_eq!(d.region, Region::Asia);
/// ```
pub fn decode(vin: &Vin) -> VinDecode {
    VinDecode {
        wmi: vin.wmi().to_string(),
        check_digit: vin.check_digit(),
        model_year: vin.model_year(),
        region: vin.region(),
        vin: vin.clone(),
    }
}

impl VinDecode {
    /// Soft warnings a caller should surface without refusing the VIN.
    pub fn warnings(&self) -> Vec<DecodeWarning> {
        let mut warnings = Vec::new();

        if !self.check_digit.is_valid {
            warnings.push(DecodeWarning {
                field: "check_digit",
                message: format!(
                    "check digit mismatch (expected {}, found {}); the VIN may be mistyped or forged",
                    self.check_digit.expected, self.check_digit.actual
                ),
            });
        }

        if self.model_year.is_none() {
            warnings.push(DecodeWarning {
                field: "model_year",
                message: format!(
                    "'{}' at position 10 is not a model-year code",
                    self.vin.year_char()
                ),
            });
        }

        if !self.region.is_known() {
            warnings.push(DecodeWarning {
                field: "region",
                message: format!("no region for lead character '{}'", self.vin.lead_char()),
            });
        }

        warnings
    }
}
