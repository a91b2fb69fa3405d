//! Vehicle report model: labelled fields, recalls and safety ratings.
//!
//! Merges remote registry data with the offline structural decode and
//! prepares it for display, without doing any rendering itself.
//!
//! # Example
//!
//! ```
//! use vindecode::Vin;
//! use vindecode::report::*;
//!
//! let vin = Vin::parse("1HGCM82633A004352").unwrap();
//! let report = VehicleReport::offline(&vin);
//! let rows = report.fields.display_rows(Locale::Ukrainian);
//! assert_eq!(rows[0].label, "Орієнтовний рік");
//! assert_eq!(rows[0].value, "2003");
//! ```

pub mod labels;
mod safety;
mod sheet;

use serde::Serialize;

use crate::core::{Vin, VinDecode, decode};

pub use labels::{Locale, label};
pub use safety::{MAX_RECALLS, Recall, SafetyRating, recalls_heading};
pub use sheet::{FieldRow, FieldSheet, FilterSummary, filter_rows, is_placeholder};

/// Everything known about a VIN after a lookup.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    /// Offline structural decode.
    pub decode: VinDecode,
    /// Labelled fields from the registry plus offline fallbacks.
    pub fields: FieldSheet,
    /// Non-blocking warnings (e.g. check-digit mismatch).
    pub warnings: Vec<String>,
    /// Errors from data sources that failed; the report is still usable.
    pub errors: Vec<String>,
    /// Up to [`MAX_RECALLS`] recall campaigns.
    pub recalls: Vec<Recall>,
    /// NCAP safety ratings, if any were found.
    pub safety: Option<SafetyRating>,
}

impl VehicleReport {
    /// Start a report from the structural decode alone.
    ///
    /// Fallback fields are not applied yet, so registry data inserted
    /// afterwards takes precedence. Call [`VehicleReport::finish_fields`]
    /// once all sources are merged.
    pub fn new(vin: &Vin) -> Self {
        let decode = decode(vin);
        let warnings = decode
            .warnings()
            .into_iter()
            .filter(|w| w.field == "check_digit")
            .map(|w| w.message)
            .collect();
        Self {
            decode,
            fields: FieldSheet::new(),
            warnings,
            errors: Vec::new(),
            recalls: Vec::new(),
            safety: None,
        }
    }

    /// Report built without any registry data.
    pub fn offline(vin: &Vin) -> Self {
        let mut report = Self::new(vin);
        report.finish_fields();
        report
    }

    /// Add the offline model year and region where the registry gave none.
    pub fn finish_fields(&mut self) {
        self.fields.apply_fallbacks(&self.decode);
    }

    /// Make, model and year, when all three are known.
    pub fn make_model_year(&self) -> Option<(&str, &str, &str)> {
        let make = self.fields.get(labels::MAKE).filter(|v| !is_placeholder(v))?;
        let model = self.fields.get(labels::MODEL).filter(|v| !is_placeholder(v))?;
        let year = self.fields.year()?;
        Some((make, model, year))
    }

    /// Keep at most [`MAX_RECALLS`] campaigns.
    pub fn set_recalls(&mut self, mut recalls: Vec<Recall>) {
        recalls.truncate(MAX_RECALLS);
        self.recalls = recalls;
    }
}
