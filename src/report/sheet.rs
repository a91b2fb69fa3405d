//! Ordered key/value sheet of decoded vehicle fields.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::labels::{self, Locale, label};
use crate::core::VinDecode;

/// Values vPIC uses to mean "no data". Compared case-insensitively after trimming.
const PLACEHOLDERS: &[&str] = &[
    "not applicable",
    "n/a",
    "na",
    "unknown",
    "null",
    "не застосовується",
];

/// Fields shown first, in this order. Everything else follows alphabetically.
const PRIORITY: &[&str] = &[
    labels::MAKE,
    labels::MODEL,
    labels::MODEL_YEAR,
    labels::ESTIMATED_MODEL_YEAR,
    labels::TRIM,
    labels::DISPLACEMENT_L,
    labels::FUEL_TYPE,
    labels::TRANSMISSION,
    labels::DRIVE_TYPE,
    labels::PLANT_COUNTRY,
    labels::MANUFACTURER,
    labels::REGION,
];

/// Whether a value carries no information and should be hidden.
pub fn is_placeholder(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower.is_empty() || PLACEHOLDERS.contains(&lower.as_str())
}

/// Insertion-ordered map from field name (vPIC variable) to value.
///
/// The first value written for a key wins; later writes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSheet {
    entries: Vec<(String, String)>,
}

/// One displayable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    /// Field name as used by vPIC (locale-independent).
    pub key: String,
    /// Localised label.
    pub label: String,
    /// Field value.
    pub value: String,
}

impl FieldSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless the key is already present or the value is empty.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() || self.contains(&key) {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The model year as reported, or the offline estimate.
    pub fn year(&self) -> Option<&str> {
        self.get(labels::MODEL_YEAR)
            .filter(|v| !is_placeholder(v))
            .or_else(|| self.get(labels::ESTIMATED_MODEL_YEAR))
    }

    /// Fill in model year and region from the structural decoder when absent.
    pub fn apply_fallbacks(&mut self, decode: &VinDecode) {
        if self.get(labels::MODEL_YEAR).is_none_or(is_placeholder) {
            if let Some(year) = decode.model_year {
                self.insert(labels::ESTIMATED_MODEL_YEAR, year.to_string());
            }
        }
        if !self.contains(labels::REGION) && decode.region.is_known() {
            self.insert(labels::REGION, decode.region.name());
        }
    }

    /// Rows with placeholder values removed, priority fields first.
    pub fn display_rows(&self, locale: Locale) -> Vec<FieldRow> {
        let mut rows: Vec<FieldRow> = self
            .entries
            .iter()
            .filter(|(_, v)| !is_placeholder(v))
            .map(|(k, v)| FieldRow {
                key: k.clone(),
                label: label(locale, k).to_string(),
                value: v.clone(),
            })
            .collect();

        rows.sort_by(|a, b| {
            let pa = PRIORITY.iter().position(|p| *p == a.key);
            let pb = PRIORITY.iter().position(|p| *p == b.key);
            match (pa, pb) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.label.to_lowercase().cmp(&b.label.to_lowercase()),
            }
        });
        rows
    }
}

/// Keep rows whose label or value contains `query` (case-insensitive).
///
/// An empty or whitespace-only query keeps every row.
pub fn filter_rows<'a>(rows: &'a [FieldRow], query: &str) -> Vec<&'a FieldRow> {
    let query = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            query.is_empty()
                || row.label.to_lowercase().contains(&query)
                || row.value.to_lowercase().contains(&query)
        })
        .collect()
}

/// Counter shown next to the filter box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub visible: usize,
    pub total: usize,
    pub filtered: bool,
    pub locale: Locale,
}

impl FilterSummary {
    pub fn new(rows: &[FieldRow], query: &str, locale: Locale) -> Self {
        Self {
            visible: filter_rows(rows, query).len(),
            total: rows.len(),
            filtered: !query.trim().is_empty(),
            locale,
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.locale, self.filtered) {
            (Locale::English, false) => write!(f, "{} fields", self.total),
            (Locale::English, true) => write!(f, "{} of {} fields", self.visible, self.total),
            (Locale::Ukrainian, false) => write!(f, "{} полів", self.total),
            (Locale::Ukrainian, true) => write!(f, "{} з {} полів", self.visible, self.total),
        }
    }
}
