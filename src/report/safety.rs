//! Recall campaigns and NCAP safety ratings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labels::Locale;

/// Number of recall campaigns kept per vehicle.
pub const MAX_RECALLS: usize = 5;

/// Value NHTSA uses for a test that was not performed.
const NOT_RATED: &str = "Not Rated";

/// A single recall campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recall {
    /// NHTSA campaign number (e.g. "19V182000").
    pub campaign_number: String,
    /// Affected component.
    pub component: Option<String>,
    /// Campaign summary.
    pub summary: String,
    /// Date NHTSA received the report.
    pub report_received_date: Option<NaiveDate>,
}

impl Recall {
    /// Parse the `dd/mm/yyyy` dates used by the recalls API.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
    }
}

/// Heading for the recall list.
pub fn recalls_heading(locale: Locale, shown: usize) -> String {
    match locale {
        Locale::English => {
            format!("Recall campaigns found: {shown} (showing at most {MAX_RECALLS})")
        }
        Locale::Ukrainian => {
            format!("Знайдено кампаній відкликання: {shown} (показано останні {MAX_RECALLS})")
        }
    }
}

/// NCAP ratings for one vehicle variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRating {
    pub vehicle_id: Option<u64>,
    pub vehicle_description: Option<String>,
    pub overall: Option<String>,
    pub front_crash: Option<String>,
    pub side_crash: Option<String>,
    pub rollover: Option<String>,
    pub complaints_count: Option<u64>,
    pub recalls_count: Option<u64>,
}

impl SafetyRating {
    /// Label/value pairs, skipping missing and "Not Rated" entries.
    pub fn rows(&self, locale: Locale) -> Vec<(&'static str, String)> {
        let labels: [&str; 6] = match locale {
            Locale::English => [
                "Overall rating",
                "Frontal crash",
                "Side crash",
                "Rollover",
                "Complaints",
                "Recalls",
            ],
            Locale::Ukrainian => [
                "Загальний рейтинг",
                "Фронтальний удар",
                "Боковий удар",
                "Перекидання",
                "Кількість скарг",
                "Кількість відкликань",
            ],
        };
        let values = [
            self.overall.clone(),
            self.front_crash.clone(),
            self.side_crash.clone(),
            self.rollover.clone(),
            self.complaints_count.filter(|n| *n > 0).map(|n| n.to_string()),
            self.recalls_count.filter(|n| *n > 0).map(|n| n.to_string()),
        ];

        labels
            .into_iter()
            .zip(values)
            .filter_map(|(label, value)| {
                let value = value?;
                if value.trim().is_empty() || value == NOT_RATED {
                    None
                } else {
                    Some((label, value))
                }
            })
            .collect()
    }
}
