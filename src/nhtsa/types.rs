//! Wire types of the vPIC and NHTSA safety APIs.

use serde::{Deserialize, Serialize};

use crate::report::{Recall, SafetyRating};

/// Envelope shared by vPIC and the SafetyRatings endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsEnvelope<T> {
    #[serde(rename = "Results", default = "Vec::new")]
    pub results: Vec<T>,
}

/// The recalls endpoint uses a lowercase `results` key.
#[derive(Debug, Deserialize)]
pub(crate) struct RecallsEnvelope {
    #[serde(rename = "results", alias = "Results", default)]
    pub results: Vec<RecallRecord>,
}

/// One variable of a vPIC VIN decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpicVariable {
    /// Variable name, e.g. "Make" or "Plant Country".
    pub variable: String,
    /// Decoded value; vPIC sends `null` for unknown.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub variable_id: Option<u32>,
}

/// Manufacturer data for a World Manufacturer Identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WmiInfo {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, alias = "Mfr_CommonName")]
    pub common_name: Option<String>,
    #[serde(default, alias = "Mfr_Name")]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

impl WmiInfo {
    /// Common name if present, otherwise the registered manufacturer name.
    pub fn manufacturer(&self) -> Option<&str> {
        [&self.common_name, &self.manufacturer_name]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecallRecord {
    #[serde(rename = "NHTSACampaignNumber", alias = "campaignNumber", default)]
    pub campaign_number: String,
    #[serde(rename = "Component", alias = "component", default)]
    pub component: Option<String>,
    #[serde(rename = "Summary", alias = "summary", default)]
    pub summary: String,
    #[serde(rename = "ReportReceivedDate", default)]
    pub report_received_date: Option<String>,
}

impl From<RecallRecord> for Recall {
    fn from(r: RecallRecord) -> Self {
        Recall {
            campaign_number: r.campaign_number,
            component: r.component.filter(|c| !c.trim().is_empty()),
            summary: r.summary,
            report_received_date: r.report_received_date.as_deref().and_then(Recall::parse_date),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RatingVariant {
    pub vehicle_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RatingRecord {
    #[serde(default)]
    pub vehicle_id: Option<u64>,
    #[serde(default)]
    pub vehicle_description: Option<String>,
    #[serde(default)]
    pub overall_rating: Option<String>,
    #[serde(default)]
    pub overall_front_crash_rating: Option<String>,
    #[serde(default)]
    pub overall_side_crash_rating: Option<String>,
    #[serde(default)]
    pub rollover_rating: Option<String>,
    #[serde(default)]
    pub complaints_count: Option<u64>,
    #[serde(default)]
    pub recalls_count: Option<u64>,
}

impl From<RatingRecord> for SafetyRating {
    fn from(r: RatingRecord) -> Self {
        SafetyRating {
            vehicle_id: r.vehicle_id,
            vehicle_description: r.vehicle_description,
            overall: r.overall_rating,
            front_crash: r.overall_front_crash_rating,
            side_crash: r.overall_side_crash_rating,
            rollover: r.rollover_rating,
            complaints_count: r.complaints_count,
            recalls_count: r.recalls_count,
        }
    }
}
