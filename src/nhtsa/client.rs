//! HTTP client for the NHTSA vPIC and safety APIs.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::config::NhtsaConfig;
use super::error::NhtsaError;
use super::types::{
    RatingRecord, RatingVariant, RecallsEnvelope, ResultsEnvelope, VpicVariable, WmiInfo,
};
use crate::core::Vin;
use crate::report::{MAX_RECALLS, Recall, SafetyRating};

const USER_AGENT_VALUE: &str = concat!("vindecode/", env!("CARGO_PKG_VERSION"));

/// Client for the public NHTSA APIs. No authentication is required.
#[derive(Debug, Clone)]
pub struct NhtsaClient {
    client: reqwest::Client,
    vpic_url: Url,
    safety_url: Url,
}

impl NhtsaClient {
    /// Build a client from explicit settings.
    pub fn new(config: NhtsaConfig) -> Result<Self, NhtsaError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| NhtsaError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            vpic_url: parse_base(&config.vpic_url)?,
            safety_url: parse_base(&config.safety_url)?,
        })
    }

    /// Build a client from `VINDECODE_*` environment variables.
    pub fn from_env() -> Result<Self, NhtsaError> {
        Self::new(NhtsaConfig::from_env())
    }

    /// Full vPIC decode of a VIN. Returns every variable, including empty ones.
    pub async fn decode_vin_extended(&self, vin: &Vin) -> Result<Vec<VpicVariable>, NhtsaError> {
        let mut url = join(&self.vpic_url, &["vehicles", "DecodeVinExtended", vin.as_str()])?;
        url.query_pairs_mut().append_pair("format", "json");
        let env: ResultsEnvelope<VpicVariable> = self.get_json(url).await?;
        Ok(env.results)
    }

    /// Manufacturer data for a 3-character WMI, `None` if vPIC knows none.
    pub async fn decode_wmi(&self, wmi: &str) -> Result<Option<WmiInfo>, NhtsaError> {
        let mut url = join(&self.vpic_url, &["vehicles", "DecodeWMI", wmi])?;
        url.query_pairs_mut().append_pair("format", "json");
        let env: ResultsEnvelope<WmiInfo> = self.get_json(url).await?;
        Ok(env.results.into_iter().next())
    }

    /// Recall campaigns for a make/model/year, at most [`MAX_RECALLS`].
    pub async fn recalls(
        &self,
        make: &str,
        model: &str,
        year: &str,
    ) -> Result<Vec<Recall>, NhtsaError> {
        let mut url = join(&self.safety_url, &["recalls", "recallsByVehicle"])?;
        url.query_pairs_mut()
            .append_pair("make", make)
            .append_pair("model", model)
            .append_pair("modelYear", year);
        let env: RecallsEnvelope = self.get_json(url).await?;
        Ok(env
            .results
            .into_iter()
            .take(MAX_RECALLS)
            .map(Recall::from)
            .collect())
    }

    /// NCAP ratings of the first variant matching make/model/year.
    ///
    /// Resolves the variant's `VehicleId` first, then fetches its ratings.
    pub async fn safety_rating(
        &self,
        make: &str,
        model: &str,
        year: &str,
    ) -> Result<Option<SafetyRating>, NhtsaError> {
        let url = join(
            &self.safety_url,
            &["SafetyRatings", "modelyear", year, "make", make, "model", model],
        )?;
        let variants: ResultsEnvelope<RatingVariant> = self.get_json(url).await?;
        let Some(variant) = variants.results.first() else {
            debug!(make, model, year, "no rated variants");
            return Ok(None);
        };

        let vehicle_id = variant.vehicle_id.to_string();
        let url = join(&self.safety_url, &["SafetyRatings", "VehicleId", &vehicle_id])?;
        let ratings: ResultsEnvelope<RatingRecord> = self.get_json(url).await?;
        Ok(ratings.results.into_iter().next().map(SafetyRating::from))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, NhtsaError> {
        debug!(url = %url, "NHTSA request");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NhtsaError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| NhtsaError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(NhtsaError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| NhtsaError::Parse(e.to_string()))
    }
}

fn parse_base(raw: &str) -> Result<Url, NhtsaError> {
    let url = Url::parse(raw).map_err(|e| NhtsaError::Config(format!("invalid URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(NhtsaError::Config(format!("'{raw}' cannot be a base URL")));
    }
    Ok(url)
}

/// Append percent-encoded path segments to a base URL.
fn join(base: &Url, segments: &[&str]) -> Result<Url, NhtsaError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| NhtsaError::Config(format!("'{base}' cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
