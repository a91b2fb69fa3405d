//! Best-effort lookup: structural decode plus every NHTSA source.

use tracing::{debug, warn};

use super::client::NhtsaClient;
use crate::core::{Vin, VinError};
use crate::report::{VehicleReport, labels};

/// Normalise raw input and build a full report for it.
///
/// Only malformed input is an error. Failures of individual NHTSA requests
/// are logged and recorded in [`VehicleReport::errors`] (or silently skipped
/// for secondary sources), and the report is returned with whatever data
/// could be gathered.
pub async fn lookup(client: &NhtsaClient, raw_vin: &str) -> Result<VehicleReport, VinError> {
    let vin = Vin::parse(raw_vin)?;
    Ok(lookup_vin(client, &vin).await)
}

/// Build a full report for an already parsed VIN.
pub async fn lookup_vin(client: &NhtsaClient, vin: &Vin) -> VehicleReport {
    let mut report = VehicleReport::new(vin);
    for warning in &report.warnings {
        warn!(vin = %vin, "{warning}");
    }

    let (extended, wmi) = tokio::join!(
        client.decode_vin_extended(vin),
        client.decode_wmi(vin.wmi())
    );

    match extended {
        Ok(variables) => {
            for var in variables {
                if let Some(value) = var.value {
                    report.fields.insert(var.variable, value);
                }
            }
        }
        Err(e) => {
            warn!(vin = %vin, error = %e, "vPIC decode failed");
            report.errors.push(format!("could not fetch vehicle data from NHTSA: {e}"));
        }
    }

    report.finish_fields();

    match wmi {
        Ok(Some(info)) => {
            if let Some(country) = info.country.as_deref() {
                report.fields.insert(labels::WMI_COUNTRY, country);
            }
            if let Some(manufacturer) = info.manufacturer() {
                report.fields.insert(labels::MANUFACTURER, manufacturer);
            }
        }
        Ok(None) => debug!(wmi = vin.wmi(), "WMI unknown to vPIC"),
        Err(e) => warn!(wmi = vin.wmi(), error = %e, "WMI decode failed"),
    }

    let Some((make, model, year)) = report
        .make_model_year()
        .map(|(m, md, y)| (m.to_string(), md.to_string(), y.to_string()))
    else {
        debug!(vin = %vin, "make/model/year incomplete, skipping recalls and ratings");
        return report;
    };

    let (recalls, rating) = tokio::join!(
        client.recalls(&make, &model, &year),
        client.safety_rating(&make, &model, &year)
    );

    match recalls {
        Ok(recalls) => report.set_recalls(recalls),
        Err(e) => warn!(
            make = %make,
            model = %model,
            year = %year,
            error = %e,
            "recall lookup failed"
        ),
    }
    match rating {
        Ok(rating) => report.safety = rating,
        Err(e) => warn!(
            make = %make,
            model = %model,
            year = %year,
            error = %e,
            "safety rating lookup failed"
        ),
    }

    report
}
