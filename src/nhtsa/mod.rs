//! NHTSA vPIC / recalls / safety ratings client and lookup pipeline.
//!
//! The structural decoder runs first and never needs the network; the
//! remote sources then enrich the report on a best-effort basis.
//! Independent requests run concurrently, and a failure in one never
//! blocks the others.
//!
//! # Example
//!
//! ```ignore
//! use vindecode::nhtsa::*;
//! use vindecode::report::Locale;
//!
//! let client = NhtsaClient::new(NhtsaConfig::default())?;
//! let report = lookup(&client, "1HGCM82633A004352").await?;
//! for row in report.fields.display_rows(Locale::English) {
//!     println!("{}: {}", row.label, row.value);
//! }
//! ```

mod client;
mod config;
mod error;
mod lookup;
mod types;

pub use client::NhtsaClient;
pub use config::{DEFAULT_SAFETY_URL, DEFAULT_VPIC_URL, NhtsaConfig};
pub use error::NhtsaError;
pub use lookup::{lookup, lookup_vin};
pub use types::{VpicVariable, WmiInfo};
