//! # vindecode
//!
//! Vehicle Identification Number decoding: check-digit validation,
//! model-year inference and region-of-manufacture inference, computed
//! offline from the 17-character VIN, plus an optional client for the
//! public NHTSA vPIC, recalls and safety-rating APIs.
//!
//! ## Quick Start
//!
//! ```rust
//! use vindecode::*;
//!
//! let vin = Vin::parse(" 1hgcm82633a004352 ").unwrap();
//! let d = decode(&vin);
//!
//! assert!(d.check_digit.is_valid);
//! assert_eq!(d.model_year, Some(2003));
//! assert_eq!(d.region, Region::NorthAmerica);
//! assert!(d.warnings().is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | VIN type, check digit, model year, region |
//! | `report` | Field sheet, labels (English/Ukrainian), recalls, ratings |
//! | `nhtsa` | Async NHTSA client and best-effort lookup |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "nhtsa")]
pub mod nhtsa;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
