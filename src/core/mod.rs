//! VIN structural decoder.
//!
//! Pure, synchronous functions over a 17-character VIN: check-digit
//! validation, model-year inference and region inference. Nothing here
//! performs I/O or holds state, and none of the decoding functions fail;
//! they fall back to `None` / [`Region::Unknown`] instead.

mod check_digit;
mod decode;
mod error;
mod model_year;
mod region;
mod vin;

pub use check_digit::{CHECK_DIGIT_WEIGHTS, CheckDigit, transliterate, validate_check_digit};
pub use decode::{DecodeWarning, VinDecode, decode};
pub use error::VinError;
pub use model_year::{BASE_YEAR, CYCLE_YEARS, estimate_model_year, year_offset};
pub use region::{Region, infer_region};
pub use vin::{CHECK_DIGIT_INDEX, CYCLE_FLAG_INDEX, MODEL_YEAR_INDEX, VIN_LENGTH, Vin};
