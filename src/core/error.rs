use thiserror::Error;

/// Errors raised while normalising raw user input into a [`Vin`](super::Vin).
///
/// The decoding operations themselves never fail; they degrade to
/// `None` / [`Region::Unknown`](super::Region::Unknown) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// Input was empty after trimming.
    #[error("VIN is empty")]
    Empty,

    /// Input does not have exactly 17 characters.
    #[error("VIN must have 17 characters, got {len}")]
    InvalidLength {
        /// Number of characters after trimming.
        len: usize,
    },

    /// Input contains `I`, `O` or `Q`, which the VIN alphabet excludes.
    #[error("VIN must not contain the letters I, O or Q (found '{ch}' at position {position})")]
    ForbiddenCharacter {
        /// The offending character (uppercased).
        ch: char,
        /// 1-based position in the VIN.
        position: usize,
    },

    /// Input contains a character outside `[A-Z0-9]`.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// 1-based position in the VIN.
        position: usize,
    },
}
