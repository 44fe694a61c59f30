use thiserror::Error;

/// Convenient result alias for the warp factor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Raised when text input cannot be interpreted as a real number.
    #[error("argument must be a real number, got '{input}'")]
    TypeMismatch { input: String },

    /// Raised when a required-warp query is given zero travel time.
    #[error("travel time must be non-zero to derive a speed (distance {distance}ly)")]
    ZeroTravelTime { distance: f64 },

    /// Raised when a scale name is not one of the supported warp scales.
    #[error("unknown warp scale '{name}'; expected 'tng' or 'tos'")]
    UnknownScale { name: String },
}
