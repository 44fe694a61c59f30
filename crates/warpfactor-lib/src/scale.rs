//! Warp scale selection and the numeric helpers shared by every calculation.
//!
//! The warp scale is passed explicitly through every call in a calculation
//! chain. Nothing here holds state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The two incompatible warp scale definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarpScale {
    /// TNG-era scale: `w^(10/3)` with the Berry-Shields correction above
    /// warp 9 and an asymptote at warp 10.
    #[default]
    Tng,
    /// TOS-era scale: `w^3`, unbounded.
    Tos,
}

impl WarpScale {
    /// Exponent of the base power law.
    pub fn exponent(self) -> f64 {
        match self {
            WarpScale::Tng => 10.0 / 3.0,
            WarpScale::Tos => 3.0,
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            WarpScale::Tng => "TNG",
            WarpScale::Tos => "TOS",
        }
    }
}

impl fmt::Display for WarpScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WarpScale::Tng => "tng",
            WarpScale::Tos => "tos",
        };
        f.write_str(value)
    }
}

impl FromStr for WarpScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tng" => Ok(WarpScale::Tng),
            "tos" => Ok(WarpScale::Tos),
            _ => Err(Error::UnknownScale {
                name: s.to_string(),
            }),
        }
    }
}

/// Sign of `value` as -1, 0 or +1.
///
/// Zero (including `-0.0`) maps to `0.0`; NaN propagates.
pub fn sign_of(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Round `value` to `digits` decimal places.
///
/// Non-finite values pass through. When scaling by `10^digits` would leave
/// the exactly representable integer range, `value` already carries fewer
/// fractional digits than requested and is returned as-is.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Ok(exp) = i32::try_from(digits) else {
        return value;
    };
    let factor = 10f64.powi(exp);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    scaled.round() / factor
}

/// Parse text into a real number.
///
/// Accepts anything `f64::from_str` accepts after trimming whitespace
/// (including `inf` and `nan`). Anything else is a
/// [`Error::TypeMismatch`]; text is never silently treated as zero.
///
/// ```
/// use warpfactor_lib::parse_real;
///
/// assert_eq!(parse_real(" 9.5 ").unwrap(), 9.5);
/// assert!(parse_real("warp nine").is_err());
/// ```
pub fn parse_real(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::TypeMismatch {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_covers_all_cases() {
        assert_eq!(sign_of(3.5), 1.0);
        assert_eq!(sign_of(-0.25), -1.0);
        assert_eq!(sign_of(0.0), 0.0);
        assert_eq!(sign_of(-0.0), 0.0);
        assert_eq!(sign_of(f64::INFINITY), 1.0);
        assert_eq!(sign_of(f64::NEG_INFINITY), -1.0);
        assert!(sign_of(f64::NAN).is_nan());
    }

    #[test]
    fn round_to_rounds_half_away_from_zero() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(-1.23456, 2), -1.23);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn round_to_passes_through_large_and_non_finite_values() {
        assert_eq!(round_to(1.0e20, 15), 1.0e20);
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(1.5, u32::MAX), 1.5);
    }

    #[test]
    fn parse_real_rejects_text() {
        assert_eq!(parse_real("9").unwrap(), 9.0);
        assert_eq!(parse_real("-1e3").unwrap(), -1000.0);
        assert_eq!(
            parse_real("abc"),
            Err(Error::TypeMismatch {
                input: "abc".to_string()
            })
        );
        assert!(parse_real("").is_err());
    }

    #[test]
    fn scale_round_trips_through_text() {
        assert_eq!("TNG".parse::<WarpScale>().unwrap(), WarpScale::Tng);
        assert_eq!(" tos ".parse::<WarpScale>().unwrap(), WarpScale::Tos);
        assert_eq!(WarpScale::Tos.to_string(), "tos");
        assert!("voyager".parse::<WarpScale>().is_err());
    }
}
