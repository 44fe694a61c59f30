//! Travel time, required warp and maximum distance.
//!
//! Distances are in light-years, times in fractional years and speeds in
//! multiples of light-speed, so `distance = speed * time` holds without any
//! conversion factor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::duration::{DAYS_PER_YEAR, HOURS_PER_YEAR, MINUTES_PER_YEAR, SECONDS_PER_YEAR};
use crate::error::{Error, Result};
use crate::formula::{speed_to_warp, warp_to_speed, DEFAULT_ACCURACY};
use crate::scale::{round_to, WarpScale};

/// Years needed to cover `distance` light-years at `warp`.
///
/// The speed is computed with `accuracy` digits and the time is returned
/// unrounded. A zero speed makes the time undefined and yields NaN, for a
/// zero distance as well as a non-zero one.
///
/// ```
/// use warpfactor_lib::{estimated_travel_time, WarpScale};
///
/// assert_eq!(estimated_travel_time(27.0, 3.0, WarpScale::Tos, 15), 1.0);
/// assert!(estimated_travel_time(0.0, 0.0, WarpScale::Tng, 15).is_nan());
/// ```
pub fn estimated_travel_time(distance: f64, warp: f64, scale: WarpScale, accuracy: u32) -> f64 {
    let speed = warp_to_speed(warp, accuracy, scale);
    if speed == 0.0 {
        debug!(distance, warp, "zero speed; travel time is undefined");
        return f64::NAN;
    }
    distance / speed
}

/// Warp factor needed to cover `distance` light-years in `time` years.
///
/// # Errors
///
/// Returns [`Error::ZeroTravelTime`] when `time` is zero, since no finite
/// speed covers a distance instantly.
pub fn required_warp(distance: f64, time: f64, digits: u32, scale: WarpScale) -> Result<f64> {
    if time == 0.0 {
        return Err(Error::ZeroTravelTime { distance });
    }
    let speed = distance / time;
    Ok(speed_to_warp(speed, digits, scale, DEFAULT_ACCURACY))
}

/// Light-years covered at `warp` over `time` years, rounded to `digits`.
pub fn maximum_distance(warp: f64, time: f64, digits: u32, scale: WarpScale) -> f64 {
    let speed = warp_to_speed(warp, digits, scale);
    round_to(speed * time, digits)
}

/// A travel time entered as separate calendar components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeComponents {
    pub years: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl TimeComponents {
    /// Total time in fractional years.
    ///
    /// ```
    /// use warpfactor_lib::TimeComponents;
    ///
    /// let time = TimeComponents { years: 1.0, hours: 24.0, ..Default::default() };
    /// assert!((time.to_years() - (1.0 + 1.0 / 365.2425)).abs() < 1e-12);
    /// ```
    pub fn to_years(&self) -> f64 {
        self.years
            + self.days / DAYS_PER_YEAR
            + self.hours / HOURS_PER_YEAR
            + self.minutes / MINUTES_PER_YEAR
            + self.seconds / SECONDS_PER_YEAR
    }

    /// True when no component was given a non-zero value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
