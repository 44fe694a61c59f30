//! Warp factor library entry points.
//!
//! This crate converts between warp factors and multiples of light-speed on
//! the TNG and TOS scales, and derives travel time, required warp and maximum
//! distance from those conversions. Every function is pure; callers (the CLI,
//! or any other front end) own unit conversion and presentation and should
//! only depend on the functions exported here.
//!

#![deny(warnings)]

pub mod duration;
pub mod error;
pub mod formula;
pub mod output;
pub mod scale;
pub mod travel;

pub use duration::{duration_to_text, DurationBreakdown, DurationFields, DAYS_PER_YEAR};
pub use error::{Error, Result};
pub use formula::{
    search_warp, speed_to_warp, speed_to_warp_with, warp_to_speed, SearchOptions, SearchOutcome,
    SearchTermination, DEFAULT_ACCURACY,
};
pub use output::{CalculationKind, CalculationSummary, Quantity};
pub use scale::{parse_real, round_to, sign_of, WarpScale};
pub use travel::{estimated_travel_time, maximum_distance, required_warp, TimeComponents};
