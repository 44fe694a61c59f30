//! Display units and their conversion to the library's canonical units.
//!
//! The library works in multiples of light-speed, light-years and
//! fractional years. Each unit here is described by how many of it make up
//! one canonical unit.
//!
//! | Quantity | Canonical | Units per canonical |
//! |----------|-----------|---------------------|
//! | speed | c | `c` 1, `km-s` 299 792.458 |
//! | distance | light-year | `ly` 1, `pc` 0.306601, `au` 63 241.08, `km` 9 460 730 777 119.56 |
//! | time | year | `years` 1, `months` 12, `weeks` 365.2425/7, `days` 365.2425, ... |

use clap::ValueEnum;

use warpfactor_lib::duration::{
    DAYS_PER_YEAR, HOURS_PER_YEAR, MINUTES_PER_YEAR, MONTHS_PER_YEAR, SECONDS_PER_YEAR,
    WEEKS_PER_YEAR,
};

/// Speed of light in kilometres per second.
pub const KM_PER_SECOND_PER_C: f64 = 299_792.458;
pub const PARSECS_PER_LIGHT_YEAR: f64 = 0.306601;
pub const AU_PER_LIGHT_YEAR: f64 = 63_241.08;
pub const KM_PER_LIGHT_YEAR: f64 = 9_460_730_777_119.56;

/// A display unit convertible to and from a canonical unit.
pub trait DisplayUnit: Copy {
    /// Number of this unit in one canonical unit.
    fn per_canonical(self) -> f64;

    /// Short symbol used in text output.
    fn symbol(self) -> &'static str;

    #[inline]
    fn to_canonical(self, value: f64) -> f64 {
        value / self.per_canonical()
    }

    #[inline]
    fn from_canonical(self, value: f64) -> f64 {
        value * self.per_canonical()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SpeedUnit {
    /// Multiples of the speed of light.
    #[default]
    #[value(name = "c")]
    LightSpeed,
    /// Kilometres per second.
    #[value(name = "km-s")]
    KilometresPerSecond,
}

impl DisplayUnit for SpeedUnit {
    fn per_canonical(self) -> f64 {
        match self {
            SpeedUnit::LightSpeed => 1.0,
            SpeedUnit::KilometresPerSecond => KM_PER_SECOND_PER_C,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::LightSpeed => "c",
            SpeedUnit::KilometresPerSecond => "km/s",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DistanceUnit {
    #[default]
    #[value(name = "ly", alias = "lightyears")]
    LightYears,
    #[value(name = "pc", alias = "parsecs")]
    Parsecs,
    #[value(name = "au")]
    AstronomicalUnits,
    #[value(name = "km", alias = "kilometers")]
    Kilometres,
}

impl DisplayUnit for DistanceUnit {
    fn per_canonical(self) -> f64 {
        match self {
            DistanceUnit::LightYears => 1.0,
            DistanceUnit::Parsecs => PARSECS_PER_LIGHT_YEAR,
            DistanceUnit::AstronomicalUnits => AU_PER_LIGHT_YEAR,
            DistanceUnit::Kilometres => KM_PER_LIGHT_YEAR,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::LightYears => "ly",
            DistanceUnit::Parsecs => "pc",
            DistanceUnit::AstronomicalUnits => "AU",
            DistanceUnit::Kilometres => "km",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    #[default]
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DisplayUnit for TimeUnit {
    fn per_canonical(self) -> f64 {
        match self {
            TimeUnit::Years => 1.0,
            TimeUnit::Months => MONTHS_PER_YEAR,
            TimeUnit::Weeks => WEEKS_PER_YEAR,
            TimeUnit::Days => DAYS_PER_YEAR,
            TimeUnit::Hours => HOURS_PER_YEAR,
            TimeUnit::Minutes => MINUTES_PER_YEAR,
            TimeUnit::Seconds => SECONDS_PER_YEAR,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }
}
