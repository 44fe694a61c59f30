//! Human-readable rendering of fractional-year durations.

use std::fmt;

use serde::Serialize;

/// Mean Gregorian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = DAYS_PER_YEAR / 7.0;
pub const HOURS_PER_YEAR: f64 = DAYS_PER_YEAR * 24.0;
pub const MINUTES_PER_YEAR: f64 = HOURS_PER_YEAR * 60.0;
pub const SECONDS_PER_YEAR: f64 = MINUTES_PER_YEAR * 60.0;

/// Optional units included in a breakdown. Years, days, hours, minutes and
/// seconds are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationFields {
    pub months: bool,
    pub weeks: bool,
}

impl Default for DurationFields {
    fn default() -> Self {
        Self {
            months: true,
            weeks: true,
        }
    }
}

/// A duration split greedily into calendar units, most significant first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DurationBreakdown {
    /// Whole years; kept as `f64` since travel times can exceed any integer
    /// type.
    pub years: f64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    /// Remaining seconds rounded to two decimal places.
    pub seconds: f64,
}

/// Unit lengths in hundredths of a second. The Gregorian year is a whole
/// number of seconds, as are its twelfth, week, day, hour and minute.
const CENTIS_PER_YEAR: u64 = 3_155_695_200;
const CENTIS_PER_MONTH: u64 = CENTIS_PER_YEAR / 12;
const CENTIS_PER_WEEK: u64 = 7 * CENTIS_PER_DAY;
const CENTIS_PER_DAY: u64 = 24 * CENTIS_PER_HOUR;
const CENTIS_PER_HOUR: u64 = 60 * CENTIS_PER_MINUTE;
const CENTIS_PER_MINUTE: u64 = 6_000;

impl DurationBreakdown {
    /// Split `years` into units. The sign is ignored and non-finite input
    /// produces an empty breakdown.
    ///
    /// The fractional year is rounded once to the nearest hundredth of a
    /// second and then divided greedily, so a value just short of a unit
    /// boundary carries into the larger unit (`59.999s` is `1 minute`, not
    /// `60 seconds`).
    pub fn from_years(years: f64, fields: DurationFields) -> Self {
        if !years.is_finite() {
            return Self::default();
        }

        let magnitude = years.abs();
        let mut whole_years = magnitude.trunc();
        let fraction = magnitude - whole_years;

        // fraction is in [0, 1), so the product fits comfortably in a u64.
        let mut remaining = (fraction * CENTIS_PER_YEAR as f64).round() as u64;
        if remaining >= CENTIS_PER_YEAR {
            whole_years += 1.0;
            remaining -= CENTIS_PER_YEAR;
        }

        let mut take = |enabled: bool, unit: u64| -> u64 {
            if !enabled {
                return 0;
            }
            let count = remaining / unit;
            remaining %= unit;
            count
        };

        let months = take(fields.months, CENTIS_PER_MONTH);
        let weeks = take(fields.weeks, CENTIS_PER_WEEK);
        let days = take(true, CENTIS_PER_DAY);
        let hours = take(true, CENTIS_PER_HOUR);
        let minutes = take(true, CENTIS_PER_MINUTE);
        let seconds = remaining as f64 / 100.0;

        Self {
            years: whole_years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// True when every unit is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0.0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }
}

fn plural(count: f64) -> &'static str {
    if count == 1.0 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for DurationBreakdown {
    /// Every non-zero unit except seconds is written as `"<n> <unit> "`;
    /// seconds close the text without a trailing space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            ("year", self.years),
            ("month", self.months as f64),
            ("week", self.weeks as f64),
            ("day", self.days as f64),
            ("hour", self.hours as f64),
            ("minute", self.minutes as f64),
        ];
        for (name, count) in units {
            if count != 0.0 {
                write!(f, "{} {}{} ", count, name, plural(count))?;
            }
        }
        if self.seconds != 0.0 {
            write!(f, "{} second{}", self.seconds, plural(self.seconds))?;
        }
        Ok(())
    }
}

/// Render a fractional number of years as text, e.g.
/// `"2 years 182 days 14 hours 54 minutes 36 seconds"`.
///
/// Zero units are omitted and a count of exactly one uses the singular, so a
/// zero duration renders as an empty string.
///
/// ```
/// use warpfactor_lib::duration_to_text;
///
/// assert_eq!(duration_to_text(1.5, true, true), "1 year 6 months ");
/// assert_eq!(duration_to_text(0.0, true, true), "");
/// ```
pub fn duration_to_text(years: f64, include_months: bool, include_weeks: bool) -> String {
    let fields = DurationFields {
        months: include_months,
        weeks: include_weeks,
    };
    DurationBreakdown::from_years(years, fields).to_string()
}
