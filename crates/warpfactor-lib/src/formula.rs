//! Forward and inverse warp/speed conversions.
//!
//! Under the TNG scale the forward formula is `w^(10/3)` up to warp 9. Above
//! warp 9 the Berry-Shields correction multiplies that by
//!
//! ```text
//! w^(exp(-1/(B(w - 9)^2)) * A * (-ln(10 - w))^N)
//! ```
//!
//! which bends the curve into an asymptote at warp 10. The correction has no
//! closed-form inverse, so [`search_warp`] recovers the warp factor with a
//! coarse-to-fine hill climb. The TOS scale is a plain cube law in both
//! directions.

use tracing::{debug, warn};

use crate::scale::{round_to, sign_of, WarpScale};

/// Berry-Shields amplitude constant.
pub const BERRY_SHIELDS_A: f64 = 0.03658749373;
/// Berry-Shields exponent applied to `-ln(10 - w)`.
pub const BERRY_SHIELDS_N: f64 = 1.7952294708;
/// Berry-Shields blend constant controlling how sharply the correction
/// switches on above warp 9.
pub const BERRY_SHIELDS_B: f64 = 1000.0;

/// Warp factor above which the TNG correction applies.
pub const TNG_CORRECTION_THRESHOLD: f64 = 9.0;
/// TNG warp factor that maps to infinite speed.
pub const TNG_WARP_LIMIT: f64 = 10.0;

/// Accuracy (decimal digits) used when none is given.
pub const DEFAULT_ACCURACY: u32 = 15;
/// Iteration cap applied by [`SearchOptions::default`].
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Digits used for the final closest-match comparison of the search.
const FINAL_COMPARISON_DIGITS: u32 = 15;
const SEARCH_INITIAL_STEP: f64 = 0.1;

/// Convert a warp factor to a multiple of light-speed.
///
/// The sign of `warp` is factored out and reapplied, so negative factors
/// mirror the positive scale. Under [`WarpScale::Tng`] any magnitude of 10 or
/// more yields an infinite speed. The result is rounded to `digits` decimal
/// places.
///
/// ```
/// use warpfactor_lib::{warp_to_speed, WarpScale};
///
/// assert_eq!(warp_to_speed(2.0, 15, WarpScale::Tos), 8.0);
/// assert_eq!(warp_to_speed(-10.0, 15, WarpScale::Tng), f64::NEG_INFINITY);
/// ```
pub fn warp_to_speed(warp: f64, digits: u32, scale: WarpScale) -> f64 {
    let sign = sign_of(warp);
    if sign.is_nan() {
        return f64::NAN;
    }
    if sign == 0.0 {
        return 0.0;
    }

    let magnitude = warp.abs();
    let speed = match scale {
        WarpScale::Tos => magnitude.powf(scale.exponent()),
        WarpScale::Tng if magnitude >= TNG_WARP_LIMIT => f64::INFINITY,
        WarpScale::Tng => {
            let base = magnitude.powf(scale.exponent());
            if magnitude > TNG_CORRECTION_THRESHOLD {
                base * magnitude.powf(berry_shields_exponent(magnitude))
            } else {
                base
            }
        }
    };

    round_to(sign * speed, digits)
}

/// Exponent of the Berry-Shields correction for `9 < warp < 10`.
fn berry_shields_exponent(warp: f64) -> f64 {
    let offset = warp - TNG_CORRECTION_THRESHOLD;
    let blend = (-1.0 / (BERRY_SHIELDS_B * offset * offset)).exp();
    blend * BERRY_SHIELDS_A * (-(TNG_WARP_LIMIT - warp).ln()).powf(BERRY_SHIELDS_N)
}

/// Largest TNG speed that still has a closed-form inverse (`9^(10/3)`).
pub fn tng_closed_form_limit() -> f64 {
    TNG_CORRECTION_THRESHOLD.powf(WarpScale::Tng.exponent())
}

/// Termination controls for [`search_warp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// The search stops once the speed is within `10^-accuracy` of the target.
    pub accuracy: u32,
    /// Maximum number of climb steps; `None` relies on the step-underflow
    /// guard alone.
    pub max_iterations: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl SearchOptions {
    /// Options with the given accuracy and the default iteration cap.
    pub fn with_accuracy(accuracy: u32) -> Self {
        Self {
            accuracy,
            ..Self::default()
        }
    }

    fn tolerance(&self) -> f64 {
        i32::try_from(self.accuracy).map_or(0.0, |exp| 10f64.powi(-exp))
    }
}

/// Why [`search_warp`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTermination {
    /// Speed came within the requested tolerance.
    WithinTolerance,
    /// Speed matched the target exactly.
    ExactMatch,
    /// The step no longer changes the warp factor at `f64` precision. This
    /// is the best answer double precision can give.
    Stalled,
    /// The iteration cap was hit first.
    IterationLimit,
    /// The target speed was infinite; the answer is the warp 10 asymptote.
    InfiniteTarget,
    /// The target was at or below `9^(10/3)` and was inverted in closed form.
    ClosedForm,
}

/// Result of an inverse search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Best warp factor found (always positive).
    pub warp: f64,
    /// Number of climb steps taken.
    pub iterations: usize,
    pub termination: SearchTermination,
}

impl SearchOutcome {
    /// False only when the iteration cap cut the search short.
    pub fn converged(&self) -> bool {
        self.termination != SearchTermination::IterationLimit
    }

    /// True when the step-underflow guard ended the search.
    pub fn stalled(&self) -> bool {
        self.termination == SearchTermination::Stalled
    }
}

/// Find the TNG warp factor whose speed is `target`, a positive multiple of
/// light-speed.
///
/// Targets up to [`tng_closed_form_limit`] have an exact root and are answered
/// without searching ([`SearchTermination::ClosedForm`]). Above that limit the
/// search applies.
///
/// This is a coarse-to-fine hill climb, not Newton's method. Starting at
/// warp 9 with a step of 0.1:
///
/// - while the speed is below the target, advance one step;
/// - when it overshoots, back off one step, divide the step by ten and
///   advance by the finer step;
/// - stop once the speed is within `10^-accuracy` of the target, on an exact
///   hit, when `warp + step == warp` (the step has underflowed at the current
///   magnitude), or when `max_iterations` is reached.
///
/// The step is then scaled back up by ten and `warp + step` is adopted if it
/// lands closer to the target. This corrects the bias left by the exit
/// condition.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn search_warp(target: f64, options: &SearchOptions) -> SearchOutcome {
    if target.is_infinite() {
        return SearchOutcome {
            warp: TNG_WARP_LIMIT,
            iterations: 0,
            termination: SearchTermination::InfiniteTarget,
        };
    }
    if target <= tng_closed_form_limit() {
        return SearchOutcome {
            warp: target.powf(1.0 / WarpScale::Tng.exponent()),
            iterations: 0,
            termination: SearchTermination::ClosedForm,
        };
    }

    let tolerance = options.tolerance();
    let digits = options.accuracy;
    let speed_at = |warp: f64| warp_to_speed(warp, digits, WarpScale::Tng);

    let mut warp = TNG_CORRECTION_THRESHOLD;
    let mut step = SEARCH_INITIAL_STEP;
    let mut iterations = 0usize;

    let termination = loop {
        let speed = speed_at(warp);
        // Written as a negated `>` so that a NaN difference also stops.
        if !((speed - target).abs() > tolerance) {
            break SearchTermination::WithinTolerance;
        }
        if warp + step == warp {
            break SearchTermination::Stalled;
        }
        if options.max_iterations.is_some_and(|cap| iterations >= cap) {
            break SearchTermination::IterationLimit;
        }
        iterations += 1;

        if speed < target {
            warp += step;
        } else if speed > target {
            warp -= step;
            step /= 10.0;
            warp += step;
        } else {
            break SearchTermination::ExactMatch;
        }
    };

    step *= 10.0;
    let error_at =
        |w: f64| (warp_to_speed(w, FINAL_COMPARISON_DIGITS, WarpScale::Tng) - target).abs();
    if error_at(warp + step) < error_at(warp) {
        warp += step;
    }

    match termination {
        SearchTermination::IterationLimit => warn!(
            target_speed = target,
            iterations,
            warp,
            accuracy = options.accuracy,
            "warp search hit its iteration cap; returning best estimate"
        ),
        _ => debug!(
            target_speed = target,
            iterations,
            warp,
            ?termination,
            "warp search finished"
        ),
    }

    SearchOutcome {
        warp,
        iterations,
        termination,
    }
}

/// Convert a multiple of light-speed back to a warp factor.
///
/// Uses the closed-form root for the TOS scale and for TNG speeds up to
/// `9^(10/3)`; above that the TNG value comes from [`search_warp`] with the
/// given `accuracy` and the default iteration cap. The result is rounded to
/// `digits` decimal places.
///
/// ```
/// use warpfactor_lib::{speed_to_warp, WarpScale};
///
/// assert_eq!(speed_to_warp(27.0, 15, WarpScale::Tos, 15), 3.0);
/// assert_eq!(speed_to_warp(-1.0, 15, WarpScale::Tng, 15), -1.0);
/// ```
pub fn speed_to_warp(speed: f64, digits: u32, scale: WarpScale, accuracy: u32) -> f64 {
    speed_to_warp_with(speed, digits, scale, &SearchOptions::with_accuracy(accuracy))
}

/// [`speed_to_warp`] with explicit search termination controls.
pub fn speed_to_warp_with(
    speed: f64,
    digits: u32,
    scale: WarpScale,
    options: &SearchOptions,
) -> f64 {
    let sign = sign_of(speed);
    if sign.is_nan() {
        return f64::NAN;
    }
    if sign == 0.0 {
        return 0.0;
    }

    let magnitude = speed.abs();
    let warp = match scale {
        WarpScale::Tos => {
            debug!(speed, %scale, "inverting speed with the cube root");
            magnitude.cbrt()
        }
        WarpScale::Tng if magnitude <= tng_closed_form_limit() => {
            debug!(speed, %scale, "inverting speed in closed form");
            magnitude.powf(1.0 / WarpScale::Tng.exponent())
        }
        WarpScale::Tng => {
            debug!(speed, %scale, accuracy = options.accuracy, "inverting speed by search");
            search_warp(magnitude, options).warp
        }
    };

    round_to(sign * warp, digits)
}
