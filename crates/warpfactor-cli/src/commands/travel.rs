//! Travel time, maximum distance and required warp calculations.

use anyhow::{bail, Context, Result};
use clap::Args;

use warpfactor_cli::output::emit;
use warpfactor_cli::units::{DisplayUnit, DistanceUnit, SpeedUnit, TimeUnit};
use warpfactor_lib::{
    duration_to_text, estimated_travel_time, maximum_distance, required_warp, round_to,
    speed_to_warp, CalculationKind, CalculationSummary, Quantity, TimeComponents, WarpScale,
    DEFAULT_ACCURACY,
};

use super::{parse_number, CommandContext, FULL_PRECISION};

/// Warp factor given directly, or derived from a speed.
#[derive(Args, Debug, Clone)]
pub struct WarpSource {
    /// Warp factor.
    #[arg(
        long,
        value_parser = parse_number,
        allow_negative_numbers = true,
        conflicts_with = "speed",
        required_unless_present = "speed"
    )]
    pub warp: Option<f64>,
    /// Speed, used instead of a warp factor.
    #[arg(long, value_parser = parse_number, allow_negative_numbers = true)]
    pub speed: Option<f64>,
    /// Unit of `--speed`.
    #[arg(long, value_enum, default_value_t)]
    pub speed_unit: SpeedUnit,
    /// Search accuracy in decimal digits for TNG speeds above warp 9.
    #[arg(long, default_value_t = DEFAULT_ACCURACY, value_parser = clap::value_parser!(u32).range(0..=30))]
    pub accuracy: u32,
}

impl WarpSource {
    /// Resolve the warp factor, converting `--speed` when no warp was given.
    pub fn resolve(&self, scale: WarpScale) -> Result<f64> {
        match (self.warp, self.speed) {
            (Some(warp), _) => Ok(warp),
            (None, Some(speed)) => Ok(speed_to_warp(
                self.speed_unit.to_canonical(speed),
                FULL_PRECISION,
                scale,
                self.accuracy,
            )),
            (None, None) => bail!("either --warp or --speed is required"),
        }
    }

    fn inputs(&self, warp: f64, digits: u32) -> Vec<Quantity> {
        let mut inputs = Vec::with_capacity(2);
        if let Some(speed) = self.speed {
            inputs.push(Quantity::new(
                "speed",
                speed,
                Some(self.speed_unit.symbol()),
            ));
        }
        inputs.push(Quantity::new("warp", round_to(warp, digits), None));
        inputs
    }
}

/// A travel time given as one value with a unit, or as calendar components.
#[derive(Args, Debug, Clone, Default)]
pub struct TravelTimeArgs {
    /// Travel time in `--time-unit`.
    #[arg(
        long,
        value_parser = parse_number,
        allow_negative_numbers = true,
        conflicts_with_all = ["years", "days", "hours", "minutes", "seconds"]
    )]
    pub time: Option<f64>,
    /// Unit of `--time`.
    #[arg(long, value_enum, default_value_t)]
    pub time_unit: TimeUnit,
    /// Whole or fractional years of travel time.
    #[arg(long, value_parser = parse_number)]
    pub years: Option<f64>,
    /// Days added to the travel time.
    #[arg(long, value_parser = parse_number)]
    pub days: Option<f64>,
    /// Hours added to the travel time.
    #[arg(long, value_parser = parse_number)]
    pub hours: Option<f64>,
    /// Minutes added to the travel time.
    #[arg(long, value_parser = parse_number)]
    pub minutes: Option<f64>,
    /// Seconds added to the travel time.
    #[arg(long, value_parser = parse_number)]
    pub seconds: Option<f64>,
}

impl TravelTimeArgs {
    /// Travel time in fractional years.
    pub fn to_years(&self) -> Result<f64> {
        if let Some(time) = self.time {
            return Ok(self.time_unit.to_canonical(time));
        }
        let given = [
            self.years,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ];
        if given.iter().all(Option::is_none) {
            bail!("a travel time is required: use --time or --years/--days/--hours/--minutes/--seconds");
        }
        let components = TimeComponents {
            years: self.years.unwrap_or(0.0),
            days: self.days.unwrap_or(0.0),
            hours: self.hours.unwrap_or(0.0),
            minutes: self.minutes.unwrap_or(0.0),
            seconds: self.seconds.unwrap_or(0.0),
        };
        Ok(components.to_years())
    }

    fn input(&self, years: f64) -> Quantity {
        match self.time {
            Some(time) => Quantity::new("time", time, Some(self.time_unit.symbol())),
            None => Quantity::new("time", years, Some(TimeUnit::Years.symbol())),
        }
    }
}

/// Arguments for the eta command.
#[derive(Args, Debug, Clone)]
pub struct EtaArgs {
    /// Distance to travel in `--distance-unit`.
    #[arg(long, value_parser = parse_number, allow_negative_numbers = true)]
    pub distance: f64,
    #[arg(long, value_enum, default_value_t)]
    pub distance_unit: DistanceUnit,
    #[command(flatten)]
    pub source: WarpSource,
    /// Unit for the resulting time.
    #[arg(long, value_enum, default_value_t)]
    pub time_unit: TimeUnit,
    /// Leave months out of the duration text.
    #[arg(long)]
    pub no_months: bool,
    /// Leave weeks out of the duration text.
    #[arg(long)]
    pub no_weeks: bool,
}

/// Arguments for the distance command.
#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub source: WarpSource,
    #[command(flatten)]
    pub time: TravelTimeArgs,
    /// Unit for the resulting distance.
    #[arg(long, value_enum, default_value_t)]
    pub distance_unit: DistanceUnit,
}

/// Arguments for the required-warp command.
#[derive(Args, Debug, Clone)]
pub struct RequiredWarpArgs {
    /// Distance to travel in `--distance-unit`.
    #[arg(long, value_parser = parse_number, allow_negative_numbers = true)]
    pub distance: f64,
    #[arg(long, value_enum, default_value_t)]
    pub distance_unit: DistanceUnit,
    #[command(flatten)]
    pub time: TravelTimeArgs,
}

/// Handle the eta subcommand: time to cover a distance.
pub fn handle_eta(ctx: &CommandContext, args: &EtaArgs) -> Result<()> {
    let warp = args.source.resolve(ctx.scale)?;
    let distance_ly = args.distance_unit.to_canonical(args.distance);
    let years = estimated_travel_time(distance_ly, warp, ctx.scale, args.source.accuracy);
    if years.is_nan() {
        tracing::warn!(warp, "speed is zero; travel time is undefined");
    }
    let display = round_to(args.time_unit.from_canonical(years), ctx.digits);

    let mut summary = CalculationSummary::new(
        CalculationKind::TravelTime,
        ctx.scale,
        Quantity::new("time", display, Some(args.time_unit.symbol())),
    );
    for input in args.source.inputs(warp, ctx.digits) {
        summary = summary.with_input(input);
    }
    let summary = summary
        .with_input(Quantity::new(
            "distance",
            args.distance,
            Some(args.distance_unit.symbol()),
        ))
        .with_duration_text(duration_to_text(years, !args.no_months, !args.no_weeks));

    emit(&summary, ctx.format).context("failed to write travel time result")
}

/// Handle the distance subcommand: distance covered in a given time.
pub fn handle_distance(ctx: &CommandContext, args: &DistanceArgs) -> Result<()> {
    let warp = args.source.resolve(ctx.scale)?;
    let years = args.time.to_years()?;
    let distance_ly = maximum_distance(warp, years, FULL_PRECISION, ctx.scale);
    let display = round_to(args.distance_unit.from_canonical(distance_ly), ctx.digits);

    let mut summary = CalculationSummary::new(
        CalculationKind::Distance,
        ctx.scale,
        Quantity::new("distance", display, Some(args.distance_unit.symbol())),
    );
    for input in args.source.inputs(warp, ctx.digits) {
        summary = summary.with_input(input);
    }
    let summary = summary.with_input(args.time.input(years));

    emit(&summary, ctx.format).context("failed to write distance result")
}

/// Handle the required-warp subcommand: warp needed to arrive in time.
pub fn handle_required_warp(ctx: &CommandContext, args: &RequiredWarpArgs) -> Result<()> {
    let distance_ly = args.distance_unit.to_canonical(args.distance);
    let years = args.time.to_years()?;
    let warp = required_warp(distance_ly, years, FULL_PRECISION, ctx.scale)
        .context("cannot derive a required warp factor")?;
    let display = round_to(warp, ctx.digits);

    let summary = CalculationSummary::new(
        CalculationKind::RequiredWarp,
        ctx.scale,
        Quantity::new("warp", display, None),
    )
    .with_input(Quantity::new(
        "distance",
        args.distance,
        Some(args.distance_unit.symbol()),
    ))
    .with_input(args.time.input(years));

    emit(&summary, ctx.format).context("failed to write required warp result")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(warp: Option<f64>, speed: Option<f64>) -> WarpSource {
        WarpSource {
            warp,
            speed,
            speed_unit: SpeedUnit::LightSpeed,
            accuracy: 15,
        }
    }

    #[test]
    fn warp_source_prefers_warp() {
        let resolved = source(Some(9.0), Some(27.0)).resolve(WarpScale::Tos).unwrap();
        assert_eq!(resolved, 9.0);
    }

    #[test]
    fn warp_source_converts_speed() {
        let resolved = source(None, Some(27.0)).resolve(WarpScale::Tos).unwrap();
        assert_eq!(resolved, 3.0);
        assert!(source(None, None).resolve(WarpScale::Tng).is_err());
    }

    #[test]
    fn travel_time_uses_unit_or_components() {
        let single = TravelTimeArgs {
            time: Some(730.485),
            ..TravelTimeArgs::default()
        };
        assert!((single.to_years().unwrap() - 2.0).abs() < 1e-12);

        let components = TravelTimeArgs {
            years: Some(1.0),
            days: Some(365.2425 / 2.0),
            ..TravelTimeArgs::default()
        };
        assert!((components.to_years().unwrap() - 1.5).abs() < 1e-12);

        assert!(TravelTimeArgs::default().to_years().is_err());
    }
}
