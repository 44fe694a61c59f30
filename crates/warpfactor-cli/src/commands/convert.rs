//! Direct warp factor and speed conversions.

use anyhow::{Context, Result};
use clap::Args;

use warpfactor_cli::output::emit;
use warpfactor_cli::units::{DisplayUnit, SpeedUnit};
use warpfactor_lib::{
    round_to, speed_to_warp, warp_to_speed, CalculationKind, CalculationSummary, Quantity,
    DEFAULT_ACCURACY,
};

use super::{parse_number, CommandContext, FULL_PRECISION};

/// Arguments for the speed command.
#[derive(Args, Debug, Clone)]
pub struct SpeedArgs {
    /// Warp factor to convert.
    #[arg(long, value_parser = parse_number, allow_negative_numbers = true)]
    pub warp: f64,
    /// Unit for the resulting speed.
    #[arg(long, value_enum, default_value_t)]
    pub speed_unit: SpeedUnit,
}

/// Arguments for the warp command.
#[derive(Args, Debug, Clone)]
pub struct WarpArgs {
    /// Speed to convert.
    #[arg(long, value_parser = parse_number, allow_negative_numbers = true)]
    pub speed: f64,
    /// Unit of `--speed`.
    #[arg(long, value_enum, default_value_t)]
    pub speed_unit: SpeedUnit,
    /// Search accuracy in decimal digits for TNG speeds above warp 9.
    #[arg(long, default_value_t = DEFAULT_ACCURACY, value_parser = clap::value_parser!(u32).range(0..=30))]
    pub accuracy: u32,
}

/// Handle the speed subcommand: warp factor to speed.
pub fn handle_speed(ctx: &CommandContext, args: &SpeedArgs) -> Result<()> {
    let speed = warp_to_speed(args.warp, FULL_PRECISION, ctx.scale);
    let display = round_to(args.speed_unit.from_canonical(speed), ctx.digits);

    let summary = CalculationSummary::new(
        CalculationKind::Speed,
        ctx.scale,
        Quantity::new("speed", display, Some(args.speed_unit.symbol())),
    )
    .with_input(Quantity::new("warp", args.warp, None));

    emit(&summary, ctx.format).context("failed to write speed result")
}

/// Handle the warp subcommand: speed to warp factor.
pub fn handle_warp(ctx: &CommandContext, args: &WarpArgs) -> Result<()> {
    let speed = args.speed_unit.to_canonical(args.speed);
    let warp = speed_to_warp(speed, FULL_PRECISION, ctx.scale, args.accuracy);
    let display = round_to(warp, ctx.digits);

    let summary = CalculationSummary::new(
        CalculationKind::Warp,
        ctx.scale,
        Quantity::new("warp", display, None),
    )
    .with_input(Quantity::new(
        "speed",
        args.speed,
        Some(args.speed_unit.symbol()),
    ));

    emit(&summary, ctx.format).context("failed to write warp result")
}
