mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::convert::{handle_speed, handle_warp, SpeedArgs, WarpArgs};
use commands::travel::{
    handle_distance, handle_eta, handle_required_warp, DistanceArgs, EtaArgs, RequiredWarpArgs,
};
use commands::{CommandContext, ScaleArg};
use warpfactor_cli::output::{print_logo, OutputFormat};
use warpfactor_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Warp factor, speed and travel time calculator")]
struct Cli {
    /// Warp scale definition.
    #[arg(long, global = true, value_enum, env = "WARPFACTOR_SCALE", default_value_t)]
    scale: ScaleArg,

    /// Decimal places shown in results.
    #[arg(long, global = true, env = "WARPFACTOR_DIGITS", default_value_t = 3)]
    digits: u32,

    /// Output format.
    #[arg(long, global = true, value_enum, env = "WARPFACTOR_FORMAT", default_value_t)]
    format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a warp factor to a speed.
    Speed(SpeedArgs),
    /// Convert a speed to a warp factor.
    Warp(WarpArgs),
    /// Time needed to cover a distance at a warp factor or speed.
    Eta(EtaArgs),
    /// Distance covered at a warp factor or speed over a travel time.
    Distance(DistanceArgs),
    /// Warp factor needed to cover a distance within a travel time.
    RequiredWarp(RequiredWarpArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = CommandContext {
        scale: cli.scale.into(),
        digits: cli.digits,
        format: cli.format,
    };

    if !cli.no_logo && cli.format == OutputFormat::Text {
        print_logo(&ColorPalette::detect());
    }

    match &cli.command {
        Command::Speed(args) => handle_speed(&ctx, args),
        Command::Warp(args) => handle_warp(&ctx, args),
        Command::Eta(args) => handle_eta(&ctx, args),
        Command::Distance(args) => handle_distance(&ctx, args),
        Command::RequiredWarp(args) => handle_required_warp(&ctx, args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
