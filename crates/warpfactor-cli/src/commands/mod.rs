// Module exports for CLI subcommands
//
// Each module handles a group of calculations. main.rs parses arguments and
// dispatches to these handlers with a shared `CommandContext`.

pub mod convert;
pub mod travel;

use clap::ValueEnum;
use warpfactor_lib::{parse_real, WarpScale};
use warpfactor_cli::output::OutputFormat;

/// Digits requested from the library. Display rounding to `--digits`
/// happens after unit conversion.
pub const FULL_PRECISION: u32 = 15;

/// Warp scale selection on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    /// Next Generation scale (asymptote at warp 10).
    #[default]
    Tng,
    /// Original Series scale (cube law).
    Tos,
}

impl From<ScaleArg> for WarpScale {
    fn from(value: ScaleArg) -> Self {
        match value {
            ScaleArg::Tng => WarpScale::Tng,
            ScaleArg::Tos => WarpScale::Tos,
        }
    }
}

/// Settings shared by every calculation.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub scale: WarpScale,
    /// Decimal places shown in results.
    pub digits: u32,
    pub format: OutputFormat,
}

/// `clap` value parser that rejects anything that is not a real number.
pub fn parse_number(value: &str) -> Result<f64, String> {
    parse_real(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_reports_type_mismatch() {
        assert_eq!(parse_number("-9.5"), Ok(-9.5));
        let err = parse_number("fast").unwrap_err();
        assert!(err.contains("real number"), "{}", err);
    }

    #[test]
    fn scale_arg_maps_to_library_scale() {
        assert_eq!(WarpScale::from(ScaleArg::Tng), WarpScale::Tng);
        assert_eq!(WarpScale::from(ScaleArg::Tos), WarpScale::Tos);
    }
}
