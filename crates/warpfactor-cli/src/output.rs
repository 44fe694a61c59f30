//! Output formatting for calculation summaries.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use warpfactor_lib::{CalculationSummary, Quantity};

use crate::terminal::{supports_unicode, ColorPalette};

/// Output format for calculation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON for scripting.
    Json,
}

/// Print the CLI banner.
///
/// Uses box-drawing characters when Unicode is supported and falls back to
/// ASCII otherwise.
pub fn print_logo(palette: &ColorPalette) {
    let ColorPalette {
        frame,
        accent,
        reset,
        ..
    } = *palette;

    if supports_unicode() {
        println!(
            "{frame}╭──────────────────────────────────╮{reset}
{frame}│{accent}   W A R P   C A L C U L A T O R  {frame}│{reset}
{frame}╰──────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{accent}+------------------------------+
|  WARP CALCULATOR             |
+------------------------------+{reset}"
        );
    }
}

fn render_quantity(buffer: &mut String, quantity: &Quantity, palette: &ColorPalette) {
    let _ = write!(
        buffer,
        "  {}{}{} = {}{}{}",
        palette.label, quantity.name, palette.reset, palette.value, quantity.value, palette.reset
    );
    if let Some(unit) = quantity.unit.as_deref() {
        let _ = write!(buffer, " {}", unit);
    }
    buffer.push('\n');
}

/// Render a summary as text using `palette` for emphasis. With
/// [`ColorPalette::plain`] this matches [`CalculationSummary::render_plain`].
pub fn render_text(summary: &CalculationSummary, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{} ({} scale):",
        summary.kind.label(),
        summary.scale.label()
    );
    for input in &summary.inputs {
        render_quantity(&mut buffer, input, palette);
    }
    render_quantity(&mut buffer, &summary.result, palette);
    if let Some(text) = &summary.duration_text {
        let _ = writeln!(buffer, "  ({})", text);
    }
    buffer
}

/// Render a summary in JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json(summary: &CalculationSummary) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, summary)?;
    writeln!(stdout)?;
    Ok(())
}

/// Write `summary` to stdout in the requested format.
pub fn emit(summary: &CalculationSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render_text(summary, &ColorPalette::detect()));
            Ok(())
        }
        OutputFormat::Json => render_json(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpfactor_lib::{CalculationKind, WarpScale};

    fn summary() -> CalculationSummary {
        CalculationSummary::new(
            CalculationKind::Distance,
            WarpScale::Tos,
            Quantity::new("distance", 54.0, Some("ly")),
        )
        .with_input(Quantity::new("warp", 3.0, None))
        .with_input(Quantity::new("time", 2.0, Some("years")))
    }

    #[test]
    fn plain_text_matches_library_rendering() {
        let summary = summary();
        assert_eq!(
            render_text(&summary, &ColorPalette::plain()),
            summary.render_plain()
        );
    }

    #[test]
    fn colored_text_highlights_values() {
        let text = render_text(&summary(), &ColorPalette::colored());
        assert!(text.contains("\x1b[1;97m54\x1b[0m ly"));
        assert!(text.starts_with("Distance (TOS scale):"));
    }
}
