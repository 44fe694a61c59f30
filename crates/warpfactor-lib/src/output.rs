use std::fmt::Write;

use serde::Serialize;

use crate::scale::WarpScale;

/// Classifies the calculation that produced a summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    Speed,
    Warp,
    TravelTime,
    Distance,
    RequiredWarp,
}

impl CalculationKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            CalculationKind::Speed => "Speed",
            CalculationKind::Warp => "Warp Factor",
            CalculationKind::TravelTime => "Time",
            CalculationKind::Distance => "Distance",
            CalculationKind::RequiredWarp => "Required Warp",
        }
    }
}

/// A named quantity in display units.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Quantity {
    pub name: String,
    /// Serialised as `null` when not finite.
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(name: impl Into<String>, value: f64, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.map(str::to_string),
        }
    }

    fn render(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) => format!("{} = {} {}", self.name, self.value, unit),
            None => format!("{} = {}", self.name, self.value),
        }
    }
}

/// Structured representation of one calculation that adapters can render
/// or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalculationSummary {
    pub kind: CalculationKind,
    pub scale: WarpScale,
    pub inputs: Vec<Quantity>,
    pub result: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
}

impl CalculationSummary {
    pub fn new(kind: CalculationKind, scale: WarpScale, result: Quantity) -> Self {
        Self {
            kind,
            scale,
            inputs: Vec::new(),
            result,
            duration_text: None,
        }
    }

    pub fn with_input(mut self, input: Quantity) -> Self {
        self.inputs.push(input);
        self
    }

    /// Attach formatted duration text; empty text is dropped.
    pub fn with_duration_text(mut self, text: String) -> Self {
        let trimmed = text.trim_end();
        if !trimmed.is_empty() {
            self.duration_text = Some(trimmed.to_string());
        }
        self
    }

    /// Plain multi-line rendering.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} ({} scale):",
            self.kind.label(),
            self.scale.label()
        );
        for input in &self.inputs {
            let _ = writeln!(buffer, "  {}", input.render());
        }
        let _ = writeln!(buffer, "  {}", self.result.render());
        if let Some(text) = &self.duration_text {
            let _ = writeln!(buffer, "  ({})", text);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationSummary {
        CalculationSummary::new(
            CalculationKind::TravelTime,
            WarpScale::Tng,
            Quantity::new("time", 1.5, Some("years")),
        )
        .with_input(Quantity::new("warp", 9.0, None))
        .with_input(Quantity::new("distance", 4.2, Some("ly")))
        .with_duration_text("1 year 6 months ".to_string())
    }

    #[test]
    fn plain_rendering_lists_inputs_then_result() {
        let text = sample().render_plain();
        assert_eq!(
            text,
            "Time (TNG scale):\n  warp = 9\n  distance = 4.2 ly\n  time = 1.5 years\n  (1 year 6 months)\n"
        );
    }

    #[test]
    fn empty_duration_text_is_dropped() {
        let summary = CalculationSummary::new(
            CalculationKind::Speed,
            WarpScale::Tos,
            Quantity::new("speed", 0.0, Some("c")),
        )
        .with_duration_text(String::new());
        assert_eq!(summary.duration_text, None);
    }
}
