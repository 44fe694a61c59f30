//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and capability
//! detection for terminal output formatting.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for result values.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for labels and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for banner frames.
    pub const CYAN: &str = "\x1b[36m";
    /// Orange (256-color) for banner text.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub frame: &'static str,
    pub accent: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            value: colors::WHITE_BOLD,
            label: colors::GRAY,
            frame: colors::CYAN,
            accent: colors::ORANGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            value: "",
            label: "",
            frame: "",
            accent: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Output capabilities read from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    pub color: bool,
    pub unicode: bool,
}

impl TerminalCaps {
    /// Capabilities of the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capabilities from an arbitrary variable lookup.
    ///
    /// Color is on unless `NO_COLOR` is set (https://no-color.org/) or
    /// `TERM=dumb`. Unicode follows the effective locale: the first
    /// non-empty of `LC_ALL`, `LC_CTYPE` and `LANG` must name a UTF-8
    /// codeset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dumb = lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let color = lookup("NO_COLOR").is_none() && !dumb;

        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.is_empty());
        let unicode = !dumb
            && locale.is_some_and(|value| {
                let upper = value.to_uppercase();
                upper.contains("UTF-8") || upper.contains("UTF8")
            });

        Self { color, unicode }
    }
}

/// Whether ANSI colors should be written to stdout.
#[must_use]
pub fn supports_color() -> bool {
    TerminalCaps::from_env().color
}

/// Whether the banner may use box-drawing characters.
#[must_use]
pub fn supports_unicode() -> bool {
    TerminalCaps::from_env().unicode
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(vars: &[(&str, &str)]) -> TerminalCaps {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TerminalCaps::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn palettes_differ_only_in_codes() {
        let colored = ColorPalette::colored();
        assert!(!colored.reset.is_empty());
        assert!(!colored.value.is_empty());
        let plain = ColorPalette::plain();
        assert!(plain.reset.is_empty());
        assert!(plain.frame.is_empty());
    }

    #[test]
    fn no_color_disables_color() {
        assert!(!caps(&[("NO_COLOR", "1"), ("TERM", "xterm")]).color);
        assert!(!caps(&[("NO_COLOR", ""), ("TERM", "xterm")]).color);
    }

    #[test]
    fn dumb_terminal_gets_plain_ascii() {
        let dumb = caps(&[("TERM", "DUMB"), ("LANG", "en_GB.UTF-8")]);
        assert!(!dumb.color);
        assert!(!dumb.unicode);
    }

    #[test]
    fn ordinary_terminal_has_color() {
        assert!(caps(&[("TERM", "xterm-256color")]).color);
        assert!(caps(&[]).color);
    }

    #[test]
    fn unicode_follows_effective_locale() {
        assert!(caps(&[("LANG", "en_US.UTF-8")]).unicode);
        assert!(caps(&[("LC_CTYPE", "C.utf8")]).unicode);
        assert!(!caps(&[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")]).unicode);
        assert!(caps(&[("LC_ALL", ""), ("LANG", "en_US.UTF-8")]).unicode);
        assert!(!caps(&[]).unicode);
    }
}
