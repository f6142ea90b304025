//! Terminal styling and number formatting.
//!
//! Colors are plain ANSI escape sequences; detection honours the `NO_COLOR`
//! and `TERM=dumb` conventions so piped or CI output stays clean.

/// ANSI escape codes used by the renderers.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings and gas names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for labels and units.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for computed quantities.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for margins with headroom.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for margins close to the limit.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for space-charge-limited points.
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Palette with ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    /// Palette with every code empty.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
            red: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, else `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color for a perveance margin: red below 1, orange below 1.5, else green.
    #[must_use]
    pub fn margin(&self, margin: f64) -> &'static str {
        if margin < 1.0 {
            self.red
        } else if margin < 1.5 {
            self.orange
        } else {
            self.green
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Returns `false` when `NO_COLOR` is set or `TERM` is `dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

const PREFIXES: [(f64, &str); 7] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
];

/// Format a value with an SI prefix and three significant decimals.
///
/// ```
/// # use thruster_cli::terminal::format_si;
/// assert_eq!(format_si(0.0977503, "N"), "97.750 mN");
/// assert_eq!(format_si(4000.0, "W"), "4.000 kW");
/// assert_eq!(format_si(0.0, "W"), "0.000 W");
/// ```
#[must_use]
pub fn format_si(value: f64, unit: &str) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value:.3} {unit}");
    }
    let magnitude = value.abs();
    let (scale, prefix) = PREFIXES
        .iter()
        .copied()
        .find(|(scale, _)| magnitude >= *scale)
        .unwrap_or(PREFIXES[PREFIXES.len() - 1]);
    format!("{:.3} {prefix}{unit}", value / scale)
}
