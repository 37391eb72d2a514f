//! Style tokens for the report UI.
//!
//! Neon-on-charcoal palette: cyan accents for focus and values, the two
//! series keep their conventional chart colors (blue CPI, red spending).

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan — focus, highlighted values.
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Steel blue — secondary text, hints, axes.
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Neon green — positive confirmations.
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Hot pink — errors.
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
/// Neon orange — warnings.
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple — neutral info.
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);

/// CPI series — classic chart blue.
pub const SERIES_CPI: Color = Color::Rgb(31, 119, 180);
/// Spending series — classic chart red.
pub const SERIES_SPENDING: Color = Color::Rgb(214, 39, 40);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn series_cpi() -> Style {
    Style::default().fg(SERIES_CPI)
}

pub fn series_spending() -> Style {
    Style::default().fg(SERIES_SPENDING)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Style for a correlation read-out: strong fits glow, weak ones dim.
pub fn correlation_style(r_abs: f64) -> Style {
    match r_abs {
        v if v >= 0.9 => positive(),
        v if v >= 0.7 => accent(),
        v if v >= 0.4 => neutral(),
        _ => muted(),
    }
}
