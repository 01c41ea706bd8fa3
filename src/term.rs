//! Terminal output boundary: semantic tints, ANSI capability, geometry.

use std::env;

use colored::{Color, ColoredString, Colorize};

/// Semantic color tags used by the renderer and the CLI glue.
///
/// Resolved to concrete colors only here, so rendering code never names an
/// escape sequence. Low/Mid/High are the band-index tiers of the bar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Primary,
    Info,
    Accent,
    Success,
    Warning,
    Error,
    Low,
    Mid,
    High,
}

impl Tint {
    fn color(self) -> Color {
        match self {
            Tint::Primary | Tint::High => Color::Cyan,
            Tint::Info => Color::Blue,
            Tint::Accent => Color::Magenta,
            Tint::Success => Color::Green,
            Tint::Warning | Tint::Mid => Color::Yellow,
            Tint::Error | Tint::Low => Color::Red,
        }
    }
}

/// Applies a tint to `text`. Whether codes are actually emitted follows the
/// capability probe or an explicit [`set_color`] override.
pub fn paint(text: &str, tint: Tint) -> ColoredString {
    text.color(tint.color())
}

/// Probes the environment once at startup and disables colors when the
/// terminal cannot render them.
pub fn init() {
    if !ansi_supported() {
        set_color(false);
    }
}

/// Forces colored output on or off, overriding the probe.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Terminal geometry from COLUMNS/LINES, defaulting to 80x24.
pub fn geometry() -> (usize, usize) {
    (dimension("COLUMNS", 80), dimension("LINES", 24))
}

/// Clears the screen, falling back to blank lines without ANSI support.
pub fn clear_screen() {
    if ansi_supported() {
        print!("\x1b[2J\x1b[H");
    } else {
        let (_, lines) = geometry();
        for _ in 0..lines {
            println!();
        }
    }
}

/// A horizontal rule of the given width.
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

fn ansi_supported() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match env::var("TERM") {
        Ok(term) if term != "dumb" => true,
        _ => env::var_os("TERM_PROGRAM").is_some(),
    }
}

fn dimension(var: &str, fallback: usize) -> usize {
    env::var(var)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(fallback)
}
