//! Light/dark theme and the page-wide styling marker
//!
//! The visual theme has two halves: the `theme` flag held in application
//! state, and a process-wide dark-mode marker that the render path reads
//! when painting the full-frame background. The marker has exactly one
//! writer (the toggle action); setting it is idempotent and reversible,
//! and `main` clears it on shutdown.

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::Color;

static DARK_MODE: AtomicBool = AtomicBool::new(false);

/// Set the process-wide dark-mode marker. Idempotent.
pub fn set_dark(dark: bool) {
    DARK_MODE.store(dark, Ordering::Relaxed);
}

/// Read the process-wide dark-mode marker.
pub fn is_dark() -> bool {
    DARK_MODE.load(Ordering::Relaxed)
}

/// The theme currently active for the whole screen.
pub fn current() -> Theme {
    if is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Clear the marker, restoring the light default.
pub fn reset() {
    set_dark(false);
}

/// Visual styling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Display label for the status bar
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "LIGHT",
            Theme::Dark => "DARK",
        }
    }

    /// Role-named colors for this theme
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::White,
                bg_alt: Color::Gray,
                fg: Color::Black,
                fg_dim: Color::DarkGray,
                card_border: Color::DarkGray,
                accent: Color::Blue,
                highlight: Color::Cyan,
            },
            Theme::Dark => Palette {
                bg: Color::Black,
                bg_alt: Color::DarkGray,
                fg: Color::White,
                fg_dim: Color::Gray,
                card_border: Color::Gray,
                accent: Color::LightBlue,
                highlight: Color::Cyan,
            },
        }
    }
}

/// Role-named colors resolved from the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Full-frame background
    pub bg: Color,
    /// Status bar background
    pub bg_alt: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary text (summaries, hints)
    pub fg_dim: Color,
    /// Card borders at rest
    pub card_border: Color,
    /// Category tags and titles
    pub accent: Color,
    /// Cursor card and selections
    pub highlight: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_involutive() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette().bg, Theme::Dark.palette().bg);
    }
}
