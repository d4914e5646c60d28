//! Mode indicator widget for the status bar.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::mode::Mode;

/// A mode indicator that displays the current interaction mode.
///
/// Color coded:
/// - Browse: Blue
/// - Search: Green
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    /// Create a new mode indicator for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Get the display color for the current mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Browse => Color::Blue,
            Mode::Search => Color::Green,
        }
    }

    /// Get the short display code for the mode.
    pub fn mode_code(mode: Mode) -> &'static str {
        mode.short_code()
    }

    /// Render as a styled span (for embedding in other widgets).
    pub fn as_span(&self) -> Span<'static> {
        let color = Self::mode_color(self.mode);
        let code = Self::mode_code(self.mode);

        Span::styled(
            format!("[{}]", code),
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    }
}
