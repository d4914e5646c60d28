//! Top status bar
//!
//! Shows the app title, interaction mode, match count, active category,
//! sort mode, and theme marker on a single line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::SortMode;
use crate::mode::Mode;
use crate::theme::Theme;

use super::ModeIndicator;

/// One-line status bar rendered at the top of the screen
pub struct StatusBar<'a> {
    pub mode: Mode,
    /// Personas matching the current filter
    pub shown: usize,
    /// Personas in the full catalog
    pub total: usize,
    pub category: &'a str,
    pub sort: SortMode,
    pub theme: Theme,
}

impl StatusBar<'_> {
    /// The status line content, without background styling
    pub fn line(&self) -> Line<'static> {
        let palette = self.theme.palette();
        Line::from(vec![
            Span::styled(
                " Persona Directory ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            ModeIndicator::new(self.mode).as_span(),
            Span::raw(format!(" {}/{} personas", self.shown, self.total)),
            Span::raw(" | "),
            Span::raw(format!("Category: {}", self.category)),
            Span::raw(" | "),
            Span::raw(format!("Sort: {}", self.sort.name())),
            Span::raw(" | "),
            Span::styled(self.theme.name(), Style::default().fg(palette.accent)),
            Span::raw(" "),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        let bar = Paragraph::new(self.line())
            .style(Style::default().bg(palette.bg_alt).fg(palette.fg));
        bar.render(area, buf);
    }
}
