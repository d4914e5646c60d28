//! The detail overlay
//!
//! Centered modal shown for the selected persona, layered above the grid.
//! Shows the full details text and the copy/close key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use persona_core::Persona;

use crate::theme::Palette;

use super::centered_rect;

/// The modal detail view for a single selected persona
pub struct DetailView;

impl DetailView {
    /// Render the overlay over the full frame area
    pub fn render(frame: &mut Frame, area: Rect, persona: &Persona, palette: &Palette) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .title(Span::styled(
                persona.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.highlight))
            .style(Style::default().bg(palette.bg).fg(palette.fg));

        let mut lines = vec![
            Line::from(Span::styled(
                persona.category.as_str(),
                Style::default().fg(palette.accent),
            )),
            Line::from(""),
        ];
        for detail_line in persona.details.lines() {
            lines.push(Line::from(detail_line));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "y copy   p preview & copy   Esc close",
            Style::default().fg(palette.fg_dim),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, overlay);
    }
}
