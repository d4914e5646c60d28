//! The directory grid
//!
//! Renders the filtered catalog as a grid of cards: name, category tag, and
//! one-line summary per card, with the cursor card highlighted. Zero matches
//! renders an explicit empty state rather than a silent empty grid.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use persona_core::Persona;

use crate::theme::Palette;

/// Minimum width of a card column
const CARD_MIN_WIDTH: u16 = 34;
/// Height of a card including its border
const CARD_HEIGHT: u16 = 5;

/// The card grid over the filtered catalog
pub struct DirectoryView;

impl DirectoryView {
    /// Number of card columns that fit in the given width
    pub fn columns(width: u16) -> usize {
        (width / CARD_MIN_WIDTH).max(1) as usize
    }

    /// Render the grid, scrolled so the cursor card stays visible
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        personas: &[&Persona],
        cursor: usize,
        palette: &Palette,
    ) {
        if personas.is_empty() {
            Self::render_empty(frame, area, palette);
            return;
        }

        let columns = Self::columns(area.width);
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let cursor_row = cursor.min(personas.len() - 1) / columns;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);

        let mut constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
        constraints.push(Constraint::Min(0));
        let row_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for visible in 0..visible_rows {
            let row = first_row + visible;
            let col_rects = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_rects[visible]);

            for col in 0..columns {
                let index = row * columns + col;
                if let Some(persona) = personas.get(index) {
                    Self::render_card(frame, col_rects[col], persona, index == cursor, palette);
                }
            }
        }
    }

    fn render_card(
        frame: &mut Frame,
        area: Rect,
        persona: &Persona,
        is_cursor: bool,
        palette: &Palette,
    ) {
        let border_style = if is_cursor {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.card_border)
        };

        let lines = vec![
            Line::from(Span::styled(
                persona.name.as_str(),
                Style::default()
                    .fg(palette.fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                persona.category.as_str(),
                Style::default().fg(palette.accent),
            )),
            Line::from(Span::styled(
                persona.short.as_str(),
                Style::default().fg(palette.fg_dim),
            )),
        ];

        let card = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .wrap(Wrap { trim: true });
        frame.render_widget(card, area);
    }

    fn render_empty(frame: &mut Frame, area: Rect, palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let message = Paragraph::new("No personas match your search.")
            .style(Style::default().fg(palette.fg_dim))
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_scale_with_width() {
        assert_eq!(DirectoryView::columns(0), 1);
        assert_eq!(DirectoryView::columns(33), 1);
        assert_eq!(DirectoryView::columns(34), 1);
        assert_eq!(DirectoryView::columns(68), 2);
        assert_eq!(DirectoryView::columns(140), 4);
    }
}
