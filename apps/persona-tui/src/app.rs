//! Application state and rendering
//!
//! `App` is the view-state controller: it owns the immutable catalog plus
//! the mutable query, category choice, selection, and theme flag, and
//! re-derives the filtered view on every render. All transitions happen
//! synchronously in `handle_key`.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use persona_core::{write_export, Catalog, Filter, Persona, ALL_CATEGORIES};

use crate::clipboard::ClipboardHandle;
use crate::keybindings::{browse_action, Action};
use crate::mode::Mode;
use crate::theme::{self, Palette, Theme};
use crate::views::{centered_rect, DetailView, DirectoryView};
use crate::widgets::StatusBar;

/// Call-to-action URL, shown only via the open-link action
const OPEN_LINK: &str = "https://multi-persona-ai.vercel.app";

/// Acknowledgment shown by the preview action (the plain copy is silent)
const PREVIEW_ACK: &str = "Preview prompt copied to clipboard.";

/// Presentation ordering applied after filtering
///
/// Filtering itself always preserves catalog order; sorting is a separate
/// presentation step with catalog order as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Catalog order (default)
    #[default]
    Catalog,
    /// Alphabetical by display name
    Name,
    /// Grouped by category label
    Category,
}

impl SortMode {
    /// Cycle to the next sort mode
    pub fn next(self) -> Self {
        match self {
            SortMode::Catalog => SortMode::Name,
            SortMode::Name => SortMode::Category,
            SortMode::Category => SortMode::Catalog,
        }
    }

    /// Display label for the status bar
    pub fn name(self) -> &'static str {
        match self {
            SortMode::Catalog => "catalog",
            SortMode::Name => "name",
            SortMode::Category => "category",
        }
    }
}

/// Main application state
pub struct App {
    /// The catalog, read-only after startup
    catalog: Catalog,
    /// Current search text
    pub query: String,
    /// Index into `catalog.categories()` ("All" sentinel first)
    pub category_index: usize,
    /// Presentation sort applied after filtering
    pub sort: SortMode,
    /// Current interaction mode
    pub mode: Mode,
    /// The open detail overlay, if any
    pub selected: Option<Persona>,
    /// Grid cursor into the filtered view
    pub cursor: usize,
    /// Current theme flag (mirrored into the page-wide marker on toggle)
    pub theme: Theme,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Transient message for the bottom line
    pub status_message: Option<String>,
    /// Where the export action writes personas.json
    pub export_dir: PathBuf,
    clipboard: ClipboardHandle,
    /// Card columns from the last render, used for row navigation
    grid_columns: usize,
}

impl App {
    /// Create a new application instance over a catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            category_index: 0,
            sort: SortMode::default(),
            mode: Mode::default(),
            selected: None,
            cursor: 0,
            theme: theme::current(),
            show_help: false,
            status_message: None,
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            clipboard: ClipboardHandle::new(),
            grid_columns: 1,
        }
    }

    /// The catalog being browsed
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active category label
    pub fn current_category(&self) -> String {
        self.catalog
            .categories()
            .get(self.category_index)
            .cloned()
            .unwrap_or_else(|| ALL_CATEGORIES.to_string())
    }

    /// The filter derived from current view state
    pub fn filter(&self) -> Filter {
        Filter {
            query: self.query.clone(),
            category: self.current_category(),
        }
    }

    /// The filtered (and presentation-sorted) view, recomputed on demand
    pub fn filtered(&self) -> Vec<&Persona> {
        let mut personas = self.filter().apply(&self.catalog);
        match self.sort {
            SortMode::Catalog => {}
            SortMode::Name => personas.sort_by(|a, b| a.name.cmp(&b.name)),
            SortMode::Category => personas.sort_by(|a, b| a.category.cmp(&b.category)),
        }
        personas
    }

    /// Render the application
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let palette = theme::current().palette();

        // Page-wide background follows the shared dark-mode marker
        frame
            .buffer_mut()
            .set_style(area, Style::default().bg(palette.bg).fg(palette.fg));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(3), // Search input
                Constraint::Min(0),    // Card grid
                Constraint::Length(1), // Message line
            ])
            .split(area);

        self.grid_columns = DirectoryView::columns(chunks[2].width);
        let filtered = self.filtered();

        frame.render_widget(
            StatusBar {
                mode: self.mode,
                shown: filtered.len(),
                total: self.catalog.len(),
                category: &self.current_category(),
                sort: self.sort,
                theme: self.theme,
            },
            chunks[0],
        );

        self.render_search_bar(frame, chunks[1], &palette);
        DirectoryView::render(frame, chunks[2], &filtered, self.cursor, &palette);
        self.render_message_line(frame, chunks[3], &palette);

        if let Some(persona) = &self.selected {
            DetailView::render(frame, area, persona, &palette);
        }

        if self.show_help {
            self.render_help_overlay(frame, area, &palette);
        }
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let active = self.mode == Mode::Search;
        let border_style = if active {
            Style::default().fg(palette.highlight)
        } else {
            Style::default().fg(palette.card_border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search");

        let paragraph = if self.query.is_empty() && !active {
            Paragraph::new(Span::styled(
                "Search personas... (press /)",
                Style::default().fg(palette.fg_dim),
            ))
        } else {
            let mut content = self.query.clone();
            if active {
                content.push('_');
            }
            Paragraph::new(content)
        };

        frame.render_widget(paragraph.block(block), area);
    }

    fn render_message_line(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let content = self
            .status_message
            .clone()
            .unwrap_or_else(|| "Press ? for help | o opens the persona site".to_string());
        let paragraph = Paragraph::new(content).style(Style::default().fg(palette.fg_dim));
        frame.render_widget(paragraph, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let help_text = r#"
Persona Directory - Help

Navigation:
  h/j/k/l, arrows - Move between cards
  Enter           - Open persona details
  Esc             - Close an open overlay

Filtering:
  /               - Edit the search query (Esc/Enter to finish)
  Tab / c         - Next category
  Shift-Tab / C   - Previous category
  s               - Cycle sort (catalog/name/category)

Actions:
  y - Copy persona details to clipboard
  p - Copy details and show acknowledgment
  e - Export the catalog to personas.json
  o - Open the persona site in a browser
  t - Toggle dark mode
  ? - Toggle this help
  q - Quit
"#;

        let overlay = centered_rect(60, 85, area);
        frame.render_widget(Clear, overlay);
        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(palette.bg).fg(palette.fg));
        frame.render_widget(Paragraph::new(help_text).block(block), overlay);
    }

    /// Handle a key press, returns true if the app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }

        if self.show_help {
            if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return false;
        }

        if self.selected.is_some() {
            return self.handle_overlay_key(code);
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(code),
            Mode::Search => self.handle_search_key(code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = browse_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterSearch => {
                self.mode = Mode::Search;
            }
            Action::MoveUp => self.move_cursor(-(self.grid_columns as isize)),
            Action::MoveDown => self.move_cursor(self.grid_columns as isize),
            Action::MoveLeft => self.move_cursor(-1),
            Action::MoveRight => self.move_cursor(1),
            Action::NextCategory => self.cycle_category(1),
            Action::PrevCategory => self.cycle_category(-1),
            Action::CycleSort => {
                self.sort = self.sort.next();
                self.status_message = Some(format!("Sort: {}", self.sort.name()));
            }
            Action::OpenDetail => {
                if let Some(persona) = self.cursor_persona() {
                    self.open_detail(persona);
                }
            }
            Action::CopyDetails => self.copy_cursor_details(false),
            Action::PreviewDetails => self.copy_cursor_details(true),
            Action::Export => self.export_catalog(),
            Action::OpenLink => self.open_link(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleHelp => self.show_help = true,
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.cursor = 0;
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.cursor = 0;
            }
            _ => {}
        }
        false
    }

    fn handle_overlay_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.selected = None;
            }
            KeyCode::Char('y') => self.copy_selected_details(false),
            KeyCode::Char('p') => self.copy_selected_details(true),
            _ => {}
        }
        false
    }

    /// The persona under the grid cursor, if any
    fn cursor_persona(&self) -> Option<Persona> {
        self.filtered().get(self.cursor).map(|p| (*p).clone())
    }

    /// Open the detail overlay, atomically replacing any prior selection
    fn open_detail(&mut self, persona: Persona) {
        self.selected = Some(persona);
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1) as isize;
        self.cursor = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    fn cycle_category(&mut self, step: isize) {
        let categories = self.catalog.categories();
        let len = categories.len() as isize;
        self.category_index = (self.category_index as isize + step).rem_euclid(len) as usize;
        self.cursor = 0;
        self.status_message = Some(format!("Category: {}", categories[self.category_index]));
    }

    fn copy_cursor_details(&mut self, acknowledge: bool) {
        let Some(persona) = self.cursor_persona() else {
            return;
        };
        self.clipboard.copy(&persona.details);
        if acknowledge {
            self.status_message = Some(PREVIEW_ACK.to_string());
        }
    }

    fn copy_selected_details(&mut self, acknowledge: bool) {
        let details = match &self.selected {
            Some(persona) => persona.details.clone(),
            None => return,
        };
        self.clipboard.copy(&details);
        if acknowledge {
            self.status_message = Some(PREVIEW_ACK.to_string());
        }
    }

    /// Export the full catalog, independent of the current filter
    fn export_catalog(&mut self) {
        match write_export(&self.catalog, &self.export_dir) {
            Ok(path) => {
                debug!("exported catalog to {}", path.display());
                self.status_message = Some(format!("Exported {}", path.display()));
            }
            Err(err) => {
                // Best-effort side effect: log it, keep the UI quiet
                warn!("catalog export failed: {err}");
            }
        }
    }

    fn open_link(&mut self) {
        if let Err(err) = open::that(OPEN_LINK) {
            warn!("failed to open {OPEN_LINK}: {err}");
        }
        self.status_message = Some(format!("Opening {OPEN_LINK}"));
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        // The single writer of the page-wide marker
        theme::set_dark(self.theme.is_dark());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn type_query(app: &mut App, query: &str) {
        press(app, KeyCode::Char('/'));
        for c in query.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Esc);
    }

    #[test]
    fn test_default_state_shows_whole_catalog() {
        let app = app();
        assert!(app.query.is_empty());
        assert_eq!(app.current_category(), ALL_CATEGORIES);
        assert!(app.selected.is_none());
        assert_eq!(app.filtered().len(), app.catalog().len());
    }

    #[test]
    fn test_search_mode_edits_query() {
        let mut app = app();
        type_query(&mut app, "tony");

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.query, "tony");
        let filtered = app.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key.as_str(), "tony");
    }

    #[test]
    fn test_typing_q_in_search_does_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.query, "q");
    }

    #[test]
    fn test_backspace_edits_query_and_resets_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.query, "a");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_category_cycling() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_category(), "Companion");
        let filtered = app.filtered();
        assert!(filtered.iter().all(|p| p.category == "Companion"));
        assert_eq!(filtered.len(), 2); // aisha, ava

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_category(), ALL_CATEGORIES);

        // Wraps around backwards to the last category
        press(&mut app, KeyCode::BackTab);
        let categories = app.catalog().categories();
        assert_eq!(app.current_category(), *categories.last().unwrap());
    }

    #[test]
    fn test_selection_opens_replaces_and_clears() {
        let mut app = app();

        press(&mut app, KeyCode::Enter);
        let first = app.selected.clone().unwrap();
        assert_eq!(first.key.as_str(), "aisha");

        // Opening another persona replaces the selection atomically
        let other = app.catalog().personas()[1].clone();
        app.open_detail(other.clone());
        assert_eq!(app.selected.as_ref().unwrap().key, other.key);

        press(&mut app, KeyCode::Esc);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_enter_on_empty_result_selects_nothing() {
        let mut app = app();
        type_query(&mut app, "zzzzzz");
        assert!(app.filtered().is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_overlay_swallows_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 0);
        assert!(app.selected.is_some());
        // q closes the overlay instead of quitting
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_cursor_clamps_to_filtered_len() {
        let mut app = app();
        for _ in 0..100 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, app.filtered().len() - 1);

        type_query(&mut app, "tony");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_sort_modes_cycle_and_order() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, SortMode::Name);
        let names: Vec<_> = app.filtered().iter().map(|p| p.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, SortMode::Category);
        let categories: Vec<_> = app.filtered().iter().map(|p| p.category.clone()).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, SortMode::Catalog);
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut app = app();
        let original_theme = app.theme;
        let original_marker = theme::is_dark();

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, original_theme.toggled());
        assert_eq!(theme::is_dark(), app.theme.is_dark());

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, original_theme);
        assert_eq!(theme::is_dark(), original_marker);
    }

    #[test]
    fn test_export_writes_full_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        app.export_dir = dir.path().to_path_buf();

        // Narrow the view first; the export must still cover everything
        type_query(&mut app, "tony");
        press(&mut app, KeyCode::Char('e'));

        let content = std::fs::read_to_string(dir.path().join("personas.json")).unwrap();
        let decoded: Vec<Persona> = serde_json::from_str(&content).unwrap();
        assert_eq!(decoded.len(), app.catalog().len());
        assert!(app.status_message.as_deref().unwrap().contains("Exported"));
    }

    #[test]
    fn test_preview_acknowledges_copy_stays_silent() {
        let mut app = app();

        press(&mut app, KeyCode::Char('y'));
        assert!(app.status_message.is_none());

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.status_message.as_deref(), Some(PREVIEW_ACK));
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // Other keys are swallowed while help is open
        assert!(!press(&mut app, KeyCode::Char('j')));
        assert!(app.show_help);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    fn render_to_text(app: &mut App) -> String {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_grid_renders_cards() {
        let mut app = app();
        let text = render_to_text(&mut app);
        assert!(text.contains("Aisha (Professional Admin)"));
        assert!(text.contains("20/20 personas"));
    }

    #[test]
    fn test_empty_result_renders_explicit_empty_state() {
        let mut app = app();
        type_query(&mut app, "zzzzzz");
        let text = render_to_text(&mut app);
        assert!(text.contains("No personas match your search."));
        assert!(text.contains("0/20 personas"));
    }

    #[test]
    fn test_detail_overlay_renders_selected_persona() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let text = render_to_text(&mut app);
        assert!(text.contains("Balanced tone, light wit"));
        assert!(text.contains("Esc close"));
    }
}
