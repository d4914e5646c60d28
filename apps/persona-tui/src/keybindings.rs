//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter search mode
    EnterSearch,
    /// Move up one grid row
    MoveUp,
    /// Move down one grid row
    MoveDown,
    /// Move left one card
    MoveLeft,
    /// Move right one card
    MoveRight,
    /// Cycle to the next category filter
    NextCategory,
    /// Cycle to the previous category filter
    PrevCategory,
    /// Cycle the sort mode
    CycleSort,
    /// Open the detail overlay for the cursor persona
    OpenDetail,
    /// Copy the cursor persona's details (silent)
    CopyDetails,
    /// Copy the cursor persona's details with acknowledgment
    PreviewDetails,
    /// Export the full catalog to personas.json
    Export,
    /// Open the persona site in the default browser
    OpenLink,
    /// Toggle the dark/light theme
    ToggleTheme,
    /// Toggle the help overlay
    ToggleHelp,
}

/// Get the action for a key in browse mode
pub fn browse_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Tab | KeyCode::Char('c') => Some(Action::NextCategory),
        KeyCode::BackTab | KeyCode::Char('C') => Some(Action::PrevCategory),
        KeyCode::Char('s') => Some(Action::CycleSort),
        KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Char('y') => Some(Action::CopyDetails),
        KeyCode::Char('p') => Some(Action::PreviewDetails),
        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::Char('o') => Some(Action::OpenLink),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
