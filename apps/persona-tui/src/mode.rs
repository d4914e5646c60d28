//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the grid (default)
    #[default]
    Browse,
    /// Editing the search query (activated with /)
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Browse => write!(f, "BROWSE"),
            Mode::Search => write!(f, "SEARCH"),
        }
    }
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Browse => "BRO",
            Mode::Search => "SEA",
        }
    }
}
