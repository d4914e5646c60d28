//! Persona record and query matching
//!
//! A persona is a named conversational character profile: a stable key, a
//! display name, a one-line summary shown on the grid card, a category
//! label, and the long-form details shown in the detail overlay.

use serde::{Deserialize, Serialize};

/// Unique identifier for a persona, stable across the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonaKey(pub String);

impl PersonaKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonaKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonaKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A catalog entry describing a named conversational character profile
///
/// Field order is load-bearing: the exported JSON emits fields in
/// declaration order (key, name, short, category, details).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique identifier
    pub key: PersonaKey,
    /// Display title
    pub name: String,
    /// One-line summary shown on the grid card
    pub short: String,
    /// Classification label; the category list is derived from these
    pub category: String,
    /// Long-form description shown in the detail overlay and copyable
    pub details: String,
}

impl Persona {
    /// Create a new persona
    pub fn new(
        key: impl Into<PersonaKey>,
        name: impl Into<String>,
        short: impl Into<String>,
        category: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            short: short.into(),
            category: category.into(),
            details: details.into(),
        }
    }

    /// Check whether a lowercased query is a substring of any text field
    ///
    /// Matching is over `name`, `short`, and `details`; any one field
    /// matching is sufficient. An empty query matches every persona.
    /// Callers pass the query already trimmed and lowercased.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || self.name.to_lowercase().contains(query_lower)
            || self.short.to_lowercase().contains(query_lower)
            || self.details.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Persona {
        Persona::new(
            "tony",
            "Tony Stark (Iron Man)",
            "Sarcastic genius mentor with swagger.",
            "Mentor",
            "Tech metaphors, sharp wit, emotional depth hidden behind humor and confidence.",
        )
    }

    #[test]
    fn test_key_display() {
        let key = PersonaKey::new("tony");
        assert_eq!(key.to_string(), "tony");
        assert_eq!(key.as_str(), "tony");
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(sample().matches_query(""));
    }

    #[test]
    fn test_query_matches_each_field() {
        let persona = sample();
        assert!(persona.matches_query("iron man")); // name
        assert!(persona.matches_query("sarcastic")); // short
        assert!(persona.matches_query("tech metaphors")); // details
        assert!(!persona.matches_query("zzzzzz"));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        // Fields are lowercased before the substring check; the caller's
        // query is expected to already be lowercase.
        assert!(sample().matches_query("tony"));
        assert!(sample().matches_query("swagger"));
    }
}
