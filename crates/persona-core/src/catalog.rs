//! The persona catalog
//!
//! The catalog is the fixed, ordered list of all personas. It is built once
//! at startup (builtins, optionally extended by user-defined personas) and
//! never mutated afterwards; filtering and selection operate over read-only
//! borrows of it.

use std::path::Path;

use crate::builtin::builtin_personas;
use crate::loader::{load_user_personas, PersonaLoadError};
use crate::persona::{Persona, PersonaKey};

/// Sentinel category meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "All";

/// The fixed, ordered list of all personas
#[derive(Debug, Clone)]
pub struct Catalog {
    personas: Vec<Persona>,
}

impl Catalog {
    /// Catalog of builtin personas only
    pub fn builtin() -> Self {
        Self {
            personas: builtin_personas(),
        }
    }

    /// Builtins extended by user personas from the standard location
    ///
    /// User personas live in `~/.personas/personas/*.toml`. A user persona
    /// with a builtin's key replaces that entry in place (catalog order is
    /// preserved); new keys are appended in filename order. A missing
    /// directory yields the builtin catalog unchanged.
    pub fn load_standard() -> Result<Self, PersonaLoadError> {
        let mut catalog = Self::builtin();

        if let Some(home) = dirs::home_dir() {
            let user_dir = home.join(".personas").join("personas");
            if user_dir.is_dir() {
                catalog.merge(load_user_personas(&user_dir)?);
            }
        }

        Ok(catalog)
    }

    /// Builtins extended by user personas from an explicit directory
    pub fn load_with_user_dir(dir: &Path) -> Result<Self, PersonaLoadError> {
        let mut catalog = Self::builtin();
        if dir.is_dir() {
            catalog.merge(load_user_personas(dir)?);
        }
        Ok(catalog)
    }

    /// Merge user personas into the catalog, replacing by key
    fn merge(&mut self, user: Vec<Persona>) {
        for persona in user {
            match self.personas.iter_mut().find(|p| p.key == persona.key) {
                Some(existing) => *existing = persona,
                None => self.personas.push(persona),
            }
        }
    }

    /// All personas in catalog order
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// Iterate over personas in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    /// Look up a persona by key
    pub fn get(&self, key: &PersonaKey) -> Option<&Persona> {
        self.personas.iter().find(|p| &p.key == key)
    }

    /// Number of personas in the catalog
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Distinct category labels prefixed with the "All" sentinel
    ///
    /// Derived from the data on each call: every category present among
    /// personas, deduped preserving first-seen catalog order. Nothing is
    /// maintained separately, so the list can never go stale.
    pub fn categories(&self) -> Vec<String> {
        let mut distinct: Vec<String> = Vec::new();
        for persona in &self.personas {
            if !distinct.contains(&persona.category) {
                distinct.push(persona.category.clone());
            }
        }

        let mut categories = Vec::with_capacity(distinct.len() + 1);
        categories.push(ALL_CATEGORIES.to_string());
        categories.extend(distinct);
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 20);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.personas()[0].key.as_str(), "aisha");
    }

    #[test]
    fn test_get_by_key() {
        let catalog = Catalog::builtin();
        let tony = catalog.get(&PersonaKey::new("tony")).unwrap();
        assert_eq!(tony.name, "Tony Stark (Iron Man)");
        assert!(catalog.get(&PersonaKey::new("missing")).is_none());
    }

    #[test]
    fn test_categories_start_with_sentinel() {
        let catalog = Catalog::builtin();
        let categories = catalog.categories();
        assert_eq!(categories[0], ALL_CATEGORIES);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::builtin();
        let categories = catalog.categories();
        // First few personas are Companion, Playful, Mentor, Motivation
        assert_eq!(
            &categories[1..5],
            &["Companion", "Playful", "Mentor", "Motivation"]
        );
    }

    #[test]
    fn test_categories_deduped() {
        let catalog = Catalog::builtin();
        let categories = catalog.categories();
        for (i, c) in categories.iter().enumerate() {
            assert!(!categories[i + 1..].contains(c), "duplicate category {c}");
        }
        // Every persona's category appears in the derived list
        for persona in catalog.iter() {
            assert!(categories.contains(&persona.category));
        }
    }

    #[test]
    fn test_merge_replaces_in_place_and_appends() {
        let mut catalog = Catalog::builtin();
        let tony_index = catalog
            .personas()
            .iter()
            .position(|p| p.key.as_str() == "tony")
            .unwrap();

        catalog.merge(vec![
            Persona::new("tony", "Tony (Custom)", "Overridden.", "Mentor", "Custom details."),
            Persona::new("nova", "Nova", "Brand new.", "Playful", "Appended entry."),
        ]);

        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.personas()[tony_index].name, "Tony (Custom)");
        assert_eq!(catalog.personas().last().unwrap().key.as_str(), "nova");
    }

    #[test]
    fn test_load_with_missing_dir_is_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let catalog = Catalog::load_with_user_dir(&missing).unwrap();
        assert_eq!(catalog.len(), 20);
    }
}
