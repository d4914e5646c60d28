//! The filter engine
//!
//! Given the current search text and category choice, produces the ordered
//! subsequence of catalog entries matching both predicates. Filtering is a
//! pure function over the catalog: deterministic, stable, and
//! order-preserving. An empty result is a valid outcome, not an error.

use crate::catalog::{Catalog, ALL_CATEGORIES};
use crate::persona::Persona;

/// Current search text and category restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Free-text query; empty matches everything
    pub query: String,
    /// Category restriction; the "All" sentinel lifts it
    pub category: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl Filter {
    /// Filter with a query and no category restriction
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Filter with a category restriction and no query
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    /// True when neither predicate restricts the result
    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty() && self.category == ALL_CATEGORIES
    }

    /// Check whether a persona passes both predicates
    pub fn matches(&self, persona: &Persona) -> bool {
        let query = self.query.trim().to_lowercase();
        persona.matches_query(&query) && self.matches_category(persona)
    }

    /// The ordered subsequence of catalog entries passing both predicates
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Persona> {
        let query = self.query.trim().to_lowercase();
        catalog
            .iter()
            .filter(|p| p.matches_query(&query) && self.matches_category(p))
            .collect()
    }

    fn matches_category(&self, persona: &Persona) -> bool {
        self.category == ALL_CATEGORIES || persona.category == self.category
    }
}
