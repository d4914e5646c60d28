//! Persona Core - catalog, filtering, and export for the persona directory
//!
//! This crate provides the data layer for the persona directory:
//!
//! - **Persona**: the immutable catalog record (key, name, short, category, details)
//! - **Catalog**: the fixed ordered list of personas, builtin plus optional
//!   user-defined entries loaded once at startup
//! - **Filter**: case-insensitive text search and category restriction,
//!   stable and order-preserving over the catalog
//! - **Export**: pretty-printed JSON serialization of the full catalog
//! - **Loader**: TOML loader for user-defined personas
//!
//! The catalog is never mutated after construction; every derived view
//! (filtered list, category set) is recomputed as a pure function over it.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod persona;

pub use builtin::builtin_personas;
pub use catalog::{Catalog, ALL_CATEGORIES};
pub use error::{CoreError, Result};
pub use export::{export_json, write_export, ExportError, EXPORT_FILENAME};
pub use filter::Filter;
pub use loader::{load_persona_from_toml, load_user_personas, PersonaLoadError};
pub use persona::{Persona, PersonaKey};
