//! Catalog export
//!
//! Serializes the full catalog (never the filtered view) to pretty-printed
//! JSON and writes it out as `personas.json`. The catalog is static and
//! always serializable, so a serialization failure here indicates a
//! programming defect; it is still surfaced as a typed error rather than a
//! panic so callers can log it.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

/// Filename used for the exported catalog
pub const EXPORT_FILENAME: &str = "personas.json";

/// Errors from exporting the catalog
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize the full catalog as a pretty-printed (2-space indent) JSON array
///
/// Each element carries exactly the fields `key, name, short, category,
/// details`, in that order.
pub fn export_json(catalog: &Catalog) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(catalog.personas())?)
}

/// Write the exported catalog to `dir/personas.json`, returning the path
pub fn write_export(catalog: &Catalog, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, export_json(catalog)?)?;
    Ok(path)
}
