//! Error types for persona-core

use thiserror::Error;

use crate::export::ExportError;
use crate::loader::PersonaLoadError;

/// Result type alias for persona-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for persona-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Loading user-defined personas failed
    #[error("Persona load error: {0}")]
    Load(#[from] PersonaLoadError),

    /// Exporting the catalog failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
