//! TOML loader for user-defined personas
//!
//! Loads personas from `*.toml` files with the following structure:
//!
//! ```toml
//! [persona]
//! key = "custom"
//! name = "Custom Persona"
//! short = "One-line summary."
//! category = "Companion"
//! details = """
//! Long-form description shown in the detail overlay.
//! """
//! ```
//!
//! Every field except `details` is required; a persona without details gets
//! an empty string. Files in a directory are loaded in sorted filename order
//! so the resulting catalog order is deterministic.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::persona::{Persona, PersonaKey};

/// Errors that can occur when loading a persona from TOML
#[derive(Debug, thiserror::Error)]
pub enum PersonaLoadError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Persona in {0} has an empty key")]
    EmptyKey(String),

    #[error("Duplicate persona key in user directory: {0}")]
    DuplicateKey(String),
}

/// TOML representation of a persona
#[derive(Debug, Deserialize)]
struct TomlPersona {
    key: String,
    name: String,
    short: String,
    category: String,
    #[serde(default)]
    details: String,
}

/// Full TOML persona document
#[derive(Debug, Deserialize)]
struct TomlPersonaFile {
    persona: TomlPersona,
}

/// Load a single persona from a TOML file
pub fn load_persona_from_toml(path: &Path) -> Result<Persona, PersonaLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| PersonaLoadError::Io(e.to_string()))?;

    let file: TomlPersonaFile =
        toml::from_str(&content).map_err(|e| PersonaLoadError::Parse(e.to_string()))?;

    let toml = file.persona;
    if toml.key.trim().is_empty() {
        return Err(PersonaLoadError::EmptyKey(
            path.to_string_lossy().to_string(),
        ));
    }

    Ok(Persona {
        key: PersonaKey::new(toml.key),
        name: toml.name,
        short: toml.short,
        category: toml.category,
        details: toml.details,
    })
}

/// Load every `*.toml` persona in a directory, in sorted filename order
///
/// Duplicate keys within the directory are rejected; replacing a builtin
/// by reusing its key is resolved later, at catalog merge time.
pub fn load_user_personas(dir: &Path) -> Result<Vec<Persona>, PersonaLoadError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| PersonaLoadError::Io(e.to_string()))? {
        let entry = entry.map_err(|e| PersonaLoadError::Io(e.to_string()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut personas = Vec::new();
    let mut seen: HashSet<PersonaKey> = HashSet::new();
    for path in paths {
        let persona = load_persona_from_toml(&path)?;
        if !seen.insert(persona.key.clone()) {
            return Err(PersonaLoadError::DuplicateKey(persona.key.to_string()));
        }
        personas.push(persona);
    }

    Ok(personas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_toml(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_full_persona() {
        let toml = r#"
[persona]
key = "custom"
name = "Custom Persona"
short = "One-line summary."
category = "Companion"
details = "Long-form description."
"#;

        let file = write_temp_toml(toml);
        let persona = load_persona_from_toml(file.path()).unwrap();

        assert_eq!(persona.key.as_str(), "custom");
        assert_eq!(persona.name, "Custom Persona");
        assert_eq!(persona.short, "One-line summary.");
        assert_eq!(persona.category, "Companion");
        assert_eq!(persona.details, "Long-form description.");
    }

    #[test]
    fn test_details_default_to_empty() {
        let toml = r#"
[persona]
key = "terse"
name = "Terse"
short = "Minimal."
category = "Stoic"
"#;

        let file = write_temp_toml(toml);
        let persona = load_persona_from_toml(file.path()).unwrap();
        assert!(persona.details.is_empty());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let toml = r#"
[persona]
key = "broken"
name = "Broken"
"#;

        let file = write_temp_toml(toml);
        let result = load_persona_from_toml(file.path());
        assert!(matches!(result, Err(PersonaLoadError::Parse(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let toml = r#"
[persona]
key = "  "
name = "Nameless"
short = "s"
category = "c"
"#;

        let file = write_temp_toml(toml);
        let result = load_persona_from_toml(file.path());
        assert!(matches!(result, Err(PersonaLoadError::EmptyKey(_))));
    }

    #[test]
    fn test_directory_load_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, key: &str| {
            let body = format!(
                "[persona]\nkey = \"{key}\"\nname = \"N\"\nshort = \"s\"\ncategory = \"c\"\n"
            );
            std::fs::write(dir.path().join(name), body).unwrap();
        };
        write("b.toml", "beta");
        write("a.toml", "alpha");
        // Non-TOML files are ignored
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let personas = load_user_personas(dir.path()).unwrap();
        let keys: Vec<_> = personas.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_directory_duplicate_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.toml", "b.toml"] {
            std::fs::write(
                dir.path().join(name),
                "[persona]\nkey = \"same\"\nname = \"N\"\nshort = \"s\"\ncategory = \"c\"\n",
            )
            .unwrap();
        }

        let result = load_user_personas(dir.path());
        assert!(matches!(result, Err(PersonaLoadError::DuplicateKey(_))));
    }
}
