//! Catalog Loading
//!
//! Catalogs come from one of three places:
//!
//! 1. The built-in catalog compiled into the binary ([`builtin`])
//! 2. A TOML file (`.toml`)
//! 3. A JSON file (`.json`)
//!
//! All three go through [`PatternCatalog::new`] so the same validation
//! applies regardless of source.
//!
//! # TOML Layout
//!
//! ```toml
//! [[categories]]
//! id = "creational"
//! name = "Creational Patterns"
//!
//! [[patterns]]
//! id = "singleton"
//! name = "Singleton"
//! category = "creational"
//! description = "Ensure a class has only one instance."
//!
//! [patterns.implementations.cppTraditional]
//! code = '''
//! class Singleton { ... };
//! '''
//! explanation = [{ line = 1, text = "Class declaration" }]
//! ```

use std::path::Path;

use crate::catalog::{CatalogDocument, CatalogError, PatternCatalog};

/// Built-in catalog source
const BUILTIN_CATALOG: &str = include_str!("../data/builtin.toml");

/// Load the built-in catalog
///
/// # Errors
///
/// Only fails if the embedded data is malformed, which the test suite guards.
pub fn builtin() -> Result<PatternCatalog, CatalogError> {
    from_toml_str(BUILTIN_CATALOG)
}

/// Parse a catalog from TOML text
///
/// # Errors
///
/// Returns an error on malformed TOML or a catalog that fails validation.
pub fn from_toml_str(source: &str) -> Result<PatternCatalog, CatalogError> {
    let doc: CatalogDocument = toml::from_str(source)?;
    PatternCatalog::from_document(doc)
}

/// Parse a catalog from JSON text
///
/// # Errors
///
/// Returns an error on malformed JSON or a catalog that fails validation.
pub fn from_json_str(source: &str) -> Result<PatternCatalog, CatalogError> {
    let doc: CatalogDocument = serde_json::from_str(source)?;
    PatternCatalog::from_document(doc)
}

/// Load a catalog file, picking the format from its extension
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or fails to parse or validate.
pub fn load_from_path(path: &Path) -> Result<PatternCatalog, CatalogError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<PatternCatalog, CatalogError> = match extension.as_deref() {
        Some("toml") => from_toml_str,
        Some("json") => from_json_str,
        _ => return Err(CatalogError::UnknownFormat(path.to_path_buf())),
    };

    let source = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let catalog = parse(&source)?;

    tracing::info!(
        path = %path.display(),
        categories = catalog.categories().len(),
        patterns = catalog.patterns().len(),
        "Loaded catalog from file"
    );

    Ok(catalog)
}

/// Load from `path` if given, otherwise the built-in catalog
///
/// # Errors
///
/// See [`load_from_path`] and [`builtin`].
pub fn load(path: Option<&Path>) -> Result<PatternCatalog, CatalogError> {
    match path {
        Some(path) => load_from_path(path),
        None => {
            let catalog = builtin()?;
            tracing::debug!(
                patterns = catalog.patterns().len(),
                "Using built-in catalog"
            );
            Ok(catalog)
        }
    }
}
