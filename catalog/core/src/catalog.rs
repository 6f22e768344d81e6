//! Pattern Catalog
//!
//! The typed content table the browser renders from. A catalog holds the
//! category list and the pattern records, both in their authored order, plus
//! id indexes so lookups return `Option` instead of probing by string key.
//!
//! # Invariants
//!
//! A [`PatternCatalog`] can only be built through [`PatternCatalog::new`],
//! which guarantees:
//!
//! - at least one category exists
//! - category ids and pattern ids are unique
//! - every pattern references an existing category
//!
//! The catalog is immutable once built and lives for the whole session.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Identifiers
// =============================================================================

/// Pattern identifier (e.g. `"singleton"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(pub String);

impl PatternId {
    /// Create a pattern ID from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PatternId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Category identifier (e.g. `"creational"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Create a category ID from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Records
// =============================================================================

/// An implementation variant of a pattern
///
/// `CppTraditional` is the baseline every pattern view attempts to render.
/// Declaration order is the display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Pre-C++11 style
    CppTraditional,
    /// C++11 and later
    CppModern,
    /// Java rendition
    Java,
}

impl Variant {
    /// All variants in display order
    pub const ALL: [Variant; 3] = [Variant::CppTraditional, Variant::CppModern, Variant::Java];

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Variant::CppTraditional => "Traditional C++",
            Variant::CppModern => "Modern C++",
            Variant::Java => "Java",
        }
    }

    /// Catalog key for this variant
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Variant::CppTraditional => "cppTraditional",
            Variant::CppModern => "cppModern",
            Variant::Java => "java",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A category of patterns
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Unique category ID
    pub id: CategoryId,
    /// Display name
    pub name: String,
    /// Optional blurb shown under the category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Explanation attached to one source line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// 1-based line number into the implementation's code
    pub line: u32,
    /// Explanatory text
    pub text: String,
}

/// One code sample of a pattern
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    /// Source sample
    pub code: String,
    /// Sparse per-line explanations
    #[serde(default)]
    pub explanation: Vec<Explanation>,
}

/// Background material for a pattern
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theory {
    /// Where the pattern comes from
    pub background: String,
    /// Problem it addresses
    pub problem: String,
    /// How it solves the problem
    pub solution: String,
    /// When to apply it
    pub applicability: Vec<String>,
    /// Trade-offs of using it
    pub consequences: Vec<String>,
}

/// One row of a comparison table
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// Aspect being compared
    pub title: String,
    /// Traditional C++ value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpp_traditional: Option<String>,
    /// Modern C++ value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpp_modern: Option<String>,
    /// Java value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<String>,
}

impl ComparisonRow {
    /// Value for a variant, if the row has one
    #[must_use]
    pub fn value(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::CppTraditional => self.cpp_traditional.as_deref(),
            Variant::CppModern => self.cpp_modern.as_deref(),
            Variant::Java => self.java.as_deref(),
        }
    }
}

/// A catalog entry describing one pattern or concept
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Unique pattern ID
    pub id: PatternId,
    /// Display name
    pub name: String,
    /// Owning category
    pub category: CategoryId,
    /// Summary text
    #[serde(default)]
    pub description: String,
    /// Background material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theory: Option<Theory>,
    /// Code samples by variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementations: Option<BTreeMap<Variant, Implementation>>,
    /// Comparison table rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<ComparisonRow>>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PatternRecord {
    /// Implementation for a variant, if present
    #[must_use]
    pub fn implementation(&self, variant: Variant) -> Option<&Implementation> {
        self.implementations.as_ref()?.get(&variant)
    }

    /// Whether the name, id or description contains `needle` (already lowercased)
    fn matches(&self, needle: &str) -> bool {
        self.id.as_str().to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported catalog format: {0}")]
    UnknownFormat(PathBuf),

    /// Catalog has no categories
    #[error("Catalog contains no categories")]
    Empty,

    /// Two categories share an id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    /// Two patterns share an id
    #[error("Duplicate pattern id: {0}")]
    DuplicatePattern(PatternId),

    /// A pattern references a category that does not exist
    #[error("Pattern {pattern} references unknown category {category}")]
    UnknownCategory {
        /// The offending pattern
        pattern: PatternId,
        /// The missing category
        category: CategoryId,
    },
}

// =============================================================================
// Catalog
// =============================================================================

/// Serialized shape of a catalog file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    /// Categories in display order
    pub categories: Vec<CategoryRecord>,
    /// Patterns in display order
    pub patterns: Vec<PatternRecord>,
}

/// Immutable, validated catalog of categories and patterns
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    categories: Vec<CategoryRecord>,
    patterns: Vec<PatternRecord>,
    category_index: HashMap<CategoryId, usize>,
    pattern_index: HashMap<PatternId, usize>,
}

impl PatternCatalog {
    /// Build and validate a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if there are no categories, ids collide, or a pattern
    /// references a missing category.
    pub fn new(
        categories: Vec<CategoryRecord>,
        patterns: Vec<PatternRecord>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut category_index = HashMap::with_capacity(categories.len());
        for (idx, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut pattern_index = HashMap::with_capacity(patterns.len());
        for (idx, pattern) in patterns.iter().enumerate() {
            if !category_index.contains_key(&pattern.category) {
                return Err(CatalogError::UnknownCategory {
                    pattern: pattern.id.clone(),
                    category: pattern.category.clone(),
                });
            }
            if pattern_index.insert(pattern.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicatePattern(pattern.id.clone()));
            }
        }

        Ok(Self {
            categories,
            patterns,
            category_index,
            pattern_index,
        })
    }

    /// Build from a deserialized document
    ///
    /// # Errors
    ///
    /// See [`PatternCatalog::new`].
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        Self::new(doc.categories, doc.patterns)
    }

    /// Convert back into a serializable document
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            categories: self.categories.clone(),
            patterns: self.patterns.clone(),
        }
    }

    /// All categories in catalog order
    #[must_use]
    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    /// All patterns in catalog order
    #[must_use]
    pub fn patterns(&self) -> &[PatternRecord] {
        &self.patterns
    }

    /// The first category (always present)
    #[must_use]
    pub fn first_category(&self) -> &CategoryRecord {
        &self.categories[0]
    }

    /// Look up a category
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&CategoryRecord> {
        self.category_index.get(id).map(|&idx| &self.categories[idx])
    }

    /// Display name for a category
    #[must_use]
    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    /// Position of a category in catalog order
    #[must_use]
    pub fn category_position(&self, id: &CategoryId) -> Option<usize> {
        self.category_index.get(id).copied()
    }

    /// Look up a pattern
    #[must_use]
    pub fn pattern(&self, id: &PatternId) -> Option<&PatternRecord> {
        self.pattern_index.get(id).map(|&idx| &self.patterns[idx])
    }

    /// Patterns belonging to a category, in catalog order
    pub fn patterns_in<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = &'a PatternRecord> + 'a {
        self.patterns.iter().filter(move |p| &p.category == category)
    }

    /// First pattern (catalog order) of a category
    #[must_use]
    pub fn first_in<'a>(&'a self, category: &CategoryId) -> Option<&'a PatternRecord> {
        self.patterns.iter().find(|p| &p.category == category)
    }

    /// Whether a pattern belongs to a category
    #[must_use]
    pub fn belongs_to(&self, pattern: &PatternId, category: &CategoryId) -> bool {
        self.pattern(pattern)
            .is_some_and(|p| &p.category == category)
    }

    /// Case-insensitive search over id, name and description
    ///
    /// An empty or whitespace-only query matches every pattern.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&PatternRecord> {
        let needle = query.trim().to_lowercase();
        self.patterns
            .iter()
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .collect()
    }

    /// [`PatternCatalog::search`] restricted to one category
    #[must_use]
    pub fn search_in<'a>(&'a self, category: &CategoryId, query: &str) -> Vec<&'a PatternRecord> {
        let needle = query.trim().to_lowercase();
        self.patterns
            .iter()
            .filter(|p| &p.category == category)
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::new(id),
            name: name.to_string(),
            description: None,
        }
    }

    fn pattern(id: &str, name: &str, category: &str) -> PatternRecord {
        PatternRecord {
            id: PatternId::new(id),
            name: name.to_string(),
            category: CategoryId::new(category),
            description: format!("{name} description"),
            theory: None,
            implementations: None,
            comparisons: None,
            notes: None,
        }
    }

    fn sample() -> PatternCatalog {
        PatternCatalog::new(
            vec![
                category("creational", "Creational"),
                category("behavioral", "Behavioral"),
                category("empty", "Nothing Here"),
            ],
            vec![
                pattern("singleton", "Singleton", "creational"),
                pattern("visitor", "Visitor", "behavioral"),
                pattern("factory-method", "Factory Method", "creational"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample();
        assert_eq!(
            catalog.pattern(&"visitor".into()).map(|p| p.name.as_str()),
            Some("Visitor")
        );
        assert_eq!(catalog.category_name(&"creational".into()), Some("Creational"));
        assert!(catalog.pattern(&"nope".into()).is_none());
        assert!(catalog.category(&"nope".into()).is_none());
    }

    #[test]
    fn test_patterns_in_preserves_catalog_order() {
        let catalog = sample();
        let creational = CategoryId::new("creational");
        let ids: Vec<_> = catalog
            .patterns_in(&creational)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["singleton", "factory-method"]);
        assert_eq!(
            catalog.first_in(&creational).map(|p| p.id.as_str()),
            Some("singleton")
        );
        assert!(catalog.first_in(&"empty".into()).is_none());
    }

    #[test]
    fn test_belongs_to() {
        let catalog = sample();
        assert!(catalog.belongs_to(&"singleton".into(), &"creational".into()));
        assert!(!catalog.belongs_to(&"singleton".into(), &"behavioral".into()));
        assert!(!catalog.belongs_to(&"ghost".into(), &"creational".into()));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let result = PatternCatalog::new(vec![], vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = PatternCatalog::new(
            vec![category("creational", "Creational")],
            vec![pattern("visitor", "Visitor", "behavioral")],
        );
        match result {
            Err(CatalogError::UnknownCategory { pattern, category }) => {
                assert_eq!(pattern.as_str(), "visitor");
                assert_eq!(category.as_str(), "behavioral");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let dup_category = PatternCatalog::new(
            vec![category("a", "A"), category("a", "Again")],
            vec![],
        );
        assert!(matches!(dup_category, Err(CatalogError::DuplicateCategory(_))));

        let dup_pattern = PatternCatalog::new(
            vec![category("a", "A")],
            vec![pattern("p", "P", "a"), pattern("p", "P2", "a")],
        );
        assert!(matches!(dup_pattern, Err(CatalogError::DuplicatePattern(_))));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample();
        let hits: Vec<_> = catalog.search("FACTORY").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(hits, vec!["factory-method"]);

        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("   ").len(), 3);
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_search_in_category() {
        let catalog = sample();
        let hits = catalog.search_in(&"behavioral".into(), "description");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "visitor");
    }

    #[test]
    fn test_lookups_outlive_category_id() {
        let catalog = sample();
        let first = {
            let id = CategoryId::new("creational");
            catalog.first_in(&id)
        };
        let hits = {
            let id = CategoryId::new("creational");
            catalog.search_in(&id, "method")
        };
        assert_eq!(first.map(|p| p.id.as_str()), Some("singleton"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "factory-method");
    }

    #[test]
    fn test_comparison_row_value() {
        let row = ComparisonRow {
            title: "Memory".to_string(),
            cpp_traditional: Some("manual".to_string()),
            cpp_modern: Some("RAII".to_string()),
            java: None,
        };
        assert_eq!(row.value(Variant::CppTraditional), Some("manual"));
        assert_eq!(row.value(Variant::CppModern), Some("RAII"));
        assert_eq!(row.value(Variant::Java), None);
    }

    #[test]
    fn test_variant_keys_match_serde() {
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.key()));
        }
    }

    #[test]
    fn test_implementation_lookup_tolerates_missing_map() {
        let catalog = sample();
        let singleton = catalog.pattern(&"singleton".into()).unwrap();
        assert!(singleton.implementation(Variant::CppTraditional).is_none());
    }
}
