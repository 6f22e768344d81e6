//! Selection State
//!
//! Tracks which category and pattern the user is looking at and which
//! alternative variant is shown next to the baseline.
//!
//! # Invariant
//!
//! If a pattern is selected, it belongs to the selected category.
//!
//! - [`SelectionState::select_category`] re-points the pattern at the first
//!   pattern of the new category when the current one doesn't belong there
//!   (or clears it when the category is empty).
//! - [`SelectionState::select_pattern`] moves the category to the pattern's
//!   category, so picking a pattern from anywhere (search results, CLI flags)
//!   keeps the two in sync.
//!
//! Unknown ids are ignored. Nothing here returns an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CategoryId, PatternCatalog, PatternId, Variant};
use crate::events::BrowserEvent;

/// Which variant is shown next to the traditional C++ baseline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMode {
    /// Compare against modern C++
    #[default]
    CppModern,
    /// Compare against Java
    Java,
}

impl ComparisonMode {
    /// Both modes in toggle order
    pub const ALL: [ComparisonMode; 2] = [ComparisonMode::CppModern, ComparisonMode::Java];

    /// The implementation variant this mode selects
    #[must_use]
    pub fn variant(self) -> Variant {
        match self {
            ComparisonMode::CppModern => Variant::CppModern,
            ComparisonMode::Java => Variant::Java,
        }
    }

    /// The other mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ComparisonMode::CppModern => ComparisonMode::Java,
            ComparisonMode::Java => ComparisonMode::CppModern,
        }
    }

    /// Catalog key (`cppModern` / `java`)
    #[must_use]
    pub fn key(self) -> &'static str {
        self.variant().key()
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        self.variant().label()
    }

    /// Parse a mode key, case-insensitively
    ///
    /// Accepts `cppModern`, `modern` and `java`. Anything else is `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cppmodern" | "modern" => Some(ComparisonMode::CppModern),
            "java" => Some(ComparisonMode::Java),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Current category, pattern and comparison mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    category: CategoryId,
    pattern: Option<PatternId>,
    mode: ComparisonMode,
}

impl SelectionState {
    /// Start on the first category and its first pattern
    #[must_use]
    pub fn new(catalog: &PatternCatalog) -> Self {
        let category = catalog.first_category().id.clone();
        let pattern = catalog.first_in(&category).map(|p| p.id.clone());
        Self {
            category,
            pattern,
            mode: ComparisonMode::default(),
        }
    }

    /// Start from configured defaults, falling back to [`SelectionState::new`]
    ///
    /// A known `pattern` wins over `category` since selecting it also moves
    /// the category. Unknown ids are logged and skipped.
    #[must_use]
    pub fn with_defaults(
        catalog: &PatternCatalog,
        category: Option<&str>,
        pattern: Option<&str>,
        mode: ComparisonMode,
    ) -> Self {
        let mut state = Self::new(catalog);
        state.mode = mode;

        if let Some(id) = category.map(CategoryId::new) {
            if catalog.category(&id).is_some() {
                state.select_category(catalog, &id);
            } else {
                tracing::warn!(category = %id, "Unknown default category, using first");
            }
        }

        if let Some(id) = pattern.map(PatternId::new) {
            if catalog.pattern(&id).is_some() {
                state.select_pattern(catalog, &id);
            } else {
                tracing::warn!(pattern = %id, "Unknown default pattern, ignoring");
            }
        }

        state
    }

    /// Selected category
    #[must_use]
    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    /// Selected pattern, if any
    #[must_use]
    pub fn pattern(&self) -> Option<&PatternId> {
        self.pattern.as_ref()
    }

    /// Active comparison mode
    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Select a category
    ///
    /// Returns `true` if anything changed.
    pub fn select_category(&mut self, catalog: &PatternCatalog, id: &CategoryId) -> bool {
        if catalog.category(id).is_none() {
            debug!(category = %id, "Ignoring unknown category");
            return false;
        }

        let before = (self.category.clone(), self.pattern.clone());
        self.category = id.clone();

        let still_valid = self
            .pattern
            .as_ref()
            .is_some_and(|p| catalog.belongs_to(p, id));
        if !still_valid {
            self.pattern = catalog.first_in(id).map(|p| p.id.clone());
        }

        let changed = before != (self.category.clone(), self.pattern.clone());
        if changed {
            debug!(
                category = %self.category,
                pattern = ?self.pattern.as_ref().map(PatternId::as_str),
                "Category selected"
            );
        }
        changed
    }

    /// Select a pattern, moving the category along with it
    ///
    /// Returns `true` if anything changed.
    pub fn select_pattern(&mut self, catalog: &PatternCatalog, id: &PatternId) -> bool {
        let Some(record) = catalog.pattern(id) else {
            debug!(pattern = %id, "Ignoring unknown pattern");
            return false;
        };

        if self.pattern.as_ref() == Some(id) && self.category == record.category {
            return false;
        }

        self.pattern = Some(id.clone());
        self.category = record.category.clone();
        debug!(pattern = %id, category = %self.category, "Pattern selected");
        true
    }

    /// Set the comparison mode
    ///
    /// Returns `true` if the mode changed.
    pub fn toggle_comparison_mode(&mut self, mode: ComparisonMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        debug!(mode = %mode, "Comparison mode changed");
        true
    }

    /// Set the comparison mode from its key, ignoring invalid input
    pub fn set_comparison_mode_str(&mut self, key: &str) -> bool {
        match ComparisonMode::parse(key) {
            Some(mode) => self.toggle_comparison_mode(mode),
            None => {
                debug!(key, "Ignoring invalid comparison mode");
                false
            }
        }
    }

    /// Flip to the other comparison mode
    pub fn cycle_comparison_mode(&mut self) {
        self.toggle_comparison_mode(self.mode.toggled());
    }

    /// Move to the next pattern in the active category, wrapping
    pub fn next_pattern(&mut self, catalog: &PatternCatalog) -> bool {
        self.step_pattern(catalog, 1)
    }

    /// Move to the previous pattern in the active category, wrapping
    pub fn previous_pattern(&mut self, catalog: &PatternCatalog) -> bool {
        self.step_pattern(catalog, -1)
    }

    /// Move to the next category, wrapping
    pub fn next_category(&mut self, catalog: &PatternCatalog) -> bool {
        self.step_category(catalog, 1)
    }

    /// Move to the previous category, wrapping
    pub fn previous_category(&mut self, catalog: &PatternCatalog) -> bool {
        self.step_category(catalog, -1)
    }

    /// Apply a surface event
    ///
    /// Returns `true` if the state changed.
    pub fn apply(&mut self, event: &BrowserEvent, catalog: &PatternCatalog) -> bool {
        let changed = match event {
            BrowserEvent::CategoryChosen { category } => self.select_category(catalog, category),
            BrowserEvent::PatternChosen { pattern } => self.select_pattern(catalog, pattern),
            BrowserEvent::ComparisonModeChosen { mode } => self.toggle_comparison_mode(*mode),
            BrowserEvent::NextCategory => self.next_category(catalog),
            BrowserEvent::PreviousCategory => self.previous_category(catalog),
            BrowserEvent::NextPattern => self.next_pattern(catalog),
            BrowserEvent::PreviousPattern => self.previous_pattern(catalog),
            BrowserEvent::ComparisonModeCycled => {
                self.cycle_comparison_mode();
                true
            }
        };

        if !changed {
            debug!(event = event.kind(), "Event left selection unchanged");
        }
        changed
    }

    fn step_pattern(&mut self, catalog: &PatternCatalog, delta: isize) -> bool {
        let ids: Vec<&PatternId> = catalog.patterns_in(&self.category).map(|p| &p.id).collect();
        if ids.is_empty() {
            return false;
        }

        let next = match self
            .pattern
            .as_ref()
            .and_then(|current| ids.iter().position(|id| *id == current))
        {
            Some(idx) => wrap(idx, delta, ids.len()),
            None => 0,
        };

        let target = ids[next].clone();
        self.select_pattern(catalog, &target)
    }

    fn step_category(&mut self, catalog: &PatternCatalog, delta: isize) -> bool {
        let categories = catalog.categories();
        let idx = catalog.category_position(&self.category).unwrap_or(0);
        let target = categories[wrap(idx, delta, categories.len())].id.clone();
        self.select_category(catalog, &target)
    }
}

/// `idx + delta` modulo `len`
fn wrap(idx: usize, delta: isize, len: usize) -> usize {
    // len fits in isize for any in-memory slice
    (idx as isize + delta).rem_euclid(len as isize) as usize
}
