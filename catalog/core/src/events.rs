//! Browser Events
//!
//! Discrete user actions a surface forwards to the selection state. Surfaces
//! don't interpret them, they report what the user picked and let
//! [`SelectionState::apply`](crate::SelectionState::apply) decide what
//! changes.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, PatternId};
use crate::selection::ComparisonMode;

/// Events from a surface to the selection state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserEvent {
    // ============================================
    // Direct selection
    // ============================================
    /// User picked a category
    CategoryChosen {
        /// The chosen category
        category: CategoryId,
    },

    /// User picked a pattern
    PatternChosen {
        /// The chosen pattern
        pattern: PatternId,
    },

    /// User picked a comparison mode
    ComparisonModeChosen {
        /// The chosen mode
        mode: ComparisonMode,
    },

    // ============================================
    // Relative navigation
    // ============================================
    /// Next category in catalog order (wraps)
    NextCategory,

    /// Previous category in catalog order (wraps)
    PreviousCategory,

    /// Next pattern within the active category (wraps)
    NextPattern,

    /// Previous pattern within the active category (wraps)
    PreviousPattern,

    /// Flip between the two comparison modes
    ComparisonModeCycled,
}

impl BrowserEvent {
    /// Build a `CategoryChosen` event
    pub fn category(id: impl Into<String>) -> Self {
        Self::CategoryChosen {
            category: CategoryId::new(id),
        }
    }

    /// Build a `PatternChosen` event
    pub fn pattern(id: impl Into<String>) -> Self {
        Self::PatternChosen {
            pattern: PatternId::new(id),
        }
    }

    /// Short name for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CategoryChosen { .. } => "category_chosen",
            Self::PatternChosen { .. } => "pattern_chosen",
            Self::ComparisonModeChosen { .. } => "comparison_mode_chosen",
            Self::NextCategory => "next_category",
            Self::PreviousCategory => "previous_category",
            Self::NextPattern => "next_pattern",
            Self::PreviousPattern => "previous_pattern",
            Self::ComparisonModeCycled => "comparison_mode_cycled",
        }
    }
}
