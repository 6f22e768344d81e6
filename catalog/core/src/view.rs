//! Pattern View
//!
//! Resolves the selected pattern and shapes it for a surface. A view borrows
//! from the catalog and is cheap to rebuild, so surfaces re-derive it after
//! every selection change instead of caching it.
//!
//! Missing optional content never fails: each absence maps to a placeholder
//! the surface renders as-is.
//!
//! | Missing              | Result                                   |
//! |----------------------|------------------------------------------|
//! | implementation       | [`CodePanel::Unavailable`] + [`NO_IMPLEMENTATION`] |
//! | comparisons (or `[]`)| [`Comparisons::Unavailable`] + [`NO_COMPARISON`]   |
//! | one comparison cell  | [`MISSING_CELL`]                          |
//! | theory               | [`TheoryView::Unavailable`] + [`NO_THEORY`]        |

use crate::annotate::{annotate, AnnotatedLine};
use crate::catalog::{CategoryId, CategoryRecord, PatternCatalog, PatternRecord, Theory, Variant};
use crate::selection::{ComparisonMode, SelectionState};

/// Placeholder for a variant with no code sample
pub const NO_IMPLEMENTATION: &str = "No implementation available.";

/// Placeholder for a pattern with no comparison table
pub const NO_COMPARISON: &str = "No comparison available.";

/// Placeholder for a pattern with no theory section
pub const NO_THEORY: &str = "No theory available.";

/// Placeholder for an empty comparison cell
pub const MISSING_CELL: &str = "-";

/// One code panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodePanel<'a> {
    /// The variant has a code sample
    Available {
        /// Which variant
        variant: Variant,
        /// Annotated lines of the sample
        lines: Vec<AnnotatedLine<'a>>,
    },
    /// The variant has no code sample
    Unavailable {
        /// Which variant
        variant: Variant,
        /// Placeholder text
        message: &'static str,
    },
}

impl<'a> CodePanel<'a> {
    fn for_pattern(pattern: &'a PatternRecord, variant: Variant) -> Self {
        match pattern.implementation(variant) {
            Some(imp) => CodePanel::Available {
                variant,
                lines: annotate(&imp.code, &imp.explanation),
            },
            None => CodePanel::Unavailable {
                variant,
                message: NO_IMPLEMENTATION,
            },
        }
    }

    /// Variant shown in this panel
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            CodePanel::Available { variant, .. } | CodePanel::Unavailable { variant, .. } => {
                *variant
            }
        }
    }

    /// Panel heading
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.variant().label()
    }

    /// Whether the panel has code
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, CodePanel::Available { .. })
    }

    /// Annotated lines (empty for an unavailable panel)
    #[must_use]
    pub fn lines(&self) -> &[AnnotatedLine<'a>] {
        match self {
            CodePanel::Available { lines, .. } => lines,
            CodePanel::Unavailable { .. } => &[],
        }
    }
}

/// A comparison row shaped for the active mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonRowView<'a> {
    /// Aspect being compared
    pub title: &'a str,
    /// Traditional C++ value
    pub baseline: &'a str,
    /// Value for the active comparison mode
    pub alternative: &'a str,
}

/// The comparison table
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparisons<'a> {
    /// Rows in catalog order
    Rows(Vec<ComparisonRowView<'a>>),
    /// No table for this pattern
    Unavailable(&'static str),
}

/// The theory section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryView<'a> {
    /// Theory present
    Present(&'a Theory),
    /// No theory for this pattern
    Unavailable(&'static str),
}

/// Everything a surface needs to render one pattern
#[derive(Clone, Copy, Debug)]
pub struct PatternView<'a> {
    pattern: &'a PatternRecord,
    category: &'a CategoryRecord,
    mode: ComparisonMode,
}

impl<'a> PatternView<'a> {
    /// Resolve the view for the current selection
    ///
    /// `None` when no pattern is selected or its id does not resolve.
    #[must_use]
    pub fn resolve(selection: &SelectionState, catalog: &'a PatternCatalog) -> Option<Self> {
        let pattern = catalog.pattern(selection.pattern()?)?;
        Self::for_pattern(pattern, catalog, selection.mode())
    }

    /// Build a view for a specific pattern
    #[must_use]
    pub fn for_pattern(
        pattern: &'a PatternRecord,
        catalog: &'a PatternCatalog,
        mode: ComparisonMode,
    ) -> Option<Self> {
        let category = catalog.category(&pattern.category)?;
        Some(Self {
            pattern,
            category,
            mode,
        })
    }

    /// Pattern display name
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.pattern.name
    }

    /// Pattern summary
    #[must_use]
    pub fn description(&self) -> &'a str {
        &self.pattern.description
    }

    /// Owning category id
    #[must_use]
    pub fn category_id(&self) -> &'a CategoryId {
        &self.category.id
    }

    /// Owning category display name
    #[must_use]
    pub fn category_name(&self) -> &'a str {
        &self.category.name
    }

    /// Active comparison mode
    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Baseline (traditional C++) panel
    #[must_use]
    pub fn baseline(&self) -> CodePanel<'a> {
        CodePanel::for_pattern(self.pattern, Variant::CppTraditional)
    }

    /// Panel for the active comparison mode
    #[must_use]
    pub fn alternative(&self) -> CodePanel<'a> {
        CodePanel::for_pattern(self.pattern, self.mode.variant())
    }

    /// Annotated lines for every variant present, in variant order
    #[must_use]
    pub fn variants(&self) -> Vec<(Variant, Vec<AnnotatedLine<'a>>)> {
        let Some(implementations) = self.pattern.implementations.as_ref() else {
            return Vec::new();
        };
        implementations
            .iter()
            .map(|(variant, imp)| (*variant, annotate(&imp.code, &imp.explanation)))
            .collect()
    }

    /// Comparison table for the active mode
    #[must_use]
    pub fn comparisons(&self) -> Comparisons<'a> {
        match self.pattern.comparisons.as_deref() {
            Some(rows) if !rows.is_empty() => {
                let alternative = self.mode.variant();
                Comparisons::Rows(
                    rows.iter()
                        .map(|row| ComparisonRowView {
                            title: &row.title,
                            baseline: row.value(Variant::CppTraditional).unwrap_or(MISSING_CELL),
                            alternative: row.value(alternative).unwrap_or(MISSING_CELL),
                        })
                        .collect(),
                )
            }
            _ => Comparisons::Unavailable(NO_COMPARISON),
        }
    }

    /// Theory section
    #[must_use]
    pub fn theory(&self) -> TheoryView<'a> {
        match self.pattern.theory.as_ref() {
            Some(theory) => TheoryView::Present(theory),
            None => TheoryView::Unavailable(NO_THEORY),
        }
    }

    /// Notes, verbatim
    #[must_use]
    pub fn notes(&self) -> Option<&'a str> {
        self.pattern.notes.as_deref()
    }
}
