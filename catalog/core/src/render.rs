//! Plain-Text Rendering
//!
//! Headless rendering of a [`PatternView`] for `--print`, piping, and tests.
//! The terminal surface has its own styled renderer; this one only emits
//! text.

use std::fmt::{self, Write};

use crate::annotate::AnnotatedLine;
use crate::catalog::{PatternCatalog, Variant};
use crate::view::{CodePanel, Comparisons, PatternView, TheoryView};

/// Options for [`render_text`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print explanations under their line
    pub show_annotations: bool,
    /// Prefix each code line with its number
    pub show_line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_annotations: true,
            show_line_numbers: true,
        }
    }
}

/// Render one pattern as plain text
#[must_use]
pub fn render_text(view: &PatternView<'_>, options: &RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_pattern(&mut out, view, options);
    out
}

/// Render the catalog outline: categories and their patterns
#[must_use]
pub fn render_listing(catalog: &PatternCatalog) -> String {
    let mut out = String::new();
    let _ = write_listing(&mut out, catalog);
    out
}

fn write_pattern(out: &mut impl Write, view: &PatternView<'_>, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "{}", view.name())?;
    writeln!(out, "{}", "=".repeat(view.name().chars().count()))?;
    writeln!(out, "Category: {}", view.category_name())?;
    if !view.description().is_empty() {
        writeln!(out, "\n{}", view.description())?;
    }

    for panel in [view.baseline(), view.alternative()] {
        writeln!(out)?;
        write_panel(out, &panel, options)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Comparison ({} vs {})",
        Variant::CppTraditional.label(),
        view.mode().label()
    )?;
    write_comparisons(out, &view.comparisons())?;

    writeln!(out)?;
    writeln!(out, "Theory")?;
    write_theory(out, &view.theory())?;

    if let Some(notes) = view.notes() {
        writeln!(out)?;
        writeln!(out, "Notes\n  {notes}")?;
    }

    Ok(())
}

fn write_comparisons(out: &mut impl Write, comparisons: &Comparisons<'_>) -> fmt::Result {
    match comparisons {
        Comparisons::Rows(rows) => {
            let title_width = rows.iter().map(|r| r.title.chars().count()).max().unwrap_or(0);
            let base_width = rows
                .iter()
                .map(|r| r.baseline.chars().count())
                .max()
                .unwrap_or(0);
            for row in rows {
                writeln!(
                    out,
                    "  {:title_width$} | {:base_width$} | {}",
                    row.title, row.baseline, row.alternative
                )?;
            }
            Ok(())
        }
        Comparisons::Unavailable(message) => writeln!(out, "  {message}"),
    }
}

fn write_theory(out: &mut impl Write, theory: &TheoryView<'_>) -> fmt::Result {
    let theory = match theory {
        TheoryView::Present(theory) => theory,
        TheoryView::Unavailable(message) => return writeln!(out, "  {message}"),
    };

    for (label, text) in [
        ("Background", &theory.background),
        ("Problem", &theory.problem),
        ("Solution", &theory.solution),
    ] {
        if !text.is_empty() {
            writeln!(out, "  {label}: {text}")?;
        }
    }
    for (label, items) in [
        ("Applicability", &theory.applicability),
        ("Consequences", &theory.consequences),
    ] {
        if !items.is_empty() {
            writeln!(out, "  {label}:")?;
            for item in items {
                writeln!(out, "    - {item}")?;
            }
        }
    }
    Ok(())
}

fn write_panel(out: &mut impl Write, panel: &CodePanel<'_>, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "[{}]", panel.title())?;
    match panel {
        CodePanel::Available { lines, .. } => {
            let gutter = lines.len().to_string().len();
            for line in lines {
                write_line(out, line, gutter, options)?;
            }
            Ok(())
        }
        CodePanel::Unavailable { message, .. } => writeln!(out, "  {message}"),
    }
}

fn write_line(
    out: &mut impl Write,
    line: &AnnotatedLine<'_>,
    gutter: usize,
    options: &RenderOptions,
) -> fmt::Result {
    if options.show_line_numbers {
        writeln!(out, "{:>gutter$} | {}", line.line_number, line.content)?;
    } else {
        writeln!(out, "{}", line.content)?;
    }

    match line.annotation {
        Some(annotation) if options.show_annotations => {
            let indent = if options.show_line_numbers { gutter + 3 } else { 0 };
            writeln!(out, "{:indent$}^ {annotation}", "")
        }
        _ => Ok(()),
    }
}

fn write_listing(out: &mut impl Write, catalog: &PatternCatalog) -> fmt::Result {
    for category in catalog.categories() {
        writeln!(out, "{} ({})", category.name, category.id)?;
        for pattern in catalog.patterns_in(&category.id) {
            writeln!(out, "  {:<20} {}", pattern.id.as_str(), pattern.name)?;
        }
    }
    Ok(())
}
