//! Theme and Colors
//!
//! The patternbook palette. Code panels get a neutral foreground so the
//! annotation color stands out next to them.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Accent Palette
// ============================================================================

/// Pattern titles and the active selection
pub const ACCENT: Color = Color::Rgb(255, 176, 92);

/// Section headings
pub const HEADING: Color = Color::Rgb(150, 180, 255);

/// Annotation text
pub const ANNOTATION: Color = Color::Rgb(255, 223, 128);

/// Line numbers of annotated lines
pub const ANNOTATED_GUTTER: Color = Color::Rgb(255, 200, 90);

// ============================================================================
// Code Panels
// ============================================================================

/// Code text
pub const CODE: Color = Color::Rgb(220, 220, 220);

/// Line-number gutter
pub const GUTTER: Color = Color::Rgb(100, 100, 100);

/// Baseline (traditional C++) panel title
pub const BASELINE: Color = Color::Rgb(120, 200, 230);

/// Alternative panel title
pub const ALTERNATIVE: Color = Color::Rgb(130, 220, 130);

// ============================================================================
// UI Colors
// ============================================================================

/// Placeholders and secondary text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Body text
pub const TEXT: Color = Color::Rgb(200, 200, 200);

/// Filter prompt
pub const FILTER: Color = Color::Magenta;

// ============================================================================
// Styles
// ============================================================================

/// Style for the selected navigation entry
#[must_use]
pub fn selected() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Style for placeholder text
#[must_use]
pub fn placeholder() -> Style {
    Style::default().fg(DIM_GRAY).add_modifier(Modifier::ITALIC)
}

/// Style for section headings
#[must_use]
pub fn heading() -> Style {
    Style::default().fg(HEADING).add_modifier(Modifier::BOLD)
}
