//! Catalog Core - Headless Pattern Browsing for patternbook
//!
//! This crate holds everything patternbook knows about design patterns and
//! how a user moves through them, independent of any UI framework. The
//! terminal browser is one surface; `--print` output and the test suite are
//! others.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Surfaces                             │
//! │  ┌──────────────┐   ┌───────────────┐   ┌─────────────────┐  │
//! │  │     TUI      │   │ --print/--list│   │  Tests/Headless │  │
//! │  │  (ratatui)   │   │   (render)    │   │                 │  │
//! │  └──────┬───────┘   └───────┬───────┘   └────────┬────────┘  │
//! │         └───────────────────┼────────────────────┘           │
//! │                   BrowserEvent (up)                          │
//! │                   PatternView (down)                         │
//! └─────────────────────────────┼────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┼────────────────────────────────┐
//! │                       CATALOG CORE                           │
//! │  ┌───────────────┐  ┌───────┴────────┐  ┌─────────────────┐  │
//! │  │ PatternCatalog│◄─┤ SelectionState │  │  LineAnnotator  │  │
//! │  │   (loader)    │  │                │  │   (annotate)    │  │
//! │  └───────────────┘  └────────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use catalog_core::{loader, ComparisonMode, PatternView, SelectionState};
//!
//! let catalog = loader::builtin().unwrap();
//! let mut selection = SelectionState::new(&catalog);
//! selection.select_pattern(&catalog, &"observer".into());
//! selection.toggle_comparison_mode(ComparisonMode::Java);
//!
//! let view = PatternView::resolve(&selection, &catalog).unwrap();
//! assert_eq!(view.category_name(), "Behavioral Patterns");
//! assert_eq!(view.alternative().title(), "Java");
//! ```
//!
//! # Module Overview
//!
//! - [`catalog`]: Typed catalog records and lookups
//! - [`loader`]: Built-in, TOML and JSON catalog sources
//! - [`annotate`]: Pairs code lines with sparse explanations
//! - [`selection`]: Category/pattern/mode selection state
//! - [`events`]: Events from surfaces to the selection state
//! - [`view`]: Resolved pattern view with placeholders
//! - [`render`]: Plain-text rendering
//! - [`config`]: TOML + environment configuration
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod annotate;
pub mod catalog;
pub mod config;
pub mod events;
pub mod loader;
pub mod render;
pub mod selection;
pub mod view;

// Re-exports for convenience
pub use annotate::{annotate, line_count, AnnotatedLine, AnnotationIndex};
pub use catalog::{
    CatalogDocument, CatalogError, CategoryId, CategoryRecord, ComparisonRow, Explanation,
    Implementation, PatternCatalog, PatternId, PatternRecord, Theory, Variant,
};
pub use events::BrowserEvent;
pub use render::{render_listing, render_text, RenderOptions};
pub use selection::{ComparisonMode, SelectionState};
pub use view::{
    CodePanel, ComparisonRowView, Comparisons, PatternView, TheoryView, MISSING_CELL,
    NO_COMPARISON, NO_IMPLEMENTATION, NO_THEORY,
};

// Config exports
pub use config::{
    default_config_path, default_log_path, load_config_from_path, BrowserConfig,
    ConfigError, ConfigOverrides, ConfigSource, PatternbookToml,
};
