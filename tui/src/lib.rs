//! Patternbook TUI - Terminal browser for design patterns
//!
//! A full-screen browser over the pattern catalog: categories and patterns
//! on the left, the selected pattern on the right with its traditional C++
//! baseline, the chosen comparison (modern C++ or Java), the comparison
//! table, theory and notes.
//!
//! # Architecture
//!
//! - **App**: event loop, owns the catalog and selection state
//! - **Input**: key bindings to browser events and display toggles
//! - **Display**: pattern view to styled lines
//! - **Widgets**: sidebar and borderless scrollable text block
//!
//! All browsing logic lives in `catalog-core`; this crate only renders it.

pub mod app;
pub mod display;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use input::{Action, InputMode};
