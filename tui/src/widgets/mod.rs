//! Widgets
//!
//! - [`text_block`]: scrollable pre-styled lines (main panel)
//! - [`nav`]: category and pattern lists (sidebar)

pub mod nav;
pub mod text_block;

pub use nav::NavPanel;
pub use text_block::{TextBlock, TextBlockState};
