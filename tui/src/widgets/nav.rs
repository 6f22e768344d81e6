//! Navigation Sidebar
//!
//! Category list on top, patterns of the active category below. The active
//! entries are marked and highlighted; a vertical rule separates the sidebar
//! from the main panel.

use catalog_core::{PatternCatalog, PatternRecord, SelectionState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::theme;

/// Marker in front of the active entry
const MARKER: &str = "▸ ";

/// Sidebar listing categories and the visible patterns
pub struct NavPanel<'a> {
    catalog: &'a PatternCatalog,
    selection: &'a SelectionState,
    patterns: &'a [&'a PatternRecord],
    filter: Option<&'a str>,
}

impl<'a> NavPanel<'a> {
    /// Create a sidebar for the current selection
    ///
    /// `patterns` is the (possibly filtered) pattern list of the active
    /// category.
    #[must_use]
    pub fn new(
        catalog: &'a PatternCatalog,
        selection: &'a SelectionState,
        patterns: &'a [&'a PatternRecord],
    ) -> Self {
        Self {
            catalog,
            selection,
            patterns,
            filter: None,
        }
    }

    /// Show the active filter query under the pattern heading
    #[must_use]
    pub fn filter(mut self, query: Option<&'a str>) -> Self {
        self.filter = query.filter(|q| !q.is_empty());
        self
    }
}

impl Widget for NavPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        for y in area.top()..area.bottom() {
            buf.set_string(area.right() - 1, y, "│", Style::default().fg(theme::GUTTER));
        }

        let mut rows = Rows {
            x: area.x + 1,
            y: area.y,
            bottom: area.bottom(),
            width: (area.width - 3) as usize,
        };

        rows.put(buf, "Categories", theme::heading());
        for category in self.catalog.categories() {
            let active = &category.id == self.selection.category();
            rows.entry(buf, &category.name, active);
        }

        rows.skip();
        match self.filter {
            Some(query) => rows.put(buf, &format!("Patterns /{query}"), theme::heading()),
            None => rows.put(buf, "Patterns", theme::heading()),
        }

        if self.patterns.is_empty() {
            let message = if self.filter.is_some() {
                "  No matches"
            } else {
                "  (empty)"
            };
            rows.put(buf, message, theme::placeholder());
        }
        for pattern in self.patterns {
            let active = Some(&pattern.id) == self.selection.pattern();
            rows.entry(buf, &pattern.name, active);
        }
    }
}

/// Cursor over sidebar rows
struct Rows {
    x: u16,
    y: u16,
    bottom: u16,
    width: usize,
}

impl Rows {
    fn put(&mut self, buf: &mut Buffer, text: &str, style: Style) {
        if self.y < self.bottom {
            buf.set_stringn(self.x, self.y, text, self.width, style);
            self.y += 1;
        }
    }

    fn entry(&mut self, buf: &mut Buffer, name: &str, active: bool) {
        if active {
            self.put(buf, &format!("{MARKER}{name}"), theme::selected());
        } else {
            self.put(buf, &format!("  {name}"), Style::default().fg(theme::TEXT));
        }
    }

    fn skip(&mut self) {
        self.y = self.y.saturating_add(1);
    }
}
