//! TextBlock Widget
//!
//! A borderless, scrollable region of pre-styled lines. Lines wider than the
//! area are clipped, not wrapped; callers wrap prose before handing it over
//! so code keeps its shape.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;

use crate::theme::DIM_GRAY;

/// State for a scrollable text block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Total content lines
    pub total_lines: usize,
    /// Height of the last render
    pub viewport_height: usize,
}

impl TextBlockState {
    /// Scroll by delta (positive = down)
    pub fn scroll(&mut self, delta: i32) {
        let magnitude = delta.unsigned_abs() as usize;
        self.scroll_offset = if delta < 0 {
            self.scroll_offset.saturating_sub(magnitude)
        } else {
            self.scroll_offset.saturating_add(magnitude).min(self.max_scroll())
        };
    }

    /// Scroll by whole pages (positive = down)
    pub fn page(&mut self, pages: i32) {
        let page = i32::try_from(self.viewport_height.saturating_sub(1).max(1)).unwrap_or(i32::MAX);
        self.scroll(pages.saturating_mul(page));
    }

    /// Scroll to top
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Largest offset that still fills the viewport
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }
}

/// A borderless, scrollable text block
pub struct TextBlock<'a> {
    lines: &'a [Line<'a>],
    style: Style,
}

impl<'a> TextBlock<'a> {
    /// Create a block over pre-styled lines
    #[must_use]
    pub fn new(lines: &'a [Line<'a>]) -> Self {
        Self {
            lines,
            style: Style::default(),
        }
    }

    /// Base style applied under each line
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        state.total_lines = self.lines.len();
        state.viewport_height = area.height as usize;

        // Clamp scroll
        state.scroll_offset = state.scroll_offset.min(state.max_scroll());

        buf.set_style(area, self.style);

        // Render visible lines
        for (i, line) in self
            .lines
            .iter()
            .skip(state.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            // i < area.height, which is a u16
            let y = area.y + i as u16;
            buf.set_line(area.x, y, line, area.width);
        }

        // Scroll markers in the right-hand column
        let marker_x = area.right().saturating_sub(1);
        let marker_style = Style::default().fg(DIM_GRAY);
        if state.scroll_offset > 0 {
            buf.set_string(marker_x, area.y, "▲", marker_style);
        }
        if state.scroll_offset < state.max_scroll() {
            buf.set_string(marker_x, area.bottom().saturating_sub(1), "▼", marker_style);
        }
    }
}
