//! Main Application
//!
//! The App struct owns the browser session:
//! - Event loop (keyboard, resize)
//! - The catalog and the selection state
//! - Display toggles, filter query and scroll position
//!
//! # Flow
//!
//! 1. Terminal key events are mapped to [`Action`]s
//! 2. Selection actions go to [`SelectionState::apply`] as [`BrowserEvent`]s
//! 3. The [`PatternView`] is re-derived on every frame
//!
//! Nothing here needs a real terminal except [`App::run`]; tests drive
//! [`App::handle_key`] and [`App::draw`] against a `TestBackend`.

use std::time::Duration;

use catalog_core::{
    BrowserEvent, PatternCatalog, PatternId, PatternRecord, PatternView, RenderOptions,
    SelectionState,
};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::{Frame, Terminal};

use crate::display;
use crate::input::{map_key, Action, InputMode};
use crate::theme;
use crate::widgets::{NavPanel, TextBlock, TextBlockState};

/// Sidebar width in columns
const NAV_WIDTH: u16 = 28;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Loaded catalog
    catalog: PatternCatalog,
    /// Current category, pattern and mode
    selection: SelectionState,

    // === Display State ===
    /// Annotation and line-number toggles
    options: RenderOptions,
    /// Main panel scroll
    content: TextBlockState,

    // === Input State ===
    /// Whether keys edit the filter
    input_mode: InputMode,
    /// Pattern filter query
    filter: String,
}

impl App {
    /// Create a new App instance
    #[must_use]
    pub fn new(catalog: PatternCatalog, selection: SelectionState, options: RenderOptions) -> Self {
        Self {
            running: true,
            catalog,
            selection,
            options,
            content: TextBlockState::default(),
            input_mode: InputMode::Browse,
            filter: String::new(),
        }
    }

    /// Main event loop
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    // Only handle Press events (not Release or Repeat)
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    // Next draw picks up the new size
                    Event::Resize(width, height) => {
                        tracing::debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }
        }

        tracing::info!("Browser closed");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Is the app still running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current selection
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current display toggles
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Current filter query (empty when no filter)
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether keys are editing the filter
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Main panel scroll offset
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.content.scroll_offset
    }

    /// Patterns listed in the sidebar: the active category, filtered
    #[must_use]
    pub fn visible_patterns(&self) -> Vec<&PatternRecord> {
        self.catalog.search_in(self.selection.category(), &self.filter)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key, self.input_mode) {
            self.perform(action);
        }
    }

    /// Apply one action
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Browse(event) => self.dispatch(&event),
            Action::ToggleAnnotations => {
                self.options.show_annotations = !self.options.show_annotations;
            }
            Action::ToggleLineNumbers => {
                self.options.show_line_numbers = !self.options.show_line_numbers;
            }
            Action::ScrollPage(pages) => self.content.page(pages),
            Action::ScrollLines(lines) => self.content.scroll(lines),
            Action::ScrollTop => self.content.scroll_to_top(),
            Action::ScrollBottom => self.content.scroll_to_bottom(),
            Action::StartFilter => self.input_mode = InputMode::Filter,
            Action::FilterInput(c) => {
                self.filter.push(c);
                self.follow_filter();
            }
            Action::FilterBackspace => {
                self.filter.pop();
                self.follow_filter();
            }
            Action::FilterCommit => self.input_mode = InputMode::Browse,
            Action::Back => {
                if self.input_mode == InputMode::Filter || !self.filter.is_empty() {
                    self.filter.clear();
                    self.input_mode = InputMode::Browse;
                } else {
                    self.running = false;
                }
            }
            Action::Quit => self.running = false,
        }
    }

    /// Forward a selection event
    ///
    /// With a filter active, pattern stepping walks the filtered list
    /// instead of the whole category.
    fn dispatch(&mut self, event: &BrowserEvent) {
        let event = match event {
            BrowserEvent::NextPattern if !self.filter.is_empty() => self.step_filtered(1),
            BrowserEvent::PreviousPattern if !self.filter.is_empty() => self.step_filtered(-1),
            other => Some(other.clone()),
        };

        let Some(event) = event else {
            return;
        };

        if self.selection.apply(&event, &self.catalog) {
            self.content.scroll_to_top();
            self.follow_filter();
        }
    }

    /// `PatternChosen` for the neighbour in the filtered list
    fn step_filtered(&self, delta: isize) -> Option<BrowserEvent> {
        let ids: Vec<&PatternId> = self.visible_patterns().into_iter().map(|p| &p.id).collect();
        if ids.is_empty() {
            return None;
        }

        let len = ids.len() as isize;
        let next = match self
            .selection
            .pattern()
            .and_then(|current| ids.iter().position(|id| *id == current))
        {
            Some(idx) => (idx as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };

        Some(BrowserEvent::PatternChosen {
            pattern: ids[next].clone(),
        })
    }

    /// Keep the selected pattern inside the filtered list when possible
    fn follow_filter(&mut self) {
        if self.filter.is_empty() {
            return;
        }

        let visible = self.visible_patterns();
        let current = self.selection.pattern();
        if visible.iter().any(|p| Some(&p.id) == current) {
            return;
        }

        if let Some(first) = visible.first().map(|p| p.id.clone()) {
            tracing::debug!(pattern = %first, filter = %self.filter, "Filter moved selection");
            if self.selection.select_pattern(&self.catalog, &first) {
                self.content.scroll_to_top();
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        let [nav, main] =
            Layout::horizontal([Constraint::Length(NAV_WIDTH), Constraint::Min(10)]).areas(body);

        self.render_nav(frame, nav);
        self.render_main(frame, main);
        self.render_status(frame, status);
    }

    /// Render the sidebar
    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let patterns = self.visible_patterns();
        let filter = (self.input_mode == InputMode::Filter || !self.filter.is_empty())
            .then_some(self.filter.as_str());
        frame.render_widget(
            NavPanel::new(&self.catalog, &self.selection, &patterns).filter(filter),
            area,
        );
    }

    /// Render the pattern panel
    fn render_main(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(1),
            ..area
        };
        // Leave the marker column free
        let wrap_width = inner.width.saturating_sub(2) as usize;

        let lines = match PatternView::resolve(&self.selection, &self.catalog) {
            Some(view) => display::pattern_lines(&view, &self.options, wrap_width),
            None => display::empty_category_lines(
                self.catalog
                    .category_name(self.selection.category())
                    .unwrap_or_default(),
            ),
        };

        frame.render_stateful_widget(
            TextBlock::new(&lines).style(Style::default().fg(theme::TEXT)),
            inner,
            &mut self.content,
        );
    }

    /// Render status bar
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = match self.input_mode {
            InputMode::Filter => format!(
                " /{}_ | Enter keep filter | Esc clear",
                self.filter
            ),
            InputMode::Browse => {
                let pattern = self
                    .selection
                    .pattern()
                    .map_or("-", PatternId::as_str);
                let scroll_info = if self.content.scroll_offset > 0 {
                    format!(" [line {}]", self.content.scroll_offset + 1)
                } else {
                    String::new()
                };
                format!(
                    " {}/{} | {}{} | Tab category  j/k pattern  m mode  a notes  n numbers  / filter  q quit",
                    self.selection.category(),
                    pattern,
                    self.selection.mode().label(),
                    scroll_info,
                )
            }
        };

        let style = match self.input_mode {
            InputMode::Filter => Style::default().fg(theme::FILTER),
            InputMode::Browse => Style::default().fg(theme::DIM_GRAY),
        };
        frame
            .buffer_mut()
            .set_stringn(area.x, area.y, &status, area.width as usize, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{loader, ComparisonMode};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let catalog = loader::builtin().unwrap();
        let selection = SelectionState::new(&catalog);
        App::new(catalog, selection, RenderOptions::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn typed(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn current(app: &App) -> (&str, Option<&str>) {
        (
            app.selection().category().as_str(),
            app.selection().pattern().map(PatternId::as_str),
        )
    }

    #[test]
    fn test_starts_on_first_pattern() {
        let app = app();
        assert!(app.is_running());
        assert_eq!(current(&app), ("creational", Some("singleton")));
    }

    #[test]
    fn test_tab_and_pattern_keys() {
        let mut app = app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(current(&app), ("structural", Some("adapter")));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(current(&app), ("behavioral", Some("strategy")));

        press(&mut app, KeyCode::Down);
        assert_eq!(current(&app), ("behavioral", Some("observer")));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(current(&app), ("structural", Some("adapter")));
    }

    #[test]
    fn test_mode_keys() {
        let mut app = app();

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.selection().mode(), ComparisonMode::Java);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selection().mode(), ComparisonMode::CppModern);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selection().mode(), ComparisonMode::Java);
    }

    #[test]
    fn test_display_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.options().show_annotations);
        assert!(!app.options().show_line_numbers);

        press(&mut app, KeyCode::Char('a'));
        assert!(app.options().show_annotations);
    }

    #[test]
    fn test_filter_moves_selection_to_first_match() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode(), InputMode::Filter);

        typed(&mut app, "fact");
        assert_eq!(app.filter(), "fact");
        assert_eq!(current(&app), ("creational", Some("factory-method")));

        let visible: Vec<&str> = app.visible_patterns().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, vec!["factory-method"]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Browse);
        assert_eq!(app.filter(), "fact");
    }

    #[test]
    fn test_filtered_navigation_stays_in_matches() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        typed(&mut app, "pointer");
        press(&mut app, KeyCode::Enter);

        // Creational has no pointer patterns: selection stays put
        assert!(app.visible_patterns().is_empty());
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(current(&app), ("creational", Some("singleton")));

        // Category change lands on the first match
        press(&mut app, KeyCode::BackTab);
        assert_eq!(current(&app), ("memory", Some("raw-pointers")));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(current(&app), ("memory", Some("smart-pointers")));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(current(&app), ("memory", Some("raw-pointers")));
    }

    #[test]
    fn test_escape_clears_filter_then_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        typed(&mut app, "q");
        assert!(app.is_running());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.filter(), "");
        assert_eq!(app.input_mode(), InputMode::Browse);
        assert!(app.is_running());

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_running());
    }

    #[test]
    fn test_backspace_edits_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        typed(&mut app, "sx");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filter(), "s");
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running());
    }

    #[test]
    fn test_selection_change_resets_scroll() {
        let mut app = app();
        app.content = TextBlockState {
            scroll_offset: 5,
            total_lines: 100,
            viewport_height: 10,
        };

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll_offset(), 14);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll_offset(), 0);
    }
}
