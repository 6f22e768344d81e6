//! Key Bindings
//!
//! Maps terminal key events to [`Action`]s. Selection changes come out as
//! [`BrowserEvent`]s so the app forwards them to the selection state
//! unchanged; everything else is a display toggle or view control.
//!
//! | Key                 | Action                         |
//! |---------------------|--------------------------------|
//! | `Tab` / `Shift-Tab` | next / previous category       |
//! | `Down`,`j` / `Up`,`k` | next / previous pattern      |
//! | `m`                 | cycle comparison mode          |
//! | `1` / `2`           | modern C++ / Java              |
//! | `a`                 | toggle annotations             |
//! | `n`                 | toggle line numbers            |
//! | `PgUp` / `PgDn`     | scroll main panel              |
//! | `Home` / `End`      | scroll to top / bottom         |
//! | `/`                 | start filter                   |
//! | `Esc`               | clear filter, or quit          |
//! | `q`, `Ctrl-C`       | quit                           |

use catalog_core::{BrowserEvent, ComparisonMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the key line is currently feeding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive navigation
    #[default]
    Browse,
    /// Keys edit the filter query
    Filter,
}

/// Result of a key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward to the selection state
    Browse(BrowserEvent),
    /// Show or hide line explanations
    ToggleAnnotations,
    /// Show or hide line numbers
    ToggleLineNumbers,
    /// Scroll the main panel by pages (positive = down)
    ScrollPage(i32),
    /// Scroll the main panel by lines (positive = down)
    ScrollLines(i32),
    /// Jump to the top of the main panel
    ScrollTop,
    /// Jump to the bottom of the main panel
    ScrollBottom,
    /// Enter filter mode
    StartFilter,
    /// Append to the filter query
    FilterInput(char),
    /// Delete the last filter character
    FilterBackspace,
    /// Leave filter mode, keeping the query
    FilterCommit,
    /// Clear the filter, or quit if there is none
    Back,
    /// Exit the browser
    Quit,
}

/// Map a key event to an action
#[must_use]
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match (mode, key.code) {
        // Shared between modes
        (_, KeyCode::Esc) => Some(Action::Back),
        (_, KeyCode::Tab) => Some(Action::Browse(BrowserEvent::NextCategory)),
        (_, KeyCode::BackTab) => Some(Action::Browse(BrowserEvent::PreviousCategory)),
        (_, KeyCode::Down) => Some(Action::Browse(BrowserEvent::NextPattern)),
        (_, KeyCode::Up) => Some(Action::Browse(BrowserEvent::PreviousPattern)),
        (_, KeyCode::PageDown) => Some(Action::ScrollPage(1)),
        (_, KeyCode::PageUp) => Some(Action::ScrollPage(-1)),

        // Filter editing
        (InputMode::Filter, KeyCode::Enter) => Some(Action::FilterCommit),
        (InputMode::Filter, KeyCode::Backspace) => Some(Action::FilterBackspace),
        (InputMode::Filter, KeyCode::Char(c)) => Some(Action::FilterInput(c)),

        // Browsing
        (InputMode::Browse, KeyCode::Char('j')) => Some(Action::Browse(BrowserEvent::NextPattern)),
        (InputMode::Browse, KeyCode::Char('k')) => {
            Some(Action::Browse(BrowserEvent::PreviousPattern))
        }
        (InputMode::Browse, KeyCode::Char('m')) => {
            Some(Action::Browse(BrowserEvent::ComparisonModeCycled))
        }
        (InputMode::Browse, KeyCode::Char('1')) => Some(Action::Browse(
            BrowserEvent::ComparisonModeChosen {
                mode: ComparisonMode::CppModern,
            },
        )),
        (InputMode::Browse, KeyCode::Char('2')) => Some(Action::Browse(
            BrowserEvent::ComparisonModeChosen {
                mode: ComparisonMode::Java,
            },
        )),
        (InputMode::Browse, KeyCode::Char('a')) => Some(Action::ToggleAnnotations),
        (InputMode::Browse, KeyCode::Char('n')) => Some(Action::ToggleLineNumbers),
        (InputMode::Browse, KeyCode::Char(' ')) => Some(Action::ScrollPage(1)),
        (InputMode::Browse, KeyCode::Char('J')) => Some(Action::ScrollLines(1)),
        (InputMode::Browse, KeyCode::Char('K')) => Some(Action::ScrollLines(-1)),
        (InputMode::Browse, KeyCode::Home) => Some(Action::ScrollTop),
        (InputMode::Browse, KeyCode::End) => Some(Action::ScrollBottom),
        (InputMode::Browse, KeyCode::Char('/')) => Some(Action::StartFilter),
        (InputMode::Browse, KeyCode::Char('q')) => Some(Action::Quit),

        _ => None,
    }
}
