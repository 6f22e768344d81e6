//! Pattern Display
//!
//! Turns a [`PatternView`] into styled lines for the main panel.
//!
//! The view decides *what* is shown (including placeholders); this module
//! only decides how it looks. Prose is wrapped to the panel width, code is
//! never wrapped.

use catalog_core::{
    AnnotatedLine, CodePanel, ComparisonRowView, Comparisons, PatternView, RenderOptions,
    TheoryView, Variant,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Minimum width prose is wrapped to
const MIN_WRAP_WIDTH: usize = 20;

/// Build every line of the main panel
#[must_use]
pub fn pattern_lines(
    view: &PatternView<'_>,
    options: &RenderOptions,
    width: usize,
) -> Vec<Line<'static>> {
    let width = width.max(MIN_WRAP_WIDTH);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        view.name().to_string(),
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        view.category_name().to_string(),
        Style::default().fg(theme::DIM_GRAY),
    )));

    if !view.description().is_empty() {
        lines.push(Line::default());
        push_wrapped(&mut lines, view.description(), "", width, Style::default().fg(theme::TEXT));
    }

    for panel in [view.baseline(), view.alternative()] {
        lines.push(Line::default());
        push_panel(&mut lines, &panel, options);
    }

    lines.push(Line::default());
    lines.push(section(&format!(
        "Comparison: {} vs {}",
        Variant::CppTraditional.label(),
        view.mode().label()
    )));
    match view.comparisons() {
        Comparisons::Rows(rows) => push_table(&mut lines, &rows, view.mode().label()),
        Comparisons::Unavailable(message) => lines.push(placeholder(message)),
    }

    lines.push(Line::default());
    lines.push(section("Theory"));
    match view.theory() {
        TheoryView::Present(theory) => {
            for (label, text) in [
                ("Background", &theory.background),
                ("Problem", &theory.problem),
                ("Solution", &theory.solution),
            ] {
                if text.is_empty() {
                    continue;
                }
                lines.push(Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                push_wrapped(&mut lines, text, "    ", width, Style::default().fg(theme::TEXT));
            }
            for (label, items) in [
                ("Applicability", &theory.applicability),
                ("Consequences", &theory.consequences),
            ] {
                if items.is_empty() {
                    continue;
                }
                lines.push(Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for item in items {
                    push_wrapped(&mut lines, item, "    • ", width, Style::default().fg(theme::TEXT));
                }
            }
        }
        TheoryView::Unavailable(message) => lines.push(placeholder(message)),
    }

    if let Some(notes) = view.notes() {
        lines.push(Line::default());
        lines.push(section("Notes"));
        push_wrapped(&mut lines, notes, "  ", width, Style::default().fg(theme::TEXT));
    }

    lines
}

/// Placeholder shown when the selected category has no patterns
#[must_use]
pub fn empty_category_lines(category_name: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            category_name.to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        placeholder("No patterns in this category."),
    ]
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(format!("── {title} ──"), theme::heading()))
}

fn placeholder(message: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {message}"), theme::placeholder()))
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, indent: &str, width: usize, style: Style) {
    let hanging = " ".repeat(indent.width());
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(&hanging);
    for row in wrap(text, options) {
        lines.push(Line::from(Span::styled(row.into_owned(), style)));
    }
}

fn push_panel(lines: &mut Vec<Line<'static>>, panel: &CodePanel<'_>, options: &RenderOptions) {
    let title_color = if panel.variant() == Variant::CppTraditional {
        theme::BASELINE
    } else {
        theme::ALTERNATIVE
    };
    lines.push(Line::from(Span::styled(
        format!("── {} ──", panel.title()),
        Style::default().fg(title_color).add_modifier(Modifier::BOLD),
    )));

    match panel {
        CodePanel::Available { lines: code, .. } => {
            let gutter = code.len().to_string().len();
            for line in code {
                push_code_line(lines, line, gutter, options);
            }
        }
        CodePanel::Unavailable { message, .. } => lines.push(placeholder(message)),
    }
}

fn push_code_line(
    lines: &mut Vec<Line<'static>>,
    line: &AnnotatedLine<'_>,
    gutter: usize,
    options: &RenderOptions,
) {
    let annotated = options.show_annotations && line.is_annotated();
    let mut spans = Vec::with_capacity(2);

    if options.show_line_numbers {
        let gutter_style = if annotated {
            Style::default().fg(theme::ANNOTATED_GUTTER)
        } else {
            Style::default().fg(theme::GUTTER)
        };
        spans.push(Span::styled(
            format!("{:>gutter$} │ ", line.line_number),
            gutter_style,
        ));
    }
    spans.push(Span::styled(
        line.content.to_string(),
        Style::default().fg(theme::CODE),
    ));
    lines.push(Line::from(spans));

    if let Some(text) = line.annotation.filter(|_| annotated) {
        let indent = if options.show_line_numbers { gutter + 3 } else { 0 };
        lines.push(Line::from(Span::styled(
            format!("{:indent$}└ {text}", ""),
            Style::default()
                .fg(theme::ANNOTATION)
                .add_modifier(Modifier::ITALIC),
        )));
    }
}

fn push_table(lines: &mut Vec<Line<'static>>, rows: &[ComparisonRowView<'_>], alternative: &str) {
    let baseline = Variant::CppTraditional.label();
    let title_width = rows
        .iter()
        .map(|r| r.title.width())
        .chain(std::iter::once("Aspect".width()))
        .max()
        .unwrap_or(0);
    let base_width = rows
        .iter()
        .map(|r| r.baseline.width())
        .chain(std::iter::once(baseline.width()))
        .max()
        .unwrap_or(0);

    let header_style = Style::default()
        .fg(theme::DIM_GRAY)
        .add_modifier(Modifier::BOLD);
    lines.push(Line::from(Span::styled(
        format!(
            "  {} │ {} │ {alternative}",
            pad("Aspect", title_width),
            pad(baseline, base_width)
        ),
        header_style,
    )));

    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", pad(row.title, title_width)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(theme::GUTTER)),
            Span::styled(pad(row.baseline, base_width), Style::default().fg(theme::BASELINE)),
            Span::styled(" │ ", Style::default().fg(theme::GUTTER)),
            Span::styled(row.alternative.to_string(), Style::default().fg(theme::ALTERNATIVE)),
        ]));
    }
}

/// Pad to a display width (not a char count)
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
