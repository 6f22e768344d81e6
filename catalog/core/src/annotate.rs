//! Line Annotation
//!
//! Pairs the lines of a code sample with its sparse explanation list.
//!
//! # Line Splitting
//!
//! Code is split with [`str::lines`]:
//!
//! - `\n` and `\r\n` both end a line
//! - empty lines in the middle of the sample are kept
//! - a single trailing newline ends the last line, it does not add an empty one
//! - the empty string has zero lines
//!
//! # Lookup Rules
//!
//! Explanation line numbers are 1-based. When two explanations name the same
//! line the first one in the list wins. Line `0` and lines past the end of
//! the sample never match anything.

use std::collections::HashMap;

use crate::catalog::Explanation;

/// One source line ready for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotatedLine<'a> {
    /// 1-based line number
    pub line_number: usize,
    /// Line text without the line terminator
    pub content: &'a str,
    /// Explanation for this line, if any
    pub annotation: Option<&'a str>,
}

impl AnnotatedLine<'_> {
    /// Whether this line carries an explanation
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }
}

/// First-wins lookup from line number to explanation text
#[derive(Clone, Debug, Default)]
pub struct AnnotationIndex<'a> {
    by_line: HashMap<usize, &'a str>,
}

impl<'a> AnnotationIndex<'a> {
    /// Build the index from an explanation list
    #[must_use]
    pub fn new(explanation: &'a [Explanation]) -> Self {
        let mut by_line = HashMap::with_capacity(explanation.len());
        for entry in explanation {
            if entry.line == 0 {
                continue;
            }
            by_line
                .entry(entry.line as usize)
                .or_insert(entry.text.as_str());
        }
        Self { by_line }
    }

    /// Explanation for a 1-based line number
    #[must_use]
    pub fn get(&self, line_number: usize) -> Option<&'a str> {
        self.by_line.get(&line_number).copied()
    }

    /// Number of distinct annotated lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_line.len()
    }

    /// Whether no line is annotated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

/// Number of lines `annotate` will produce for `code`
#[must_use]
pub fn line_count(code: &str) -> usize {
    code.lines().count()
}

/// Pair every line of `code` with its explanation, in source order
#[must_use]
pub fn annotate<'a>(code: &'a str, explanation: &'a [Explanation]) -> Vec<AnnotatedLine<'a>> {
    let index = AnnotationIndex::new(explanation);
    code.lines()
        .enumerate()
        .map(|(idx, content)| {
            let line_number = idx + 1;
            AnnotatedLine {
                line_number,
                content,
                annotation: index.get(line_number),
            }
        })
        .collect()
}
