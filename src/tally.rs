//! Run-scoped accumulation: records, per-category tallies and diagnostics.

use crate::error::LineError;
use std::fmt;
use tracing::debug;

/// A record kind that can be counted by category.
pub trait Categorized {
    /// Every category, in report order.
    const CATEGORIES: &'static [&'static str];

    /// What one input line is called in diagnostics ("line", "inflection").
    const SUBJECT: &'static str;

    fn category(&self) -> &'static str;
}

/// Count of successfully classified records per category.
///
/// Categories keep the order they were registered in, and zero counts are kept
/// so the report lists every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(&'static str, usize)>,
}

impl Tally {
    pub fn with_categories(categories: &[&'static str]) -> Self {
        Self {
            counts: categories.iter().map(|&c| (c, 0)).collect(),
        }
    }

    pub fn record(&mut self, category: &'static str) {
        match self.counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((category, 1)),
        }
    }

    pub fn get(&self, category: &str) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counts.iter().copied()
    }
}

/// One input line that matched no record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line_number: usize,
    /// The normalized line, verbatim.
    pub line: String,
    pub reason: LineError,
    subject: &'static str,
}

impl Diagnostic {
    pub fn new(subject: &'static str, line_number: usize, line: &str, reason: LineError) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            reason,
            subject,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not parse {} ({}). [line {}: {}]",
            self.subject, self.line, self.line_number, self.reason
        )
    }
}

/// Everything one classification pass produces.
#[derive(Debug, Clone)]
pub struct ClassificationRun<R> {
    pub records: Vec<R>,
    pub tally: Tally,
    pub diagnostics: Vec<Diagnostic>,
    /// Comment and blank lines, excluded before classification.
    pub skipped: usize,
}

impl<R: Categorized> Default for ClassificationRun<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Categorized> ClassificationRun<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            tally: Tally::with_categories(R::CATEGORIES),
            diagnostics: Vec::new(),
            skipped: 0,
        }
    }

    /// Fold one classified line into the run. `Ok(None)` means the line was
    /// excluded (comment or blank) and counts toward neither side.
    pub fn push(&mut self, line_number: usize, line: &str, outcome: Result<Option<R>, LineError>) {
        match outcome {
            Ok(Some(record)) => {
                self.tally.record(record.category());
                self.records.push(record);
            }
            Ok(None) => self.skipped += 1,
            Err(reason) => {
                let diagnostic = Diagnostic::new(R::SUBJECT, line_number, line, reason);
                debug!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
            }
        }
    }

    /// Lines that reached classification: records plus diagnostics.
    pub fn classified_lines(&self) -> usize {
        self.tally.total() + self.diagnostics.len()
    }
}
