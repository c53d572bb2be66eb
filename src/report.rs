//! Human-readable run summaries.

use crate::tally::{Diagnostic, Tally};
use std::fmt;

/// Summary of one classification run, built from its tally and diagnostics alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub title: String,
    pub counts: Vec<(&'static str, usize)>,
    pub total: usize,
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn new(title: impl Into<String>, tally: &Tally, diagnostics: &[Diagnostic]) -> Self {
        Self {
            title: title.into(),
            counts: tally.iter().collect(),
            total: tally.total(),
            errors: diagnostics.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Finished parsing {} with ({}) errors.",
            self.title,
            self.error_count()
        )?;
        writeln!(f, "Successfully parsed:")?;
        writeln!(f)?;
        for (category, count) in &self.counts {
            writeln!(f, "{} {}", count, category)?;
        }
        writeln!(f)?;
        writeln!(f, "TOTAL: {}", self.total)?;

        if !self.errors.is_empty() {
            writeln!(f, "Error lines are the following:")?;
            for error in &self.errors {
                writeln!(f, "{}", error)?;
            }
        }
        Ok(())
    }
}
