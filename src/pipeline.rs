//! One conversion phase: read, normalize, classify, write, report.

use crate::dictline::{classify_headword, Headword};
use crate::error::{LineError, Result};
use crate::inflects::{classify_ending, Ending};
use crate::normalize::{is_blank, normalize_dictline, normalize_inflection};
use crate::report::RunReport;
use crate::tally::{Categorized, ClassificationRun};
use crate::{input, output};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

pub use crate::output::OutputFormat;

/// Settings for a single phase.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Indent JSON output instead of writing it compactly
    pub pretty: bool,
    /// Also write the text report next to the output
    pub save_report: bool,
    /// Show a spinner while classifying
    pub progress: bool,
}

impl PipelineOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: OutputFormat::default(),
            pretty: false,
            save_report: false,
            progress: false,
        }
    }
}

fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}

/// Classify every line in order. Blank lines are dropped before `classify` runs.
pub fn classify_lines<R, F>(
    lines: &[String],
    normalize: fn(&str) -> String,
    classify: F,
    pb: &ProgressBar,
) -> ClassificationRun<R>
where
    R: Categorized,
    F: Fn(&str) -> std::result::Result<Option<R>, LineError>,
{
    let mut run = ClassificationRun::new();

    for (index, raw) in lines.iter().enumerate() {
        let line = normalize(raw);
        let outcome = if is_blank(&line) {
            Ok(None)
        } else {
            classify(&line)
        };
        run.push(index + 1, &line, outcome);

        if (index + 1) % 1000 == 0 {
            pb.set_message(format!(
                "Lines: {} | Records: {} | Errors: {}",
                index + 1,
                run.records.len(),
                run.diagnostics.len()
            ));
        }
    }

    run
}

/// Classify DICTLINE lines into headword records.
pub fn classify_dictline(lines: &[String]) -> ClassificationRun<Headword> {
    classify_lines(
        lines,
        normalize_dictline,
        |line| classify_headword(line).map(Some),
        &ProgressBar::hidden(),
    )
}

/// Classify INFLECTS lines into ending records.
pub fn classify_inflects(lines: &[String]) -> ClassificationRun<Ending> {
    classify_lines(
        lines,
        normalize_inflection,
        classify_ending,
        &ProgressBar::hidden(),
    )
}

fn run_phase<R, F>(
    options: &PipelineOptions,
    normalize: fn(&str) -> String,
    classify: F,
) -> Result<RunReport>
where
    R: Categorized + Serialize,
    F: Fn(&str) -> std::result::Result<Option<R>, LineError>,
{
    let start_time = Instant::now();
    info!("Parsing: {}", options.input.display());

    let lines = input::read_file(&options.input)?;
    let pb = spinner(options.progress);
    let run = classify_lines(&lines, normalize, classify, &pb);
    pb.finish_and_clear();

    output::write_records(&options.output, &run.records, options.format, options.pretty)?;
    info!(
        records = run.records.len(),
        skipped = run.skipped,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Saved {}",
        options.output.display()
    );

    let title = options
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.input.display().to_string());
    let report = RunReport::new(title, &run.tally, &run.diagnostics);

    if !report.is_clean() {
        warn!(
            "{} line(s) in {} could not be parsed",
            report.error_count(),
            options.input.display()
        );
    }

    if options.save_report {
        let path = output::report_path(&options.output);
        output::write_report(&path, &report)?;
        info!("Report: {}", path.display());
    }

    Ok(report)
}

/// Phase one: DICTLINE → headword records.
pub fn run_dictline(options: &PipelineOptions) -> Result<RunReport> {
    run_phase(options, normalize_dictline, |line| {
        classify_headword(line).map(Some)
    })
}

/// Phase two: INFLECTS → ending records.
pub fn run_inflects(options: &PipelineOptions) -> Result<RunReport> {
    run_phase(options, normalize_inflection, classify_ending)
}
