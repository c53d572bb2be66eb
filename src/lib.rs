//! Converts the DICTLINE (headword) and INFLECTS (ending) plaintext files into
//! typed records that serialize to JSON.
//!
//! Both files use whitespace-delimited columns. Inflection lines always lead with
//! their part-of-speech tag, but headword lines put the tag after a variable number
//! of stems, so the headword classifier probes a fixed, ordered table of positions.
//!
//! Headword JSON carries its stems as one fixed-length `stems` array (two, three,
//! four or one entries depending on the part of speech) rather than separate
//! `stem1`..`stem4` keys, so readers of older `stem1`-style output need to index
//! the array instead.

pub mod dictline;
pub mod error;
pub mod fields;
pub mod inflects;
pub mod input;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod tally;

pub use dictline::{classify_headword, Headword};
pub use error::{Error, LineError, Result};
pub use inflects::{classify_ending, Ending};
pub use normalize::{normalize_dictline, normalize_inflection};
pub use pipeline::{run_dictline, run_inflects, OutputFormat, PipelineOptions};
pub use report::RunReport;
pub use tally::{ClassificationRun, Diagnostic, Tally};

/// Stands in for a stem the dictionary marks as absent (`zzz`).
pub const NO_STEM: &str = "NO_STEM";

/// Stands in for an empty ending (`NULL` in the inflection file).
pub const NO_ENDING: &str = "NO_ENDING";
