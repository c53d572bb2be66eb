//! Sink: structured record files and text reports.

use crate::error::{Error, Result};
use crate::report::RunReport;
use clap::ValueEnum;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Layout of the structured output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A single JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    Ok(BufWriter::with_capacity(256 * 1024, file))
}

/// Serialize `records` to `path`. `pretty` only affects [`OutputFormat::Json`].
pub fn write_records<T: Serialize>(
    path: &Path,
    records: &[T],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let mut writer = create(path)?;

    match format {
        OutputFormat::Json if pretty => serde_json::to_writer_pretty(&mut writer, records)?,
        OutputFormat::Json => serde_json::to_writer(&mut writer, records)?,
        OutputFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n").map_err(|e| Error::write(path, e))?;
            }
        }
    }

    writer.flush().map_err(|e| Error::write(path, e))
}

/// Where the report for `output` goes: `<output>.report.txt` in the same directory.
pub fn report_path(output: &Path) -> PathBuf {
    let mut name: OsString = output
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".report.txt");
    output.with_file_name(name)
}

pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let mut writer = create(path)?;
    write!(writer, "{}", report).map_err(|e| Error::write(path, e))?;
    writer.flush().map_err(|e| Error::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        a: u8,
    }

    #[test]
    fn compact_pretty_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let rows = [Row { a: 1 }, Row { a: 2 }];

        let compact = dir.path().join("compact.json");
        write_records(&compact, &rows, OutputFormat::Json, false).unwrap();
        assert_eq!(fs::read_to_string(&compact).unwrap(), r#"[{"a":1},{"a":2}]"#);

        let pretty = dir.path().join("pretty.json");
        write_records(&pretty, &rows, OutputFormat::Json, true).unwrap();
        assert!(fs::read_to_string(&pretty).unwrap().contains("\n  {\n    \"a\": 1\n  }"));

        let lines = dir.path().join("rows.jsonl");
        write_records(&lines, &rows, OutputFormat::Jsonl, true).unwrap();
        assert_eq!(fs::read_to_string(&lines).unwrap(), "{\"a\":1}\n{\"a\":2}\n");
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/DICTLINE.json");
        write_records::<Row>(&path, &[], OutputFormat::Json, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn report_sits_next_to_output() {
        assert_eq!(
            report_path(Path::new("out/DICTLINE.json")),
            PathBuf::from("out/DICTLINE.json.report.txt")
        );
    }
}
