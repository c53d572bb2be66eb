//! Line source: plaintext or bzip2-compressed input files.

use crate::error::{Error, Result};
use bzip2::read::BzDecoder;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Open `path` for buffered reading, decompressing `.bz2` files on the fly.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| Error::read(path, e))?;
    let reader: Box<dyn BufRead> = if path.to_string_lossy().ends_with(".bz2") {
        Box::new(BufReader::with_capacity(256 * 1024, BzDecoder::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };
    Ok(reader)
}

/// Read every line of `reader`. Invalid UTF-8 is replaced rather than rejected,
/// and line terminators (`\n` or `\r\n`) are stripped.
pub fn read_lines(mut reader: impl BufRead, path: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::read(path, e))?;
        if bytes_read == 0 {
            break;
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}

/// Read a whole input file into raw lines.
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    read_lines(open_reader(path)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn strips_terminators_and_keeps_blank_lines() {
        let data = b"one\r\ntwo\n\nthree";
        let lines = read_lines(&data[..], Path::new("mem")).unwrap();
        assert_eq!(lines, vec!["one", "two", "", "three"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let data = b"ab\xffc\n";
        let lines = read_lines(&data[..], Path::new("mem")).unwrap();
        assert_eq!(lines, vec!["ab\u{fffd}c"]);
    }

    #[test]
    fn reads_bzip2_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("INFLECTS.txt.bz2");

        let mut encoder = bzip2::write::BzEncoder::new(
            File::create(&path).unwrap(),
            bzip2::Compression::default(),
        );
        encoder.write_all(b"CONJ 1 0 NULL X A\n-- note\n").unwrap();
        encoder.finish().unwrap();

        let lines = read_file(&path).unwrap();
        assert_eq!(lines, vec!["CONJ 1 0 NULL X A", "-- note"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
