//! Line normalization shared by both pipelines.

use crate::{NO_ENDING, NO_STEM};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Marks a stem the dictionary leaves empty.
pub const STEM_MARKER: &str = "zzz";

/// Marks an empty ending in the inflection file.
pub const ENDING_MARKER: &str = "NULL";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s\s+").unwrap();
    static ref TOKEN: Regex = Regex::new(r"\S+").unwrap();
}

/// Replace every run of two or more whitespace characters with one space.
pub fn collapse_whitespace(line: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(line, " ")
}

/// Replace whole whitespace-delimited tokens equal to `marker` with `sentinel`.
///
/// Only exact tokens are rewritten, so definition words that merely contain the
/// marker survive untouched. Separators are kept as they are.
pub fn substitute_marker(line: &str, marker: &str, sentinel: &str) -> String {
    if !line.contains(marker) {
        return line.to_string();
    }

    TOKEN
        .replace_all(line, |caps: &Captures<'_>| {
            if &caps[0] == marker {
                sentinel.to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn fold(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    collapse_whitespace(&composed).into_owned()
}

/// Normalize a DICTLINE line: NFC, whitespace collapse, `zzz` → [`NO_STEM`].
pub fn normalize_dictline(raw: &str) -> String {
    substitute_marker(&fold(raw), STEM_MARKER, NO_STEM)
}

/// Normalize an INFLECTS line: as for DICTLINE, plus `NULL` → [`NO_ENDING`].
pub fn normalize_inflection(raw: &str) -> String {
    let line = substitute_marker(&fold(raw), STEM_MARKER, NO_STEM);
    substitute_marker(&line, ENDING_MARKER, NO_ENDING)
}

/// True for lines with nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
