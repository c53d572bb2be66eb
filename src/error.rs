//! Error types shared by the pipelines.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors: any of these aborts the pipeline invocation that raised it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Why a single line could not be turned into a record. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("no part-of-speech shape matches")]
    NoShape,

    #[error("unknown inflection tag `{0}`")]
    UnknownTag(String),

    #[error("missing `{field}` at field {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("`{field}` expects an integer, found `{value}`")]
    NotANumber { field: &'static str, value: String },
}
