use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rating must be between 0 and 5, got {0}")]
    InvalidRating(f32),

    #[error("pages cannot be negative, got {0}")]
    NegativePages(i32),

    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("no content loaded before parsing")]
    NoContent,

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
