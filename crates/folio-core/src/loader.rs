//! Reads catalog files and turns their lines into [`BookEntry`] values.
//!
//! Loading is two-phase: [`LibraryFileLoader::load_content`] pulls the raw
//! lines into memory, then [`LibraryFileLoader::parse_content`] converts them.
//! Parsing is all-or-nothing: one malformed record discards the whole file.

use std::path::Path;

use crate::console::Console;
use crate::error::{Error, Result};
use crate::model::BookEntry;

const AUTHOR_SEPARATOR: char = '-';

/// Holds the raw lines of the most recently loaded file.
#[derive(Debug, Default, Clone)]
pub struct LibraryFileLoader {
    content: Option<Vec<String>>,
}

impl LibraryFileLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every line of `path`, header included.
    ///
    /// On failure the error is reported to `console` and any content from an
    /// earlier load is kept.
    pub fn load_content(&mut self, path: &Path, console: &mut dyn Console) -> bool {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let lines: Vec<String> = text.lines().map(str::to_string).collect();
                log::debug!("Read {} lines from {}", lines.len(), path.display());
                self.content = Some(lines);
                true
            }
            Err(source) => {
                let err = Error::Io {
                    path: path.to_path_buf(),
                    source,
                };
                log::error!("{err}");
                console.error(&format!("Reading file content failed: {err}"));
                false
            }
        }
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Parse the loaded lines, skipping the header.
    pub fn try_parse(&self) -> Result<Vec<BookEntry>> {
        let lines = self.content.as_ref().ok_or(Error::NoContent)?;

        lines
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, line)| parse_record(index + 1, line))
            .collect()
    }

    /// Parse the loaded lines, reporting any failure and yielding no entries.
    pub fn parse_content(&self, console: &mut dyn Console) -> Vec<BookEntry> {
        match self.try_parse() {
            Ok(entries) => {
                log::debug!("Parsed {} book entries", entries.len());
                entries
            }
            Err(err) => {
                log::error!("Parsing file content failed: {err}");
                console.error(&format!("Parsing file content failed: {err}"));
                Vec::new()
            }
        }
    }
}

/// Parse one `title,authors,rating,isbn,pages` record. `line_no` is 1-based.
fn parse_record(line_no: usize, line: &str) -> Result<BookEntry> {
    let fields: Vec<&str> = line.split(',').collect();
    let [title, authors, rating, isbn, pages] = fields.as_slice() else {
        return Err(Error::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    let authors: Vec<&str> = if authors.contains(AUTHOR_SEPARATOR) {
        authors.split(AUTHOR_SEPARATOR).collect()
    } else {
        vec![*authors]
    };

    let rating: f32 = rating.trim().parse().map_err(|_| Error::InvalidNumber {
        line: line_no,
        field: "rating",
        value: (*rating).to_string(),
    })?;

    let pages: i32 = pages.parse().map_err(|_| Error::InvalidNumber {
        line: line_no,
        field: "pages",
        value: (*pages).to_string(),
    })?;

    BookEntry::new(*title, authors, rating, *isbn, pages)
}
