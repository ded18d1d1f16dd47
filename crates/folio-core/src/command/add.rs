use std::path::{Path, PathBuf};

use crate::catalog::LibraryData;
use crate::console::Console;

/// Required suffix of a catalog file argument.
pub const CSV_SUFFIX: &str = ".csv";

/// Loads a catalog file into the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCmd {
    path: PathBuf,
}

impl AddCmd {
    /// Accepts non-blank text ending in `.csv` once all whitespace is
    /// removed. The file is not checked for existence here.
    #[must_use]
    pub fn parse(args: &str) -> Option<Self> {
        if args.trim().is_empty() {
            return None;
        }
        let stripped: String = args.chars().filter(|c| !c.is_whitespace()).collect();
        stripped.ends_with(CSV_SUFFIX).then(|| Self {
            path: PathBuf::from(stripped),
        })
    }

    /// Build from a path that is already a path, not typed argument text.
    ///
    /// Only the `.csv` suffix is checked; whitespace in directory or file
    /// names is kept.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.to_string_lossy().ends_with(CSV_SUFFIX).then(|| Self {
            path: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn execute(&self, data: &mut LibraryData, console: &mut dyn Console) {
        data.load_data(&self.path, console);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accepts_csv() {
        let cmd = AddCmd::parse("foo.csv").unwrap();
        assert_eq!(cmd.path(), Path::new("foo.csv"));
    }

    #[test]
    fn test_add_strips_whitespace() {
        let cmd = AddCmd::parse("  my books .csv ").unwrap();
        assert_eq!(cmd.path(), Path::new("mybooks.csv"));
    }

    #[test]
    fn test_add_rejects_other_suffixes() {
        assert!(AddCmd::parse("foo.txt").is_none());
        assert!(AddCmd::parse("foo.CSV").is_none());
        assert!(AddCmd::parse("csv").is_none());
    }

    #[test]
    fn test_add_rejects_blank() {
        assert!(AddCmd::parse("").is_none());
        assert!(AddCmd::parse("   \t").is_none());
    }

    #[test]
    fn test_add_from_path_keeps_whitespace() {
        let cmd = AddCmd::from_path(Path::new("/x/My Books/lib.csv")).unwrap();
        assert_eq!(cmd.path(), Path::new("/x/My Books/lib.csv"));
        assert!(AddCmd::from_path(Path::new("/x/My Books/lib.txt")).is_none());
    }

    #[test]
    fn test_add_missing_file_reports_error_and_keeps_catalog() {
        let cmd = AddCmd::parse("does/not/exist.csv").unwrap();
        let mut data = LibraryData::new();
        let mut console = crate::console::BufferConsole::new();

        cmd.execute(&mut data, &mut console);

        assert!(data.is_empty());
        assert!(console.out.is_empty());
        assert_eq!(console.err.len(), 1);
        assert!(console.err[0].starts_with("ERROR: Reading file content failed"));
    }
}
