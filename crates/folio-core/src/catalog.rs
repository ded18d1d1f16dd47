use std::path::Path;

use crate::console::Console;
use crate::loader::LibraryFileLoader;
use crate::model::BookEntry;

/// The in-memory catalog.
///
/// Entries stay in insertion order, which is file order across loads.
/// Duplicates are kept.
#[derive(Debug, Default)]
pub struct LibraryData {
    books: Vec<BookEntry>,
    loader: LibraryFileLoader,
}

impl LibraryData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse a catalog file, appending its entries.
    ///
    /// Returns the number of entries added. Load and parse failures are
    /// reported to `console` and leave the catalog unchanged.
    pub fn load_data(&mut self, path: &Path, console: &mut dyn Console) -> usize {
        if !self.loader.load_content(path, console) {
            return 0;
        }
        let entries = self.loader.parse_content(console);
        let added = entries.len();
        self.books.extend(entries);
        log::info!(
            "Added {added} entries from {}, catalog now holds {}",
            path.display(),
            self.books.len()
        );
        added
    }

    #[must_use]
    pub fn books(&self) -> &[BookEntry] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Remove the first entry whose title equals `title` exactly.
    pub fn remove_first_titled(&mut self, title: &str) -> Option<BookEntry> {
        let index = self.books.iter().position(|b| b.title() == title)?;
        Some(self.books.remove(index))
    }

    /// Remove every entry for which `pred` holds, returning how many went.
    ///
    /// The predicate sees each entry once, before anything is removed.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&BookEntry) -> bool) -> usize {
        let before = self.books.len();
        self.books.retain(|b| !pred(b));
        before - self.books.len()
    }
}

impl FromIterator<BookEntry> for LibraryData {
    fn from_iter<I: IntoIterator<Item = BookEntry>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
            loader: LibraryFileLoader::default(),
        }
    }
}
