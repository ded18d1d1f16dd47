use crate::catalog::LibraryData;
use crate::console::Console;

/// Case-insensitive title search for a single-word term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCmd {
    term: String,
}

impl SearchCmd {
    #[must_use]
    pub fn parse(args: &str) -> Option<Self> {
        if args.trim().is_empty() || args.contains(char::is_whitespace) {
            return None;
        }
        Some(Self {
            term: args.to_string(),
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn execute(&self, data: &LibraryData, console: &mut dyn Console) {
        let needle = self.term.to_lowercase();
        let mut hits = 0usize;

        for book in data.books() {
            if book.title().to_lowercase().contains(&needle) {
                console.line(book.title());
                hits += 1;
            }
        }

        if hits == 0 {
            console.line(&format!("No hits found for search term: {}", self.term));
        }
    }
}
