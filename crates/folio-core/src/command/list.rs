use crate::catalog::LibraryData;
use crate::console::Console;

/// How LIST renders each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// No argument given; titles only.
    #[default]
    Default,
    Short,
    Long,
}

/// Prints the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCmd {
    mode: ListMode,
}

impl ListCmd {
    /// Blank input selects [`ListMode::Default`]; otherwise the text must be
    /// `short` or `long`, ignoring case.
    #[must_use]
    pub fn parse(args: &str) -> Option<Self> {
        let mode = if args.trim().is_empty() {
            ListMode::Default
        } else {
            match args.to_lowercase().as_str() {
                "short" => ListMode::Short,
                "long" => ListMode::Long,
                _ => return None,
            }
        };
        Some(Self { mode })
    }

    #[must_use]
    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn execute(&self, data: &LibraryData, console: &mut dyn Console) {
        if data.is_empty() {
            console.line("The library has no books");
            return;
        }

        console.line(&format!("{} books in library:", data.len()));
        for book in data.books() {
            match self.mode {
                ListMode::Default | ListMode::Short => console.line(book.title()),
                ListMode::Long => {
                    console.line(&book.to_string());
                    console.line("");
                }
            }
        }
    }
}
