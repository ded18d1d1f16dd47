use crate::catalog::LibraryData;
use crate::console::Console;

/// Shortest accepted argument, e.g. `title x`.
const MIN_ARGS_LEN: usize = 7;

/// What a REMOVE term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveType {
    /// First entry whose title equals the term exactly.
    Title,
    /// Every entry whose author listing contains the term.
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCmd {
    remove_type: RemoveType,
    term: String,
}

impl RemoveCmd {
    /// Accepts `title <term>` or `author <term>`, keyword in any case.
    ///
    /// The keyword is recognised by its leading characters and the term starts
    /// one character after it, so `titles Dune` parses as title `Dune`.
    #[must_use]
    pub fn parse(args: &str) -> Option<Self> {
        let trimmed = args.trim();
        if trimmed.chars().count() < MIN_ARGS_LEN {
            return None;
        }

        let (remove_type, rest) = if head(trimmed, 5).to_lowercase() == "title" {
            (RemoveType::Title, tail(trimmed, 6))
        } else if head(trimmed, 6).to_lowercase() == "author" {
            (RemoveType::Author, tail(trimmed, 7))
        } else {
            return None;
        };

        Some(Self {
            remove_type,
            term: rest.trim().to_string(),
        })
    }

    #[must_use]
    pub fn remove_type(&self) -> RemoveType {
        self.remove_type
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn execute(&self, data: &mut LibraryData, console: &mut dyn Console) {
        if data.is_empty() {
            console.line("The library has no books");
            return;
        }

        let term = self.term.as_str();
        match self.remove_type {
            RemoveType::Title => {
                if data.remove_first_titled(term).is_some() {
                    console.line(&format!("{term}: removed successfully."));
                } else {
                    console.line(&format!("{term}: not found."));
                }
            }
            RemoveType::Author => {
                let removed = data.remove_where(|book| book.author_listing_contains(term));
                log::info!("Removed {removed} entries matching author {term:?}");
                console.line(&format!("{removed} books removed for author: {term}"));
            }
        }
    }
}

/// The first `n` characters of `s`.
fn head(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| &s[..i])
}

/// `s` without its first `n` characters.
fn tail(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}
