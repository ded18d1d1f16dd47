//! GROUP: print the catalog partitioned by title initial or by author.

use crate::catalog::LibraryData;
use crate::console::Console;
use crate::model::BookEntry;

/// Key the catalog is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Title,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCmd {
    group_type: GroupType,
}

impl GroupCmd {
    #[must_use]
    pub fn parse(args: &str) -> Option<Self> {
        let group_type = match args.to_lowercase().as_str() {
            "title" => GroupType::Title,
            "author" => GroupType::Author,
            _ => return None,
        };
        Some(Self { group_type })
    }

    #[must_use]
    pub fn group_type(&self) -> GroupType {
        self.group_type
    }

    pub fn execute(&self, data: &LibraryData, console: &mut dyn Console) {
        if data.is_empty() {
            console.line("The library has no book entries.");
            return;
        }

        match self.group_type {
            GroupType::Title => group_by_title(data.books(), console),
            GroupType::Author => group_by_author(data.books(), console),
        }
    }
}

/// One `## X` section per letter A-Z, then a single `## [0-9]` section
/// covering every title that starts with a digit.
fn group_by_title(books: &[BookEntry], console: &mut dyn Console) {
    console.line("Grouped data by TITLE");

    for letter in 'A'..='Z' {
        let found = titles_starting_with(books, letter);
        if !found.is_empty() {
            console.line(&format!("## {letter}"));
            print_indented(&found, console);
        }
    }

    let has_digit_titles = books
        .iter()
        .any(|b| b.title().starts_with(|c: char| c.is_ascii_digit()));
    if has_digit_titles {
        console.line("## [0-9]");
        for digit in '0'..='9' {
            print_indented(&titles_starting_with(books, digit), console);
        }
    }
}

fn group_by_author(books: &[BookEntry], console: &mut dyn Console) {
    console.line("Grouped data by AUTHOR");

    for author in distinct_authors(books) {
        console.line(&format!("## {author}"));
        let found: Vec<&str> = books
            .iter()
            .filter(|b| b.author_listing_contains(&author))
            .map(BookEntry::title)
            .collect();
        print_indented(&found, console);
    }
}

/// Every author name in the catalog, sorted, without repeats.
#[must_use]
pub fn distinct_authors(books: &[BookEntry]) -> Vec<String> {
    let mut authors: Vec<String> = books
        .iter()
        .flat_map(|b| b.authors().iter().cloned())
        .collect();
    authors.sort();
    authors.dedup();
    authors
}

fn titles_starting_with(books: &[BookEntry], initial: char) -> Vec<&str> {
    books
        .iter()
        .map(BookEntry::title)
        .filter(|title| title.to_uppercase().starts_with(initial))
        .collect()
}

fn print_indented(titles: &[&str], console: &mut dyn Console) {
    for title in titles {
        console.line(&format!("\t{title}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    fn book(title: &str, authors: &[&str]) -> BookEntry {
        BookEntry::new(title, authors.iter().copied(), 4.0, "1", 1).unwrap()
    }

    fn run(args: &str, data: &LibraryData) -> Vec<String> {
        let mut console = BufferConsole::new();
        GroupCmd::parse(args).unwrap().execute(data, &mut console);
        console.out
    }

    #[test]
    fn test_group_parse() {
        assert_eq!(GroupCmd::parse("TITLE").unwrap().group_type(), GroupType::Title);
        assert_eq!(GroupCmd::parse("Author").unwrap().group_type(), GroupType::Author);
        assert!(GroupCmd::parse("isbn").is_none());
        assert!(GroupCmd::parse(" title").is_none());
        assert!(GroupCmd::parse("").is_none());
    }

    #[test]
    fn test_group_empty_catalog() {
        assert_eq!(
            run("title", &LibraryData::new()),
            vec!["The library has no book entries."]
        );
    }

    #[test]
    fn test_group_by_title_letters_then_digits() {
        let data: LibraryData = [book("Dune", &["H"]), book("1984", &["O"]), book("Emma", &["A"])]
            .into_iter()
            .collect();
        assert_eq!(
            run("title", &data),
            vec![
                "Grouped data by TITLE",
                "## D",
                "\tDune",
                "## E",
                "\tEmma",
                "## [0-9]",
                "\t1984",
            ]
        );
    }

    #[test]
    fn test_group_by_title_is_case_insensitive_and_covers_z() {
        let data: LibraryData = [book("zen", &["A"]), book("Zoo", &["B"]), book("apple", &["C"])]
            .into_iter()
            .collect();
        assert_eq!(
            run("title", &data),
            vec!["Grouped data by TITLE", "## A", "\tapple", "## Z", "\tzen", "\tZoo"]
        );
    }

    #[test]
    fn test_group_by_title_digits_share_one_header() {
        let data: LibraryData = [book("9 Lives", &["A"]), book("2001", &["B"]), book("1984", &["C"])]
            .into_iter()
            .collect();
        assert_eq!(
            run("title", &data),
            vec!["Grouped data by TITLE", "## [0-9]", "\t1984", "\t2001", "\t9 Lives"]
        );
    }

    #[test]
    fn test_group_by_title_skips_other_initials() {
        let data: LibraryData = [book("¡Hola!", &["A"])].into_iter().collect();
        assert_eq!(run("title", &data), vec!["Grouped data by TITLE"]);
    }

    #[test]
    fn test_distinct_authors_sorted() {
        let books = vec![
            book("A", &["Zola", "Austen"]),
            book("B", &["Austen"]),
            book("C", &["Brontë"]),
        ];
        assert_eq!(distinct_authors(&books), vec!["Austen", "Brontë", "Zola"]);
    }

    #[test]
    fn test_group_by_author() {
        let data: LibraryData = [
            book("Emma", &["Austen"]),
            book("Good Omens", &["Pratchett", "Gaiman"]),
            book("Mort", &["Pratchett"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            run("author", &data),
            vec![
                "Grouped data by AUTHOR",
                "## Austen",
                "\tEmma",
                "## Gaiman",
                "\tGood Omens",
                "## Pratchett",
                "\tGood Omens",
                "\tMort",
            ]
        );
    }

    #[test]
    fn test_group_by_author_matches_substrings() {
        let data: LibraryData = [book("First", &["Li"]), book("Second", &["Lin"])]
            .into_iter()
            .collect();
        assert_eq!(
            run("author", &data),
            vec![
                "Grouped data by AUTHOR",
                "## Li",
                "\tFirst",
                "\tSecond",
                "## Lin",
                "\tSecond",
            ]
        );
    }
}
