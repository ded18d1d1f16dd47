use std::fmt;

use crate::error::{Error, Result};
use crate::model::isbn::Isbn;

/// Upper bound of the rating scale.
pub const MAX_RATING: f32 = 5.0;

/// A single book record in the catalog.
///
/// Entries are validated on construction and immutable afterwards. Authors
/// are kept in sorted order, so two entries that differ only in the order
/// their authors were given compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry {
    title: String,
    authors: Vec<String>,
    rating: f32,
    isbn: Isbn,
    pages: u32,
}

impl BookEntry {
    /// Build an entry, rejecting a rating outside `0..=5` (or NaN) and a
    /// negative page count.
    pub fn new<A, S>(
        title: impl Into<String>,
        authors: A,
        rating: f32,
        isbn: impl Into<Isbn>,
        pages: i32,
    ) -> Result<Self>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(Error::InvalidRating(rating));
        }
        let pages = u32::try_from(pages).map_err(|_| Error::NegativePages(pages))?;

        let mut authors: Vec<String> = authors.into_iter().map(Into::into).collect();
        authors.sort();

        Ok(Self {
            title: title.into(),
            authors,
            rating,
            isbn: isbn.into(),
            pages,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Authors in sorted order.
    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    #[must_use]
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Bracketed author list, e.g. `[Frank Herbert, Kevin J. Anderson]`.
    ///
    /// Author grouping and author removal match terms as substrings of this
    /// rendering, not against individual names.
    #[must_use]
    pub fn author_listing(&self) -> String {
        format!("[{}]", self.authors.join(", "))
    }

    /// Whether `term` occurs anywhere in [`Self::author_listing`].
    #[must_use]
    pub fn author_listing_contains(&self, term: &str) -> bool {
        self.author_listing().contains(term)
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors.join(", "))?;
        writeln!(f, "Rating: {:.2}", self.rating)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        write!(f, "{} pages", self.pages)
    }
}
