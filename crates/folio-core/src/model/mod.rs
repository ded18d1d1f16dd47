pub mod book;
pub mod isbn;

pub use book::BookEntry;
pub use isbn::Isbn;
