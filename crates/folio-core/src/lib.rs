//! Core catalog model and commands for folio.
//!
//! This crate defines the [`BookEntry`] record, the CSV file loader, the
//! in-memory [`LibraryData`] catalog and the five library commands (ADD,
//! LIST, SEARCH, GROUP, REMOVE) that read and mutate it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod command;
pub mod console;
pub mod error;
pub mod loader;
pub mod model;

pub use catalog::LibraryData;
pub use command::{CommandType, LibraryCommand};
pub use console::{BufferConsole, Console, StdConsole};
pub use error::{Error, Result};
pub use loader::LibraryFileLoader;
pub use model::{BookEntry, Isbn};
