//! Library commands.
//!
//! A command is built from its keyword and the raw argument text that
//! followed it. Building runs the argument validation, so a
//! [`LibraryCommand`] value only exists once its arguments are known to be
//! usable and can always be executed.

pub mod add;
pub mod group;
pub mod list;
pub mod remove;
pub mod search;

use std::fmt;
use std::str::FromStr;

use crate::catalog::LibraryData;
use crate::console::Console;
use crate::error::Error;

pub use add::AddCmd;
pub use group::{GroupCmd, GroupType};
pub use list::{ListCmd, ListMode};
pub use remove::{RemoveCmd, RemoveType};
pub use search::SearchCmd;

/// Keyword that selects a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Add,
    List,
    Search,
    Group,
    Remove,
}

impl CommandType {
    pub const ALL: [Self; 5] = [Self::Add, Self::List, Self::Search, Self::Group, Self::Remove];

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::List => "LIST",
            Self::Search => "SEARCH",
            Self::Group => "GROUP",
            Self::Remove => "REMOVE",
        }
    }

    /// One-line usage string.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Add => "ADD <file.csv>",
            Self::List => "LIST [short|long]",
            Self::Search => "SEARCH <term>",
            Self::Group => "GROUP author|title",
            Self::Remove => "REMOVE title <title> | REMOVE author <author>",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for CommandType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

/// A validated command, ready to run against a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryCommand {
    Add(AddCmd),
    List(ListCmd),
    Search(SearchCmd),
    Group(GroupCmd),
    Remove(RemoveCmd),
}

impl LibraryCommand {
    /// Parse `args` for the given command, returning `None` when they are
    /// not valid for it.
    #[must_use]
    pub fn parse(kind: CommandType, args: &str) -> Option<Self> {
        match kind {
            CommandType::Add => AddCmd::parse(args).map(Self::Add),
            CommandType::List => ListCmd::parse(args).map(Self::List),
            CommandType::Search => SearchCmd::parse(args).map(Self::Search),
            CommandType::Group => GroupCmd::parse(args).map(Self::Group),
            CommandType::Remove => RemoveCmd::parse(args).map(Self::Remove),
        }
    }

    /// Whether `args` are valid arguments for `kind`.
    #[must_use]
    pub fn validate(kind: CommandType, args: &str) -> bool {
        Self::parse(kind, args).is_some()
    }

    #[must_use]
    pub fn command_type(&self) -> CommandType {
        match self {
            Self::Add(_) => CommandType::Add,
            Self::List(_) => CommandType::List,
            Self::Search(_) => CommandType::Search,
            Self::Group(_) => CommandType::Group,
            Self::Remove(_) => CommandType::Remove,
        }
    }

    pub fn execute(&self, data: &mut LibraryData, console: &mut dyn Console) {
        log::debug!("Executing {:?}", self);
        match self {
            Self::Add(cmd) => cmd.execute(data, console),
            Self::List(cmd) => cmd.execute(data, console),
            Self::Search(cmd) => cmd.execute(data, console),
            Self::Group(cmd) => cmd.execute(data, console),
            Self::Remove(cmd) => cmd.execute(data, console),
        }
    }
}
