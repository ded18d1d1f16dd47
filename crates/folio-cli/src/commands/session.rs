//! The command loop: read one command per line and run it against the
//! catalog until EXIT or end of input.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use folio_core::command::AddCmd;
use folio_core::{CommandType, Console, LibraryCommand, LibraryData};

/// Whether the session should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Load a catalog file named on the command line or in the config.
///
/// The path is used as given; unlike typed ADD arguments, whitespace in it
/// is significant.
pub fn add_file(path: &Path, data: &mut LibraryData, console: &mut dyn Console) {
    match AddCmd::from_path(path) {
        Some(cmd) => cmd.execute(data, console),
        None => console.error(&format!(
            "Not a catalog file (expected .csv): {}",
            path.display()
        )),
    }
}

/// Run a single input line.
///
/// The keyword is everything before the first space and is matched without
/// regard to case; the rest of the line is handed to the command untouched.
pub fn run_line(line: &str, data: &mut LibraryData, console: &mut dyn Console) -> Flow {
    let line = line.trim();
    if line.is_empty() {
        return Flow::Continue;
    }

    let (keyword, args) = line.split_once(' ').unwrap_or((line, ""));

    if keyword.eq_ignore_ascii_case("exit") {
        return Flow::Exit;
    }
    if keyword.eq_ignore_ascii_case("help") {
        print_help(console);
        return Flow::Continue;
    }

    let kind = match keyword.parse::<CommandType>() {
        Ok(kind) => kind,
        Err(err) => {
            log::debug!("Rejected input line {line:?}");
            console.error(&format!("Invalid command input: {err}"));
            return Flow::Continue;
        }
    };

    match LibraryCommand::parse(kind, args) {
        Some(cmd) => cmd.execute(data, console),
        None => console.error(&format!("Invalid argument for the {kind} command.")),
    }
    Flow::Continue
}

/// Read commands from `input` until EXIT or end of input.
///
/// When `prompt` is set it is written to stdout before each read.
pub fn run_session(
    input: impl BufRead,
    data: &mut LibraryData,
    console: &mut dyn Console,
    prompt: Option<&str>,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if let Some(prompt) = prompt {
            let mut stdout = std::io::stdout();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command input")?;

        if run_line(&line, data, console) == Flow::Exit {
            break;
        }
    }

    log::info!("Session ended with {} books in the library", data.len());
    Ok(())
}

fn print_help(console: &mut dyn Console) {
    console.line("Available commands:");
    for kind in CommandType::ALL {
        console.line(&format!("  {}", kind.usage()));
    }
    console.line("  HELP");
    console.line("  EXIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::BufferConsole;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn catalog_file(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("books.csv");
        std::fs::write(
            &path,
            "title,authors,rating,isbn,pages\nDune,Herbert,4.5,123,400\nEmma,Austen,4.0,456,474\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_run_line_ignores_blank() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        assert_eq!(run_line("   ", &mut data, &mut console), Flow::Continue);
        assert!(console.out.is_empty());
        assert!(console.err.is_empty());
    }

    #[test]
    fn test_run_line_exit_any_case() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        assert_eq!(run_line("Exit", &mut data, &mut console), Flow::Exit);
    }

    #[test]
    fn test_run_line_unknown_keyword() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        run_line("BORROW Dune", &mut data, &mut console);
        assert_eq!(
            console.err,
            vec!["ERROR: Invalid command input: unknown command: BORROW"]
        );
    }

    #[test]
    fn test_run_line_invalid_arguments_do_not_execute() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        run_line("LIST everything", &mut data, &mut console);
        assert!(console.out.is_empty());
        assert_eq!(console.err, vec!["ERROR: Invalid argument for the LIST command."]);
    }

    #[test]
    fn test_run_line_dispatches_lowercase_keyword() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        run_line("list", &mut data, &mut console);
        assert_eq!(console.out, vec!["The library has no books"]);
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        run_line("help", &mut data, &mut console);
        let text = console.stdout();
        for kind in CommandType::ALL {
            assert!(text.contains(kind.keyword()));
        }
        assert!(text.contains("EXIT"));
    }

    #[test]
    fn test_add_file_rejects_non_csv() {
        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        add_file(Path::new("books.txt"), &mut data, &mut console);
        assert!(data.is_empty());
        assert_eq!(console.err.len(), 1);
    }

    #[test]
    fn test_add_file_keeps_spaces_in_path() {
        let dir = TempDir::new().unwrap();
        let books_dir = dir.path().join("My Books");
        std::fs::create_dir(&books_dir).unwrap();
        let path = books_dir.join("lib.csv");
        std::fs::write(&path, "title,authors,rating,isbn,pages\nDune,Herbert,4.5,123,400\n")
            .unwrap();

        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        add_file(&path, &mut data, &mut console);

        assert!(console.err.is_empty(), "unexpected errors: {:?}", console.err);
        assert_eq!(data.len(), 1);
        assert_eq!(data.books()[0].title(), "Dune");
    }

    #[test]
    fn test_session_runs_until_exit() {
        let dir = TempDir::new().unwrap();
        let path = catalog_file(&dir);
        let script = format!(
            "ADD {}\nsearch emma\nREMOVE title Dune\nEXIT\nLIST\n",
            path.display()
        );

        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        run_session(Cursor::new(script), &mut data, &mut console, None).unwrap();

        assert_eq!(console.out, vec!["Emma", "Dune: removed successfully."]);
        assert!(console.err.is_empty());
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_session_stops_at_end_of_input() {
        let dir = TempDir::new().unwrap();
        let path = catalog_file(&dir);

        let mut data = LibraryData::new();
        let mut console = BufferConsole::new();
        add_file(&path, &mut data, &mut console);
        run_session(Cursor::new("LIST short"), &mut data, &mut console, None).unwrap();

        assert_eq!(console.out, vec!["2 books in library:", "Dune", "Emma"]);
    }
}
