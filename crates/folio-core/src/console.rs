//! Line-oriented output used by the loader and the commands.
//!
//! Everything user-visible goes through a [`Console`] handed in by the
//! caller, so tests can capture output with [`BufferConsole`] instead of
//! reading the process streams.

/// Prefix attached to every line written to the error stream.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Sink for command output and error reports.
pub trait Console {
    /// Write one line to the output stream.
    fn line(&mut self, text: &str);

    /// Write one line to the error stream, prefixed with [`ERROR_PREFIX`].
    fn error(&mut self, message: &str);
}

/// Writes to the process's stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn error(&mut self, message: &str) {
        eprintln!("{ERROR_PREFIX}{message}");
    }
}

/// Collects output in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    pub out: Vec<String>,
    pub err: Vec<String>,
}

impl BufferConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured output joined with newlines, as it would have printed.
    #[must_use]
    pub fn stdout(&self) -> String {
        self.out.iter().map(|l| format!("{l}\n")).collect()
    }

    pub fn clear(&mut self) {
        self.out.clear();
        self.err.clear();
    }
}

impl Console for BufferConsole {
    fn line(&mut self, text: &str) {
        self.out.push(text.to_string());
    }

    fn error(&mut self, message: &str) {
        self.err.push(format!("{ERROR_PREFIX}{message}"));
    }
}
