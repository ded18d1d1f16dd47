use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{LibraryData, StdConsole};
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file to load before reading commands (repeatable)
    #[arg(long = "load", value_name = "CSV")]
    load: Vec<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Do not print a prompt, even on a terminal
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage configuration
    ///
    /// Configuration is layered: FOLIO_* environment variables override the
    /// config file, which overrides built-in defaults.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Only `show` reads the config file; path/example/init must work when it is malformed.
        Some(Commands::Config { action }) => {
            init_logging(DEFAULT_LOG_FILTER);
            match action {
                ConfigAction::Show => commands::config::show_config()?,
                ConfigAction::Path => commands::config::show_path()?,
                ConfigAction::Example => commands::config::show_example()?,
                ConfigAction::Init => commands::config::init_config()?,
            }
        }
        None => {
            let config = Config::load()?;
            init_logging(&config.log_level);

            let mut data = LibraryData::new();
            let mut console = StdConsole;

            for path in config.library_files.iter().chain(&cli.load) {
                commands::session::add_file(path, &mut data, &mut console);
            }

            if let Some(script) = cli.script {
                let file = File::open(&script)
                    .with_context(|| format!("Failed to open script {}", script.display()))?;
                commands::run_session(BufReader::new(file), &mut data, &mut console, None)?;
            } else {
                let stdin = std::io::stdin();
                let prompt = (!cli.quiet && stdin.is_terminal()).then_some(config.prompt.as_str());
                commands::run_session(stdin.lock(), &mut data, &mut console, prompt)?;
            }
        }
    }

    Ok(())
}
