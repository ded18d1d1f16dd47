use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for folio.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (FOLIO_* prefix, highest priority)
/// 2. Config file (~/.config/folio/config.toml)
/// 3. Built-in defaults (lowest priority)
///
/// `--load` files are loaded after `library_files` rather than replacing
/// them, and `RUST_LOG` takes precedence over `log_level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog files loaded at startup, in order, before any `--load` files.
    ///
    /// Each path must end in `.csv`; it is otherwise used exactly as written.
    #[serde(default)]
    pub library_files: Vec<PathBuf>,

    /// Prompt shown before each command in an interactive session.
    ///
    /// Can be set via:
    /// - ENV: FOLIO_PROMPT
    /// - Config: prompt = "> "
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "folio_core=debug").
    ///
    /// Can be set via:
    /// - ENV: FOLIO_LOG_LEVEL
    /// - Config: log_level = "info"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_files: Vec::new(),
            prompt: default_prompt(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("folio");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }
}

fn default_prompt() -> String {
    String::from("> ")
}

fn default_log_level() -> String {
    String::from("warn")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/folio/config.toml
/// - macOS: ~/Library/Application Support/folio/config.toml
/// - Windows: %APPDATA%\folio\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Folio Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. Environment variables (FOLIO_* prefix, highest priority)
# 2. This config file
# 3. Built-in defaults (lowest priority)
#
# Files given with --load are loaded after library_files, not instead of them.

# Catalog files to load when a session starts, before any --load files.
# Each must end in .csv. Header line first, then one record per line:
#   title,author1-author2,rating,isbn,pages
#library_files = ["/path/to/books.csv"]

# Prompt shown in interactive sessions
prompt = "> "

# Log filter used when RUST_LOG is not set
#
# Can also be set via:
# - Environment: FOLIO_LOG_LEVEL=debug
log_level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
