use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    if config.library_files.is_empty() {
        println!("  library_files: <none>");
    } else {
        println!("  library_files:");
        for path in &config.library_files {
            println!("    {}", path.display());
        }
    }
    println!("  prompt: {:?}", config.prompt);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: ENV vars (FOLIO_*) > Config file > Defaults");
    println!("--load files are added after library_files; RUST_LOG overrides log_level.");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure folio.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
