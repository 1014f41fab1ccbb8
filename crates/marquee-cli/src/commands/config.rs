//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the file the configuration was loaded from (or would be).
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            if init_config(path, force)? {
                println!("{}", formatter.success(&format!("Wrote {}", path.display())));
            } else {
                println!(
                    "{}",
                    formatter.warning(&format!(
                        "{} already exists; use --force to overwrite",
                        path.display()
                    ))
                );
            }
        }
    }
    Ok(())
}

/// Write a default configuration file. Returns false if one exists and
/// `force` is not set.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default().save_to(path)?;
    Ok(true)
}
