use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path: show_path,
        init,
        force,
    } = cmd
    {
        if *show_path {
            println!("{}", path.display());
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *init {
            if path.exists() && !*force {
                warning(format!(
                    "Configuration file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            } else {
                Config::default().save_to(path)?;
                success(format!("Config file: {}", path.display()));
            }
        }
    }
    Ok(())
}
