use crate::config::Config;
use crate::config::migrate::{check_config, migrate_config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);

        if cfg.work_hours.is_none() {
            warning("work_hours is not set: balances stay at zero until it is configured.");
        }
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(false);
        }
        check_config(path)
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no configuration file at {} (run `timebank init`)",
                path.display()
            )));
        }
        migrate_config(path, &Config::default())?;
        Ok(())
    }

    /// Opens the file in the first editor that works: `editor`, then
    /// `$EDITOR`/`$VISUAL`, then the platform default. The edited file must
    /// still parse.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let platform_default = if cfg!(target_os = "windows") { "notepad" } else { "nano" };

        let candidates: Vec<String> = [
            editor.clone(),
            std::env::var("EDITOR").ok(),
            std::env::var("VISUAL").ok(),
            Some(platform_default.to_string()),
        ]
        .into_iter()
        .flatten()
        .filter(|e| !e.trim().is_empty())
        .collect();

        let used = candidates
            .iter()
            .find(|e| match Command::new(e.as_str()).arg(path).status() {
                Ok(status) if status.success() => true,
                _ => {
                    warning(format!("Editor '{}' not available or failed", e));
                    false
                }
            })
            .ok_or_else(|| AppError::Config("no working editor found".into()))?;

        let content = std::fs::read_to_string(path)?;
        let edited: Config = serde_yaml::from_str(&content)?;
        success(format!("Configuration file edited with '{}'", used));

        if edited.work_hours.is_none() {
            warning("work_hours is still not set.");
        }
        Ok(())
    }
}
