use crate::core::supplier::ConfigProvider;
use crate::errors::{AppError, AppResult};
use crate::models::balance_config::{BalanceConfig, DEFAULT_TOLERANCE};
use crate::utils::path::resolve_in_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Overrides the configuration directory (used by tests and portable installs).
pub const HOME_ENV: &str = "TIMEBANK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Contractual minutes per day. Unset until the user configures it.
    #[serde(default)]
    pub work_hours: Option<i64>,
    #[serde(default = "default_tolerance")]
    pub tolerance: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
}

fn default_tolerance() -> i64 {
    DEFAULT_TOLERANCE
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> String {
    "None".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            work_hours: None,
            tolerance: default_tolerance(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timebank")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timebank.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timebank.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(?cfg, "loaded configuration");
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(
        custom_db: Option<String>,
        work_hours: Option<i64>,
        tolerance: Option<i64>,
    ) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => resolve_in_dir(&dir, &name),
            None => Self::database_file(),
        };

        // Keep whatever the user already configured
        let previous = Self::load().ok();

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            work_hours: work_hours.or(previous.as_ref().and_then(|c| c.work_hours)),
            tolerance: tolerance
                .or(previous.as_ref().map(|c| c.tolerance))
                .unwrap_or(DEFAULT_TOLERANCE),
            separator_char: previous
                .as_ref()
                .map(|c| c.separator_char.clone())
                .unwrap_or_else(default_separator_char),
            show_weekday: previous
                .as_ref()
                .map(|c| c.show_weekday.clone())
                .unwrap_or_else(default_show_weekday),
        };

        config.save().map_err(|e| io::Error::other(e.to_string()))?;
        println!("✅ Config file: {:?}", Self::config_file());

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

impl ConfigProvider for Config {
    fn balance_config(&self) -> Option<BalanceConfig> {
        self.work_hours
            .map(|minutes| BalanceConfig::new(minutes, Some(self.tolerance)))
    }
}
