use crate::errors::{AppError, AppResult};
use crate::models::periodicity::Periodicity;
use crate::utils::path::{expand_tilde, resolve_under};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_periodicity")]
    pub default_periodicity: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_reconcile_status")]
    pub show_reconcile_status: bool,
    #[serde(default = "default_demo_window_start")]
    pub demo_window_start: String,
    #[serde(default = "default_demo_window_end")]
    pub demo_window_end: String,
}

fn default_periodicity() -> String {
    "daily".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_reconcile_status() -> bool {
    true
}
fn default_demo_window_start() -> String {
    "2021-01-01".to_string()
}
fn default_demo_window_end() -> String {
    "2021-06-30".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_periodicity: default_periodicity(),
            separator_char: default_separator_char(),
            show_reconcile_status: default_show_reconcile_status(),
            demo_window_start: default_demo_window_start(),
            demo_window_end: default_demo_window_end(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhabits")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rhabits")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhabits.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhabits.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Periodicity used by `add` when `--period` is omitted.
    pub fn default_periodicity(&self) -> AppResult<Periodicity> {
        Periodicity::from_code(&self.default_periodicity)
            .ok_or_else(|| AppError::InvalidPeriodicity(self.default_periodicity.clone()))
    }

    /// Database path with a leading `~/` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => resolve_under(&dir, &name),
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
