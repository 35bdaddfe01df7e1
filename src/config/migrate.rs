//! Configuration file upgrades: detect fields missing from an older
//! `rhabits.conf` and fill them with their defaults, keeping every value the
//! user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(e.to_string())),
    }
}

/// Keys present in the default configuration but absent from `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Print a report of missing fields. Returns `true` when the file is complete.
pub fn check_config(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;

    if missing.is_empty() {
        success(format!("Configuration file {} is complete.", path.display()));
        return Ok(true);
    }

    warning(format!(
        "Configuration file {} is missing {} field(s):",
        path.display(),
        missing.len()
    ));
    for key in &missing {
        println!("   - {}", key);
    }
    info("Run `rhabits config --migrate` to add them with default values.");
    Ok(false)
}

/// Add every missing field with its default value and rewrite the file.
/// Returns the number of fields added.
pub fn migrate_config(path: &Path) -> AppResult<usize> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = 0;
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            current.insert(k, v);
            added += 1;
        }
    }

    if added == 0 {
        info("Configuration already up to date.");
        return Ok(0);
    }

    let yaml =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: {} field(s) added to {}",
        added,
        path.display()
    ));
    Ok(added)
}
