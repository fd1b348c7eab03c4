//! Configuration file checks: report keys missing from an older/hand-edited
//! file and fill them with defaults.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file should carry.
pub const EXPECTED_KEYS: &[&str] = &[
    "database",
    "work_hours",
    "tolerance",
    "separator_char",
    "show_weekday",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys absent from the file. `work_hours: null` counts as missing.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| match map.get(Value::String((*k).to_string())) {
            None | Some(Value::Null) => true,
            Some(_) => false,
        })
        .collect())
}

/// Print the result of [`missing_keys`].
pub fn check_config(path: &Path) -> AppResult<bool> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
        return Ok(true);
    }

    for key in &missing {
        warning(format!("Missing configuration key: {key}"));
    }
    Ok(false)
}

/// Fill missing keys with defaults and write the file back.
///
/// `work_hours` has no sensible default: it stays unset and the user is
/// told to edit it. Returns the keys that were added.
pub fn migrate_config(path: &Path, defaults: &super::Config) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;
    let default_value = serde_yaml::to_value(defaults)?;

    let mut added = Vec::new();
    for key in EXPECTED_KEYS {
        let k = Value::String((*key).to_string());
        let present = !matches!(map.get(&k), None | Some(Value::Null));
        if present {
            continue;
        }

        if *key == "work_hours" {
            warning("work_hours is not set: run `timebank config --edit` (minutes per day, e.g. 480)");
            continue;
        }

        if let Some(v) = default_value.get(*key) {
            map.insert(k, v.clone());
            added.push((*key).to_string());
        }
    }

    if added.is_empty() {
        info("No configuration migration needed.");
        return Ok(added);
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    success(format!("Configuration updated, added: {}", added.join(", ")));
    Ok(added)
}
