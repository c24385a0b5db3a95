//! Config Store
//!
//! JSON key-value settings kept in the tool directory. The file is created
//! lazily; unreadable JSON is treated as an empty configuration.

use crate::error::{Result, ShacnifyError};
use crate::utils::paths;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const LIST_DELIMITER: char = ',';

pub struct ConfigStore {
    config_file: PathBuf,
    values: Map<String, Value>,
}

impl ConfigStore {
    /// Load the user's configuration, creating it on first use
    pub fn load() -> Result<Self> {
        Self::load_from(paths::config_file()?)
    }

    pub fn load_from(config_file: PathBuf) -> Result<Self> {
        ensure_exists(&config_file)?;

        let content = fs::read_to_string(&config_file).map_err(|e| ShacnifyError::IoError {
            path: config_file.clone(),
            source: e,
        })?;

        let values = parse_config(&content).unwrap_or_else(|| {
            tracing::warn!(
                "Config file {} is not a JSON object, using empty configuration",
                config_file.display()
            );
            Map::new()
        });

        Ok(Self {
            config_file,
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config_file
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Read a list value. A plain string counts as a one-item list.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        match self.values.get(key)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Value::String(s) if !s.trim().is_empty() => Some(vec![s.trim().to_string()]),
            _ => None,
        }
    }

    /// Set a value and persist it. Comma separated input becomes a list.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(ShacnifyError::ConfigError(
                "Config key cannot be empty".to_string(),
            ));
        }

        self.values.insert(key.to_string(), parse_value(value));
        self.save()?;
        tracing::info!("Config updated: {} = {}", key, value);

        Ok(())
    }

    pub fn all(&self) -> &Map<String, Value> {
        &self.values
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_file.parent() {
            fs::create_dir_all(parent).map_err(|e| ShacnifyError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.config_file, content).map_err(|e| ShacnifyError::IoError {
            path: self.config_file.clone(),
            source: e,
        })?;

        Ok(())
    }
}

fn ensure_exists(config_file: &Path) -> Result<()> {
    if config_file.exists() {
        return Ok(());
    }

    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).map_err(|e| ShacnifyError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(config_file, "{}").map_err(|e| ShacnifyError::IoError {
        path: config_file.to_path_buf(),
        source: e,
    })
}

fn parse_config(content: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Turn raw CLI input into a stored value
pub fn parse_value(value: &str) -> Value {
    if value.contains(LIST_DELIMITER) {
        let items = value
            .split(LIST_DELIMITER)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(item.to_string()))
            .collect();
        Value::Array(items)
    } else {
        Value::String(value.to_string())
    }
}

/// Human readable rendering used by `config view`
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
