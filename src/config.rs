// Configuration module
// Settings and keybindings, filled by user_config defaults, an optional TOML
// file and finally command-line overrides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::history::DEFAULT_HISTORY_SIZE;

pub const PROMPT: &str = "prompt";
pub const HISTORY_SIZE: &str = "history_size";
pub const WIDTH: &str = "width";

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_WIDTH: usize = 42;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub keybindings: HashMap<String, String>,
    pub settings: HashMap<String, ConfigValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

/// On-disk layout of a config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    settings: HashMap<String, ConfigValue>,
    keybindings: HashMap<String, String>,
}

impl Config {
    /// Bind a key sequence to a command
    pub fn bind(&mut self, key: &str, command: &str) {
        self.keybindings
            .insert(key.to_string(), command.to_string());
    }

    /// Set a configuration value
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| match v {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Merge a TOML file over the current values
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(())
    }

    /// Merge TOML text over the current values
    pub fn merge_str(&mut self, text: &str) -> Result<(), toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        self.settings.extend(file.settings);
        self.keybindings.extend(file.keybindings);
        Ok(())
    }

    /// Check the typed settings, reporting the first bad one
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in [HISTORY_SIZE, WIDTH] {
            match self.get(key) {
                None => {}
                Some(ConfigValue::Int(i)) if *i >= 0 => {}
                Some(ConfigValue::Int(i)) => {
                    return Err(ConfigError::Invalid {
                        key: key.to_string(),
                        reason: format!("{} is negative", i),
                    });
                }
                Some(other) => {
                    return Err(ConfigError::Invalid {
                        key: key.to_string(),
                        reason: format!("expected an integer, got {:?}", other),
                    });
                }
            }
        }
        if let Some(value) = self.get(PROMPT) {
            if !matches!(value, ConfigValue::String(_)) {
                return Err(ConfigError::Invalid {
                    key: PROMPT.to_string(),
                    reason: format!("expected a string, got {:?}", value),
                });
            }
        }
        Ok(())
    }

    pub fn prompt(&self) -> &str {
        self.get_string(PROMPT).unwrap_or(DEFAULT_PROMPT)
    }

    pub fn history_size(&self) -> usize {
        self.get_usize(HISTORY_SIZE).unwrap_or(DEFAULT_HISTORY_SIZE)
    }

    /// Visible width of the input line
    pub fn width(&self) -> usize {
        self.get_usize(WIDTH).unwrap_or(DEFAULT_WIDTH)
    }

    fn get_usize(&self, key: &str) -> Option<usize> {
        self.get_int(key).and_then(|i| usize::try_from(i).ok())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<usize> for ConfigValue {
    fn from(u: usize) -> Self {
        ConfigValue::Int(i64::try_from(u).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}
