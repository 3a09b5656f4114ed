use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Data file; relative paths are resolved against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Days ahead `birthdays` looks when no argument is given
    #[serde(default = "default_birthday_window")]
    pub birthday_window: u32,

    /// Save after every change instead of only at exit
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

fn default_autosave() -> bool {
    true
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window: default_birthday_window(),
            autosave: default_autosave(),
        }
    }
}

impl BookConfig {
    pub const KEYS: &'static [&'static str] = &["data-file", "birthday-window", "autosave"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    pub fn data_path(&self, home: &Path) -> PathBuf {
        let path = PathBuf::from(&self.data_file);
        if path.is_absolute() {
            path
        } else {
            home.join(path)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "birthday-window" => Some(self.birthday_window.to_string()),
            "autosave" => Some(self.autosave.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(BookError::Usage("config data-file <path>".to_string()));
                }
                self.data_file = value.trim().to_string();
            }
            "birthday-window" => {
                self.birthday_window = crate::validation::parse_days(value)?;
            }
            "autosave" => {
                self.autosave = match value.to_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => return Err(BookError::Usage("config autosave <true|false>".to_string())),
                };
            }
            other => {
                return Err(BookError::Usage(format!(
                    "unknown config key '{}', expected one of: {}",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
