use crate::error::{BoardError, Result};
use crate::store::fs::{record_name, DEFAULT_RECORD_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_NAME: &str = "Untitled Page";

/// Keys accepted by [`BoardConfig::get`] and [`BoardConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["storage-name", "default-page-name", "sidebar-open"];

/// Configuration for corkboard, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Name of the persisted snapshot record (without `.json`)
    #[serde(default = "default_storage_name")]
    pub storage_name: String,

    /// Name given to the page created when the board has none
    #[serde(default = "default_page_name")]
    pub default_page_name: String,

    /// Sidebar state for a board that has never been saved
    #[serde(default = "default_sidebar_open")]
    pub start_with_sidebar_open: bool,
}

fn default_storage_name() -> String {
    DEFAULT_RECORD_NAME.to_string()
}

fn default_page_name() -> String {
    DEFAULT_PAGE_NAME.to_string()
}

fn default_sidebar_open() -> bool {
    true
}

fn invalid_storage_name(name: &str) -> BoardError {
    BoardError::Config(format!("invalid storage name `{}`", name))
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_name: default_storage_name(),
            default_page_name: default_page_name(),
            start_with_sidebar_open: default_sidebar_open(),
        }
    }
}

impl BoardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BoardError::Io)?;
        let config: BoardConfig =
            serde_json::from_str(&content).map_err(BoardError::Serialization)?;
        if record_name(&config.storage_name).is_none() {
            return Err(invalid_storage_name(&config.storage_name));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BoardError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BoardError::Serialization)?;
        fs::write(config_path, content).map_err(BoardError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-name" => Some(self.storage_name.clone()),
            "default-page-name" => Some(self.default_page_name.clone()),
            "sidebar-open" => Some(self.start_with_sidebar_open.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage-name" => {
                let name = record_name(value).ok_or_else(|| invalid_storage_name(value))?;
                self.storage_name = name.to_string();
            }
            "default-page-name" => {
                if value.is_empty() {
                    return Err(BoardError::Config(
                        "default page name cannot be empty".to_string(),
                    ));
                }
                self.default_page_name = value.to_string();
            }
            "sidebar-open" => {
                self.start_with_sidebar_open = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(BoardError::Config(format!(
                            "expected true or false, got `{}`",
                            value
                        )))
                    }
                };
            }
            other => {
                return Err(BoardError::Config(format!(
                    "unknown config key `{}` (known: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
