use crate::error::{CharsheetError, Result};
use crate::format::MarkdownOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "cyberpunk-character-profile";

/// Keys accepted by [`CharsheetConfig::get`] and [`CharsheetConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["storage-key", "export-dir", "skip-empty-headings"];

/// Configuration for charsheet, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharsheetConfig {
    /// Key the profile blob is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Where exports are written; the current directory when unset
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Omit Markdown headings that would have no fields under them
    #[serde(default)]
    pub skip_empty_headings: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for CharsheetConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            export_dir: None,
            skip_empty_headings: false,
        }
    }
}

impl CharsheetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CharsheetError::Io)?;
        let config: CharsheetConfig =
            serde_json::from_str(&content).map_err(CharsheetError::Serialization)?;
        Ok(config)
    }

    /// Like [`CharsheetConfig::load`], but an unreadable or corrupt file yields the
    /// defaults with a warning.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref();
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!(
                dir = %config_dir.display(),
                error = %e,
                "ignoring unusable config, using defaults"
            );
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CharsheetError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CharsheetError::Serialization)?;
        fs::write(config_path, content).map_err(CharsheetError::Io)?;
        Ok(())
    }

    pub fn markdown_options(&self) -> MarkdownOptions {
        MarkdownOptions {
            skip_empty_headings: self.skip_empty_headings,
        }
    }

    /// Export directory, falling back to `cwd`.
    pub fn export_dir_or(&self, cwd: &Path) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| cwd.to_path_buf())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string()),
            ),
            "skip-empty-headings" => Some(self.skip_empty_headings.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(CharsheetError::Config(format!(
                        "Invalid storage key: {}",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "export-dir" => {
                self.export_dir = match value.trim() {
                    "" | "." => None,
                    dir => Some(PathBuf::from(dir)),
                };
            }
            "skip-empty-headings" => {
                self.skip_empty_headings = parse_bool(value).ok_or_else(|| {
                    CharsheetError::Config(format!("Expected true or false, got: {}", value))
                })?;
            }
            other => {
                return Err(CharsheetError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
