use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use watchtrack_models::User;

/// Blob key used by every WatchTrack release so far
pub const DEFAULT_BLOB_KEY: &str = "watchTrackSessions";

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to do when the persisted session blob cannot be parsed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Back the blob up as `<key>.json.bak` and start with an empty history
    #[default]
    Reset,
    /// Refuse to load and report the parse error
    Fail,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_blob_key")]
    pub blob_key: String,

    #[serde(default)]
    pub on_corrupt: CorruptPolicy,

    /// Overrides the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_blob_key() -> String {
    DEFAULT_BLOB_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            blob_key: default_blob_key(),
            on_corrupt: CorruptPolicy::default(),
            data_dir: None,
        }
    }
}

/// Pre-filled values for `watchtrack add`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub user: User,
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "movie".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            user: User::default(),
            kind: default_kind(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Also write logs to a daily rolling file in the log directory
    #[serde(default)]
    pub file: bool,
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let key = self.storage.blob_key.trim();
        if key.is_empty() {
            return Err(anyhow::anyhow!("storage.blob_key cannot be empty"));
        }
        if key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(anyhow::anyhow!(
                "storage.blob_key must be a plain name, got '{}'",
                self.storage.blob_key
            ));
        }
        if self.defaults.kind.trim().is_empty() {
            return Err(anyhow::anyhow!("defaults.kind cannot be empty"));
        }
        Ok(())
    }
}
