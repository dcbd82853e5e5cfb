use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable that relocates every WatchTrack directory under one base
pub const HOME_ENV: &str = "WATCHTRACK_HOME";

pub fn home_override() -> Option<PathBuf> {
    std::env::var(HOME_ENV).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("watchtrack");

        Ok(Self::from_base(base_dir))
    }

    /// Config file at the base, data and logs in subdirectories
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    /// Point the data directory somewhere else (from `storage.data_dir`)
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("watchtrack.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = home_override() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/watchtrack on Linux)
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".watchtrack")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_layout() {
        let paths = PathManager::from_base("/tmp/wt");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/wt/config.toml"));
        assert_eq!(paths.data_dir(), Path::new("/tmp/wt/data"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/wt/logs/watchtrack.log"));
    }

    #[test]
    fn test_with_data_dir_overrides_only_data() {
        let paths = PathManager::from_base("/tmp/wt").with_data_dir("/srv/blobs");
        assert_eq!(paths.data_dir(), Path::new("/srv/blobs"));
        assert_eq!(paths.log_dir(), Path::new("/tmp/wt/logs"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path().join("base"));
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }
}
