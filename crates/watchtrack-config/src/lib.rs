pub mod config;
pub mod paths;

pub use config::{Config, CorruptPolicy, DefaultsConfig, LoggingConfig, StorageConfig, DEFAULT_BLOB_KEY};
pub use paths::{home_override, PathManager, HOME_ENV};
