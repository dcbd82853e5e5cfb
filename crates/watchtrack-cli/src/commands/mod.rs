pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod history;
pub mod prompts;
pub mod summary;

use crate::output::Output;
use crate::render;
use color_eyre::Result;
use serde_json::json;
use watchtrack_config::{Config, PathManager};
use watchtrack_core::{FileBlobStore, SessionLedger};

/// Resolved paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn new(paths: PathManager, config: Config) -> Self {
        let paths = match &config.storage.data_dir {
            Some(dir) => paths.with_data_dir(dir),
            None => paths,
        };
        Self { paths, config }
    }

    pub fn open_ledger(&self) -> Result<SessionLedger<FileBlobStore>> {
        let store = FileBlobStore::from_paths(&self.paths).map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to prepare data directory {}: {}",
                self.paths.data_dir().display(),
                e
            )
        })?;
        let ledger = SessionLedger::open(
            store,
            self.config.storage.blob_key.clone(),
            self.config.storage.on_corrupt,
        )?;
        Ok(ledger)
    }
}

/// Show the refreshed per-user totals after a mutation
pub(crate) fn print_summary(ledger: &SessionLedger<FileBlobStore>, output: &Output) {
    let totals = ledger.summary();
    if output.is_human() {
        output.println(render::summary_table(&totals));
    } else {
        output.json(&json!({
            "type": "summary",
            "totals": render::summary_json(&totals),
        }));
    }
}
