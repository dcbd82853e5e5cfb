pub mod error;
pub mod ledger;
pub mod migration;
pub mod store;

pub use error::LedgerError;
pub use ledger::{SessionLedger, UserTotal};
pub use migration::{migrate_user, ParsedSessions, RejectedRecord, LEGACY_USERS};
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore};
