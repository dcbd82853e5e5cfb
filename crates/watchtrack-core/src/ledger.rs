use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use watchtrack_config::CorruptPolicy;
use watchtrack_models::{Session, SessionDraft, User, WatchTotal};

use crate::error::{LedgerError, Result};
use crate::migration::parse_sessions;
use crate::store::BlobStore;

/// Net watch time for one user
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UserTotal {
    pub user: User,
    #[serde(flatten)]
    pub total: WatchTotal,
}

/// The ordered session history and its persisted blob.
///
/// The ledger is the only writer of the blob. Sessions are kept newest-first and
/// every mutation rewrites the whole blob before returning.
pub struct SessionLedger<S: BlobStore> {
    store: S,
    key: String,
    on_corrupt: CorruptPolicy,
    sessions: Vec<Session>,
}

impl<S: BlobStore> SessionLedger<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            on_corrupt: CorruptPolicy::default(),
            sessions: Vec::new(),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    /// Create a ledger and load its current contents
    pub fn open(store: S, key: impl Into<String>, policy: CorruptPolicy) -> Result<Self> {
        let mut ledger = Self::new(store, key).with_corrupt_policy(policy);
        ledger.load()?;
        Ok(ledger)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the in-memory history with the persisted one.
    ///
    /// A missing blob yields an empty history. Legacy user identifiers are
    /// migrated in memory only.
    pub fn load(&mut self) -> Result<()> {
        let blob = self.store.get(&self.key).map_err(|source| LedgerError::Storage {
            key: self.key.clone(),
            source,
        })?;

        let Some(blob) = blob else {
            debug!("No stored sessions under {}, starting empty", self.key);
            self.sessions.clear();
            return Ok(());
        };

        match parse_sessions(&blob) {
            Ok(parsed) => {
                if !parsed.rejected.is_empty() {
                    for rejected in &parsed.rejected {
                        warn!(
                            "Skipping unreadable session {} in {}: {}",
                            rejected.id.as_deref().unwrap_or("<no id>"),
                            self.key,
                            rejected.reason
                        );
                    }
                    self.backup_blob();
                }
                debug!("Loaded {} sessions from {}", parsed.sessions.len(), self.key);
                self.sessions = parsed.sessions;
                Ok(())
            }
            Err(source) => match self.on_corrupt {
                CorruptPolicy::Fail => Err(LedgerError::Corrupt {
                    key: self.key.clone(),
                    source,
                }),
                CorruptPolicy::Reset => {
                    warn!(
                        "Stored sessions under {} are malformed: {}. Starting with an empty history.",
                        self.key, source
                    );
                    self.backup_blob();
                    self.sessions.clear();
                    Ok(())
                }
            },
        }
    }

    /// Keep a copy of the current blob before the next save replaces it
    fn backup_blob(&mut self) {
        match self.store.backup(&self.key) {
            Ok(Some(location)) => warn!("Original sessions kept at {}", location),
            Ok(None) => {}
            Err(e) => warn!("Failed to back up stored sessions: {}", e),
        }
    }

    /// Overwrite the blob with the full in-memory history
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.sessions)?;
        self.store
            .set(&self.key, &json)
            .map_err(|source| LedgerError::Storage {
                key: self.key.clone(),
                source,
            })?;
        debug!("Saved {} sessions to {}", self.sessions.len(), self.key);
        Ok(())
    }

    /// Insert a session at the front of the history and persist
    pub fn add(&mut self, session: Session) -> Result<()> {
        info!(
            "Adding session {} for {}: {} ({})",
            session.id,
            session.user,
            session.title,
            session.format_duration()
        );
        self.sessions.insert(0, session);
        self.save()
    }

    /// Turn a validated draft into a session with a fresh id and add it
    pub fn record(&mut self, draft: SessionDraft, now: DateTime<Utc>) -> Result<&Session> {
        let id = self.next_id(now);
        self.add(draft.into_session(id, now))?;
        Ok(&self.sessions[0])
    }

    /// Remove the session with `id`. Unknown ids are not an error.
    ///
    /// Returns whether a session was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        let removed = self.sessions.len() != before;
        if removed {
            info!("Deleted session {}", id);
        } else {
            debug!("Delete of unknown session {} ignored", id);
        }
        self.save()?;
        Ok(removed)
    }

    /// Drop every session and persist. Confirmation is the caller's job.
    ///
    /// Returns how many sessions were removed.
    pub fn clear_all(&mut self) -> Result<usize> {
        let count = self.sessions.len();
        self.sessions.clear();
        info!("Cleared {} sessions", count);
        self.save()?;
        Ok(count)
    }

    /// Net watch time for `user` over the surviving sessions
    pub fn aggregate_for(&self, user: User) -> WatchTotal {
        let total = self
            .sessions
            .iter()
            .filter(|s| s.user == user)
            .map(Session::total_minutes)
            .fold(0i64, i64::saturating_add);
        WatchTotal::from_minutes(total)
    }

    /// Totals for every user, in display order
    pub fn summary(&self) -> Vec<UserTotal> {
        User::ALL
            .iter()
            .map(|&user| UserTotal {
                user,
                total: self.aggregate_for(user),
            })
            .collect()
    }

    /// Sessions, newest first
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn sessions_for(&self, user: User) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.user == user)
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Millisecond timestamp id, bumped past any id already in use
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
