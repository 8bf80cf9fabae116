//! Per-user session: the in-memory copy of one user's entries and settings,
//! kept in sync with a `KvStore`.
//!
//! ```text
//! NoIdentity --sign_in--> Loading --> Loaded --(mutations)--> Loaded
//!     ^                                  |
//!     +-------------sign_out-------------+
//! ```
//!
//! Every mutation writes the full state back before returning. Mutations are
//! refused until the initial load has completed, so transient defaults can
//! never overwrite what is on disk.

use crate::core::calculator::stats::get_statistics;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::dashboard::Dashboard;
use crate::models::entry::EarningEntry;
use crate::models::identity::Identity;
use crate::models::settings::UserSettings;
use crate::models::statistics::Statistics;
use crate::store::{self, KvStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoIdentity,
    Loading,
    Loaded,
}

pub struct Session<S: KvStore> {
    store: S,
    identity: Option<Identity>,
    state: SessionState,
    entries: Vec<EarningEntry>,
    settings: UserSettings,
}

impl<S: KvStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            identity: None,
            state: SessionState::NoIdentity,
            entries: Vec::new(),
            settings: UserSettings::default(),
        }
    }

    /// Identity became available: load that user's records, falling back to
    /// empty entries and default settings.
    pub fn sign_in(&mut self, identity: Identity) -> AppResult<()> {
        self.state = SessionState::Loading;
        self.identity = Some(identity);

        let loaded = self.load();
        if loaded.is_err() {
            self.reset();
        }
        loaded
    }

    fn load(&mut self) -> AppResult<()> {
        let user_id = self.user_id()?.to_string();
        self.entries = store::load_entries(&self.store, &user_id)?;
        self.settings = store::load_settings(&self.store, &user_id)?;
        self.state = SessionState::Loaded;
        Ok(())
    }

    /// Identity lost: drop the in-memory entries. Durable records stay.
    pub fn sign_out(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.identity = None;
        self.entries.clear();
        self.state = SessionState::NoIdentity;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == SessionState::Loaded
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn entries(&self) -> &[EarningEntry] {
        &self.entries
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn find_entry(&self, id: &str) -> Option<&EarningEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn add_entry(&mut self, entry: EarningEntry) -> AppResult<()> {
        self.ensure_loaded()?;
        self.entries.push(entry);
        self.persist()
    }

    /// Remove the entry with `id`, keeping the order of the others.
    pub fn delete_entry(&mut self, id: &str) -> AppResult<EarningEntry> {
        self.ensure_loaded()?;
        let pos = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        let removed = self.entries.remove(pos);
        self.persist()?;
        Ok(removed)
    }

    pub fn update_settings(&mut self, settings: UserSettings) -> AppResult<()> {
        self.ensure_loaded()?;
        settings.validate()?;
        self.settings = settings;
        self.persist()
    }

    /// Empty the entries and delete their durable record. Settings stay.
    pub fn clear_data(&mut self) -> AppResult<()> {
        self.ensure_loaded()?;
        let user_id = self.user_id()?.to_string();
        self.entries.clear();
        store::remove_entries(&mut self.store, &user_id)
    }

    pub fn statistics(&self) -> Statistics {
        get_statistics(&self.entries, &self.settings)
    }

    pub fn dashboard(&self) -> Dashboard {
        Core::build_dashboard(&self.entries, &self.settings)
    }

    fn user_id(&self) -> AppResult<&str> {
        self.identity
            .as_ref()
            .map(|i| i.id.as_str())
            .ok_or(AppError::NoIdentity)
    }

    fn ensure_loaded(&self) -> AppResult<()> {
        match self.state {
            SessionState::Loaded => Ok(()),
            SessionState::Loading => Err(AppError::NotLoaded),
            SessionState::NoIdentity => Err(AppError::NoIdentity),
        }
    }

    fn persist(&mut self) -> AppResult<()> {
        let user_id = self.user_id()?.to_string();
        store::save_entries(&mut self.store, &user_id, &self.entries)?;
        store::save_settings(&mut self.store, &user_id, &self.settings)
    }
}
