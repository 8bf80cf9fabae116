//! Durable key-value persistence for per-user state.
//!
//! Records are JSON blobs stored under `<namespace>_<userId>`. This layer has
//! no business logic: it only reads, writes and removes whole records.

pub mod memory;

use crate::errors::AppResult;
use crate::models::entry::EarningEntry;
use crate::models::settings::UserSettings;
use crate::ui::messages::warning;
use serde::de::DeserializeOwned;

pub const ENTRIES_NAMESPACE: &str = "daily_pay_entries";
pub const SETTINGS_NAMESPACE: &str = "daily_pay_settings";

/// Minimal string store. Implementations must make `set`/`remove` durable
/// before returning.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

pub fn entries_key(user_id: &str) -> String {
    format!("{}_{}", ENTRIES_NAMESPACE, user_id)
}

pub fn settings_key(user_id: &str) -> String {
    format!("{}_{}", SETTINGS_NAMESPACE, user_id)
}

/// Read and decode a record. Missing or undecodable records yield `None`.
fn load_record<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> AppResult<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warning(format!("Ignoring unreadable record '{}': {}", key, e));
            Ok(None)
        }
    }
}

pub fn load_entries(store: &impl KvStore, user_id: &str) -> AppResult<Vec<EarningEntry>> {
    Ok(load_record(store, &entries_key(user_id))?.unwrap_or_default())
}

pub fn load_settings(store: &impl KvStore, user_id: &str) -> AppResult<UserSettings> {
    Ok(load_record(store, &settings_key(user_id))?.unwrap_or_default())
}

pub fn save_entries(
    store: &mut impl KvStore,
    user_id: &str,
    entries: &[EarningEntry],
) -> AppResult<()> {
    let json = serde_json::to_string(entries)?;
    store.set(&entries_key(user_id), &json)
}

pub fn save_settings(
    store: &mut impl KvStore,
    user_id: &str,
    settings: &UserSettings,
) -> AppResult<()> {
    let json = serde_json::to_string(settings)?;
    store.set(&settings_key(user_id), &json)
}

pub fn remove_entries(store: &mut impl KvStore, user_id: &str) -> AppResult<()> {
    store.remove(&entries_key(user_id))
}
