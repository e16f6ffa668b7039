//! Scoped persistence for in-progress application forms.
//!
//! A draft is keyed by (job, actor) and holds a JSON snapshot of whatever
//! form state the caller wants restored later. Saves happen on explicit user
//! action and, via `Autosaver`, on a periodic timer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::CoreError;

/// Scope of one draft: a single actor's progress on a single job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftKey {
    pub job_id: Uuid,
    pub actor_id: Uuid,
}

impl DraftKey {
    pub fn new(job_id: Uuid, actor_id: Uuid) -> Self {
        Self { job_id, actor_id }
    }

    /// Storage key, `job_application_draft_<job>_<actor>`.
    pub fn storage_key(&self) -> String {
        format!("job_application_draft_{}_{}", self.job_id, self.actor_id)
    }
}

/// Key-value string store for draft snapshots. Implementations persist
/// however they like; the core only sees strings under scoped keys.
pub trait DraftStore: Send + Sync {
    fn put(&self, key: &str, value: String) -> Result<(), CoreError>;
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn delete(&self, key: &str) -> Result<(), CoreError>;
}

#[derive(Clone, Default)]
pub struct MemoryDraftStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn put(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries
            .lock()
            .expect("draft lock")
            .insert(key.to_string(), value);
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.lock().expect("draft lock").get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), CoreError> {
        self.entries.lock().expect("draft lock").remove(key);
        Ok(())
    }
}

/// Saves a serializable snapshot under the scoped key.
pub fn save_draft<T: Serialize>(
    store: &dyn DraftStore,
    key: &DraftKey,
    snapshot: &T,
) -> Result<(), CoreError> {
    let json = serde_json::to_string(snapshot)?;
    store.put(&key.storage_key(), json)?;
    debug!(job = %key.job_id, actor = %key.actor_id, "draft saved");
    Ok(())
}

/// Loads a previously saved snapshot. A corrupt stored value degrades to
/// `None` with a warning; the caller just starts fresh.
pub fn load_draft<T: DeserializeOwned>(
    store: &dyn DraftStore,
    key: &DraftKey,
) -> Result<Option<T>, CoreError> {
    let Some(json) = store.read(&key.storage_key())? else {
        return Ok(None);
    };
    match serde_json::from_str(&json) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(err) => {
            warn!(job = %key.job_id, actor = %key.actor_id, %err, "discarding corrupt draft");
            Ok(None)
        }
    }
}

pub fn clear_draft(store: &dyn DraftStore, key: &DraftKey) -> Result<(), CoreError> {
    store.delete(&key.storage_key())
}

/// Periodic snapshot writer. Every tick it pulls the current form state
/// from `snapshot` and saves it; the task is aborted when the `Autosaver`
/// drops (form closed or submitted).
pub struct Autosaver {
    handle: JoinHandle<()>,
}

impl Autosaver {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    /// Spawns with the interval from the runtime configuration.
    pub fn with_config<T, F>(
        store: Arc<dyn DraftStore>,
        key: DraftKey,
        config: &Config,
        snapshot: F,
    ) -> Self
    where
        T: Serialize + Send + 'static,
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        Self::spawn(store, key, config.autosave_interval, snapshot)
    }

    pub fn spawn<T, F>(
        store: Arc<dyn DraftStore>,
        key: DraftKey,
        interval: Duration,
        snapshot: F,
    ) -> Self
    where
        T: Serialize + Send + 'static,
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The immediate first tick would save an untouched form.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Some(state) = snapshot() {
                    if let Err(err) = save_draft(store.as_ref(), &key, &state) {
                        warn!(%err, "autosave failed");
                    }
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct FormState {
        why_interested: String,
        availability: String,
    }

    fn state() -> FormState {
        FormState {
            why_interested: "Lifelong cricket fan".to_string(),
            availability: "Immediate".to_string(),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryDraftStore::new();
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        save_draft(&store, &key, &state()).unwrap();
        let loaded: Option<FormState> = load_draft(&store, &key).unwrap();
        assert_eq!(loaded, Some(state()));
    }

    #[test]
    fn test_load_missing_draft_is_none() {
        let store = MemoryDraftStore::new();
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        let loaded: Option<FormState> = load_draft(&store, &key).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_draft_degrades_to_none() {
        let store = MemoryDraftStore::new();
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        store.put(&key.storage_key(), "{not json".to_string()).unwrap();
        let loaded: Option<FormState> = load_draft(&store, &key).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_removes_draft() {
        let store = MemoryDraftStore::new();
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        save_draft(&store, &key, &state()).unwrap();
        clear_draft(&store, &key).unwrap();
        let loaded: Option<FormState> = load_draft(&store, &key).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_keys_are_scoped_per_job_and_actor() {
        let store = MemoryDraftStore::new();
        let actor = Uuid::new_v4();
        let key_a = DraftKey::new(Uuid::new_v4(), actor);
        let key_b = DraftKey::new(Uuid::new_v4(), actor);
        save_draft(&store, &key_a, &state()).unwrap();
        let other: Option<FormState> = load_draft(&store, &key_b).unwrap();
        assert!(other.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_autosaver_writes_on_interval() {
        let store: Arc<dyn DraftStore> = Arc::new(MemoryDraftStore::new());
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        let saver = Autosaver::spawn(Arc::clone(&store), key, Duration::from_secs(30), || {
            Some(state())
        });

        tokio::time::sleep(Duration::from_secs(31)).await;
        tokio::task::yield_now().await;

        let loaded: Option<FormState> = load_draft(store.as_ref(), &key).unwrap();
        assert_eq!(loaded, Some(state()));
        drop(saver);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autosaver_with_config_uses_configured_interval() {
        let store: Arc<dyn DraftStore> = Arc::new(MemoryDraftStore::new());
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        let config = Config {
            autosave_interval: Duration::from_secs(10),
            ..Config::default()
        };
        let _saver = Autosaver::with_config(Arc::clone(&store), key, &config, || Some(state()));

        tokio::time::sleep(Duration::from_secs(11)).await;
        tokio::task::yield_now().await;

        let loaded: Option<FormState> = load_draft(store.as_ref(), &key).unwrap();
        assert_eq!(loaded, Some(state()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_autosaver_skips_empty_snapshots() {
        let store: Arc<dyn DraftStore> = Arc::new(MemoryDraftStore::new());
        let key = DraftKey::new(Uuid::new_v4(), Uuid::new_v4());
        let _saver =
            Autosaver::spawn::<FormState, _>(Arc::clone(&store), key, Duration::from_secs(30), || {
                None
            });

        tokio::time::sleep(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;

        let loaded: Option<FormState> = load_draft(store.as_ref(), &key).unwrap();
        assert!(loaded.is_none());
    }
}
