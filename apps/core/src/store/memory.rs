//! In-memory, push-updated document collections.
//!
//! Stands in for the managed document store behind the same narrow contract
//! the real one offers: subscribe with a query, receive the full replacement
//! result sequence on subscribe and after every mutation, unsubscribe via an
//! explicit handle. No deltas, no transactional guarantees beyond
//! per-document atomicity.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::store::query::Query;

/// Anything storable in a collection. Documents are identified by a unique
/// id; updates replace the whole document atomically.
pub trait Document: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

type Callback<T> = Arc<dyn Fn(Vec<T>) + Send + Sync>;

struct Listener<T> {
    query: Query<T>,
    callback: Callback<T>,
}

struct Inner<T> {
    name: &'static str,
    docs: RwLock<Vec<T>>,
    listeners: Mutex<HashMap<u64, Listener<T>>>,
    next_listener: AtomicU64,
}

/// One named collection, insertion-ordered.
pub struct Collection<T: Document> {
    inner: Arc<Inner<T>>,
}

impl<T: Document> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Document> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                docs: RwLock::new(Vec::new()),
                listeners: Mutex::new(HashMap::new()),
                next_listener: AtomicU64::new(0),
            }),
        }
    }

    pub fn insert(&self, doc: T) -> Result<(), CoreError> {
        {
            let mut docs = self.write_docs();
            if docs.iter().any(|d| d.id() == doc.id()) {
                return Err(CoreError::Validation(format!(
                    "duplicate document id in '{}'",
                    self.inner.name
                )));
            }
            docs.push(doc);
        }
        self.notify();
        Ok(())
    }

    /// Replaces the document with the same id.
    pub fn update(&self, doc: T) -> Result<(), CoreError> {
        {
            let mut docs = self.write_docs();
            let slot = docs
                .iter_mut()
                .find(|d| d.id() == doc.id())
                .ok_or_else(|| self.not_found(doc.id()))?;
            *slot = doc;
        }
        self.notify();
        Ok(())
    }

    /// In-place single-document mutation, e.g. toggling `is_active` or
    /// bumping an applicant count.
    pub fn update_with(&self, id: Uuid, f: impl FnOnce(&mut T)) -> Result<(), CoreError> {
        {
            let mut docs = self.write_docs();
            let slot = docs
                .iter_mut()
                .find(|d| d.id() == id)
                .ok_or_else(|| self.not_found(id))?;
            f(slot);
        }
        self.notify();
        Ok(())
    }

    pub fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        {
            let mut docs = self.write_docs();
            let before = docs.len();
            docs.retain(|d| d.id() != id);
            if docs.len() == before {
                return Err(self.not_found(id));
            }
        }
        self.notify();
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.read_docs().iter().find(|d| d.id() == id).cloned()
    }

    /// One-shot read of the query's current result sequence.
    pub fn fetch(&self, query: &Query<T>) -> Vec<T> {
        query.apply(&self.read_docs())
    }

    /// Registers a listener. The callback fires immediately with the current
    /// result sequence and again, with a full replacement sequence, after
    /// every mutation. Dropping the returned handle unsubscribes.
    ///
    /// Callbacks run synchronously on the mutating thread and must not
    /// mutate the collection they observe.
    pub fn subscribe(
        &self,
        query: Query<T>,
        callback: impl Fn(Vec<T>) + Send + Sync + 'static,
    ) -> Subscription<T> {
        let callback: Callback<T> = Arc::new(callback);
        let key = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);

        // Register and deliver under one docs read guard. A concurrent
        // mutation needs the write lock, so it either completed before the
        // snapshot (and is in it) or blocks until the listener is
        // registered (and gets notified). Lock order matches `notify`:
        // docs, then listeners.
        {
            let docs = self.read_docs();
            self.inner.listeners.lock().expect("listener lock").insert(
                key,
                Listener {
                    query: query.clone(),
                    callback: Arc::clone(&callback),
                },
            );
            callback(query.apply(&docs));
        }
        debug!(collection = self.inner.name, key, "listener registered");

        Subscription {
            inner: Arc::downgrade(&self.inner),
            key,
        }
    }

    fn notify(&self) {
        // Snapshot the documents first so every listener in this round sees
        // the same state.
        let docs = self.read_docs().clone();
        let listeners = self.inner.listeners.lock().expect("listener lock");
        for listener in listeners.values() {
            (listener.callback)(listener.query.apply(&docs));
        }
    }

    fn not_found(&self, id: Uuid) -> CoreError {
        CoreError::NotFound(format!("document {id} in '{}'", self.inner.name))
    }

    fn read_docs(&self) -> std::sync::RwLockReadGuard<'_, Vec<T>> {
        self.inner.docs.read().expect("collection lock")
    }

    fn write_docs(&self) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
        self.inner.docs.write().expect("collection lock")
    }
}

/// Active listener registration. Call `cancel` (or drop) to unsubscribe.
pub struct Subscription<T> {
    inner: Weak<Inner<T>>,
    key: u64,
}

impl<T> Subscription<T> {
    pub fn cancel(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.lock().expect("listener lock").remove(&self.key);
            debug!(collection = inner.name, key = self.key, "listener removed");
        }
    }
}
