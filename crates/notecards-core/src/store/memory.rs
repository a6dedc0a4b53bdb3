//! In-process note store.
//!
//! Mirrors the realtime database semantics closely enough to drive the cards
//! component without a network: push-style keys that sort in creation order,
//! full-record replacement on update, and a switch that makes every request
//! fail the way a dropped connection would.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::NoteStore;
use crate::error::{Error, Result};
use crate::models::{Note, NoteFields, NoteId};

/// A request as the store received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    List,
    Create(NoteFields),
    Update(NoteId, Note),
    Delete(NoteId),
}

#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: Mutex<BTreeMap<NoteId, NoteFields>>,
    requests: Mutex<Vec<StoreRequest>>,
    next_key: AtomicU64,
    offline: AtomicBool,
}

impl MemoryNoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a note directly, bypassing the request log
    pub fn insert(&self, fields: NoteFields) -> NoteId {
        let id = self.next_id();
        lock(&self.notes).insert(id.clone(), fields);
        id
    }

    /// When set, every request fails with a connection error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<StoreRequest> {
        lock(&self.requests).clone()
    }

    /// The stored body for `id`, if any
    pub fn get(&self, id: &NoteId) -> Option<NoteFields> {
        lock(&self.notes).get(id).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.notes).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_id(&self) -> NoteId {
        NoteId::generated(self.next_key.fetch_add(1, Ordering::SeqCst))
    }

    fn record(&self, request: StoreRequest) -> Result<()> {
        lock(&self.requests).push(request);
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "note store is offline",
            )));
        }
        Ok(())
    }
}

impl NoteStore for MemoryNoteStore {
    async fn list(&self) -> Result<Vec<Note>> {
        self.record(StoreRequest::List)?;
        Ok(lock(&self.notes)
            .iter()
            .map(|(id, fields)| Note::from_fields(id.clone(), fields.clone()))
            .collect())
    }

    async fn create(&self, fields: &NoteFields) -> Result<Option<NoteId>> {
        self.record(StoreRequest::Create(fields.clone()))?;
        Ok(Some(self.insert(fields.clone())))
    }

    async fn update(&self, id: &NoteId, note: &Note) -> Result<()> {
        self.record(StoreRequest::Update(id.clone(), note.clone()))?;
        let mut notes = lock(&self.notes);
        let Some(slot) = notes.get_mut(id) else {
            return Err(Error::NotFound(id.to_string()));
        };
        *slot = note.fields();
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.record(StoreRequest::Delete(id.clone()))?;
        lock(&self.notes)
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
