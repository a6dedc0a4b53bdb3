//! Remote note store clients
//!
//! The store speaks the realtime-database REST convention: a collection is
//! addressed as `{base}.json`, a single record as `{base}/{id}.json`, and a
//! listing is a JSON object mapping keys to records (or `null` when empty).
//! Collections keyed by sequential integers come back as arrays instead.

mod memory;
mod realtime_db;

pub use memory::{MemoryNoteStore, StoreRequest};
pub use realtime_db::RealtimeDbStore;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Note, NoteFields, NoteId};

/// Trait for note storage operations
#[allow(async_fn_in_trait)]
pub trait NoteStore {
    /// List every note in the collection
    async fn list(&self) -> Result<Vec<Note>>;

    /// Create a note. The assigned key is returned when the server reports one.
    async fn create(&self, fields: &NoteFields) -> Result<Option<NoteId>>;

    /// Replace the note stored under `id`
    async fn update(&self, id: &NoteId, note: &Note) -> Result<()>;

    /// Remove the note stored under `id`
    async fn delete(&self, id: &NoteId) -> Result<()>;
}

/// Convert a collection listing body into notes.
///
/// `null`, an empty body, and `{}` all mean "no notes". Each key becomes the
/// note's id; an array listing uses each index as the key and skips `null`
/// holes. Entries that are not note-shaped objects or whose key is not a
/// valid id are skipped.
pub fn notes_from_listing(body: &str) -> Result<Vec<Note>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<(String, Value)> = match serde_json::from_str(body)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| (index.to_string(), value))
            .collect(),
        other => {
            return Err(Error::InvalidInput(format!(
                "note listing must be an object or array, got {other}"
            )));
        }
    };

    let mut notes = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let id = match key.parse::<NoteId>() {
            Ok(id) => id,
            Err(error) => {
                tracing::warn!("Skipping listing entry with invalid key: {}", error);
                continue;
            }
        };
        match serde_json::from_value::<NoteFields>(value) {
            Ok(fields) => notes.push(Note::from_fields(id, fields)),
            Err(error) => {
                tracing::warn!("Skipping malformed note {}: {}", id, error);
            }
        }
    }
    Ok(notes)
}
