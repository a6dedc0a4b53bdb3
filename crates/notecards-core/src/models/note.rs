//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Characters the realtime database refuses in keys. `/` would also escape
/// the note's own path.
const FORBIDDEN_KEY_CHARS: [char; 6] = ['/', '.', '#', '$', '[', ']'];

/// A server-assigned note key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(String);

impl NoteId {
    /// Push-style key for the `n`th locally generated note. Keys sort in
    /// generation order.
    pub(crate) fn generated(n: u64) -> Self {
        Self(format!("-N{n:010}"))
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidInput("note id must not be empty".into()));
        }
        if let Some(bad) = s.chars().find(|c| FORBIDDEN_KEY_CHARS.contains(c)) {
            return Err(Error::InvalidInput(format!(
                "note id '{s}' contains forbidden character '{bad}'"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for NoteId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NoteId> for String {
    fn from(id: NoteId) -> Self {
        id.0
    }
}

/// The stored body of a note: everything except its key.
///
/// This is what gets POSTed on create and what the listing maps each key to.
/// Missing fields in a stored value default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteFields {
    pub title: String,
    pub description: String,
    /// Inline `data:` URL, or empty when the note has no image
    pub image_url: String,
}

/// A note card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server key, `None` until the note has been created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl Note {
    /// A note with every field empty and no id
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Attach a server key to stored fields
    #[must_use]
    pub fn from_fields(id: NoteId, fields: NoteFields) -> Self {
        Self {
            id: Some(id),
            title: fields.title,
            description: fields.description,
            image_url: fields.image_url,
        }
    }

    /// Copy of the note body without its key
    #[must_use]
    pub fn fields(&self) -> NoteFields {
        NoteFields {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// First line of the description, truncated to `max_len` characters
    #[must_use]
    pub fn description_preview(&self, max_len: usize) -> String {
        let line = self.description.lines().next().unwrap_or("");
        if line.chars().count() <= max_len {
            return line.to_string();
        }
        let mut preview: String = line.chars().take(max_len.saturating_sub(3)).collect();
        preview.push_str("...");
        preview
    }
}
