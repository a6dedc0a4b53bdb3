//! Data models for Notecards

mod note;

pub use note::{Note, NoteFields, NoteId};
