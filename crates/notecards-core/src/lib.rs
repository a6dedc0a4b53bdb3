//! notecards-core - Core library for Notecards
//!
//! This crate contains the note model, the remote note store client, image
//! encoding helpers, and the headless cards component shared by every
//! Notecards interface.

pub mod cards;
pub mod config;
pub mod error;
pub mod media;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use models::{Note, NoteFields, NoteId};
