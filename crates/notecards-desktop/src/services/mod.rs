//! Application services
//!
//! Async actions that talk to the note store on behalf of the UI.

mod cards;

pub use cards::{delete_note, pick_image, refresh_notes, submit_create, submit_update};
