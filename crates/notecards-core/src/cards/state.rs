//! Cards component state
//!
//! Every user action is split into a synchronous "prepare" step that reads the
//! state and a synchronous "succeeded"/"failed" step applied once the store
//! call returns. Hosts run the store call in between however suits their
//! runtime, so no borrow of the state is held across an await.

use thiserror::Error;

use super::modal::{ModalId, ModalToggle};
use crate::error::{Error, Result};
use crate::models::{Note, NoteFields, NoteId};

pub const MSG_ADDED: &str = "Note added successfully!";
pub const MSG_ADD_FAILED: &str = "Failed to add note!";
pub const MSG_UPDATED: &str = "Note updated successfully!";
pub const MSG_UPDATE_FAILED: &str = "Failed to update note!";
pub const MSG_DELETED: &str = "Note deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete note!";
pub const MSG_LOAD_FAILED: &str = "Failed to load notes!";

/// Banner category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Success,
    Danger,
}

impl AlertKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

/// A visible banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Values typed into the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub description: String,
}

impl NoteForm {
    /// Required-field check: both fields must be non-empty.
    pub fn validate(&self) -> std::result::Result<(), FormError> {
        if self.title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        Ok(())
    }
}

/// Reasons a form submission is not sent to the store
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("title is required")]
    MissingTitle,
    #[error("description is required")]
    MissingDescription,
    #[error("note being edited has no id")]
    MissingId,
}

/// Handle for one in-flight image decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct CardsState {
    notes: Vec<Note>,
    current_note: Note,
    alert_message: String,
    alert_kind: AlertKind,
    is_edit_mode: bool,
    image_generation: u64,
    pending_image: Option<ImageTicket>,
}

impl CardsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes as of the last successful fetch
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The working buffer behind the add and edit forms
    #[must_use]
    pub const fn current_note(&self) -> &Note {
        &self.current_note
    }

    /// Mutable access for form bindings
    pub fn current_note_mut(&mut self) -> &mut Note {
        &mut self.current_note
    }

    #[must_use]
    pub const fn is_edit_mode(&self) -> bool {
        self.is_edit_mode
    }

    #[must_use]
    pub const fn alert_kind(&self) -> AlertKind {
        self.alert_kind
    }

    #[must_use]
    pub fn alert_message(&self) -> &str {
        &self.alert_message
    }

    /// The banner to display, if the message is non-empty
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        if self.alert_message.is_empty() {
            None
        } else {
            Some(Alert {
                kind: self.alert_kind,
                message: self.alert_message.clone(),
            })
        }
    }

    #[must_use]
    pub const fn is_decoding_image(&self) -> bool {
        self.pending_image.is_some()
    }

    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        tracing::debug!("Showing {} notes", notes.len());
        self.notes = notes;
    }

    pub fn notes_failed(&mut self, error: &Error) {
        tracing::error!("Error fetching notes: {}", error);
        self.set_alert(AlertKind::Danger, MSG_LOAD_FAILED);
    }

    /// Start decoding a newly selected image. Only the most recent ticket is
    /// honoured by [`CardsState::finish_image_decode`].
    pub fn begin_image_decode(&mut self) -> ImageTicket {
        self.image_generation += 1;
        let ticket = ImageTicket(self.image_generation);
        self.pending_image = Some(ticket);
        ticket
    }

    /// Apply a finished decode to the working buffer.
    ///
    /// Returns `false` when the result was dropped: a newer image was
    /// selected, the buffer was reset in the meantime, or the read failed.
    pub fn finish_image_decode(&mut self, ticket: ImageTicket, result: Result<String>) -> bool {
        if self.pending_image != Some(ticket) {
            tracing::debug!("Discarding stale image decode");
            return false;
        }
        self.pending_image = None;
        match result {
            Ok(data_url) => {
                self.current_note.image_url = data_url;
                true
            }
            Err(error) => {
                tracing::error!("Error reading selected image: {}", error);
                false
            }
        }
    }

    /// Show the add dialog in create mode.
    pub fn open_add(&mut self, modals: &mut impl ModalToggle) {
        if self.is_edit_mode {
            self.reset_buffer();
        }
        self.is_edit_mode = false;
        modals.show(ModalId::Add);
    }

    /// Body to POST for the add form, or why the form is not submittable.
    ///
    /// The image comes from the working buffer as it is right now, even if a
    /// decode is still running.
    pub fn prepare_create(&self, form: &NoteForm) -> std::result::Result<NoteFields, FormError> {
        form.validate()?;
        Ok(NoteFields {
            title: form.title.clone(),
            description: form.description.clone(),
            image_url: self.current_note.image_url.clone(),
        })
    }

    /// `id` is `None` when the store accepted the note without reporting a key.
    pub fn create_succeeded(&mut self, id: Option<&NoteId>, modals: &mut impl ModalToggle) {
        match id {
            Some(id) => tracing::info!("Note created: {}", id),
            None => tracing::info!("Note created"),
        }
        self.reset_buffer();
        self.set_alert(AlertKind::Success, MSG_ADDED);
        self.close_modal(ModalId::Add, modals);
    }

    pub fn create_failed(&mut self, error: &Error) {
        tracing::error!("Error creating note: {}", error);
        self.set_alert(AlertKind::Danger, MSG_ADD_FAILED);
    }

    /// Copy `note` into the working buffer and show the edit dialog.
    pub fn open_edit(&mut self, note: &Note, modals: &mut impl ModalToggle) {
        self.pending_image = None;
        self.current_note = note.clone();
        self.is_edit_mode = true;
        modals.show(ModalId::Edit);
    }

    /// The whole working buffer, keyed by its id.
    pub fn prepare_update(&self) -> std::result::Result<(NoteId, Note), FormError> {
        let id = self.current_note.id.clone().ok_or(FormError::MissingId)?;
        Ok((id, self.current_note.clone()))
    }

    pub fn update_succeeded(&mut self, id: &NoteId, modals: &mut impl ModalToggle) {
        tracing::info!("Note updated: {}", id);
        self.reset_buffer();
        self.is_edit_mode = false;
        self.set_alert(AlertKind::Success, MSG_UPDATED);
        self.close_modal(ModalId::Edit, modals);
    }

    pub fn update_failed(&mut self, error: &Error) {
        tracing::error!("Error updating note: {}", error);
        self.set_alert(AlertKind::Danger, MSG_UPDATE_FAILED);
    }

    pub fn delete_succeeded(&mut self, id: &NoteId) {
        tracing::info!("Note deleted: {}", id);
        self.set_alert(AlertKind::Success, MSG_DELETED);
    }

    pub fn delete_failed(&mut self, error: &Error) {
        tracing::error!("Error deleting note: {}", error);
        self.set_alert(AlertKind::Danger, MSG_DELETE_FAILED);
    }

    /// Hide a dialog. Always clears the alert message.
    pub fn close_modal(&mut self, modal: ModalId, modals: &mut impl ModalToggle) {
        modals.hide(modal);
        self.alert_message.clear();
    }

    /// Show a banner, replacing any previous one
    pub fn set_alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alert_kind = kind;
        self.alert_message = message.into();
    }

    fn reset_buffer(&mut self) {
        self.current_note = Note::blank();
        self.pending_image = None;
    }
}
