//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use notecards_core::cards::{CardsState, ModalId, ModalToggle, NoteForm};
use notecards_core::store::RealtimeDbStore;

/// Dialog visibility backed by signals, so showing or hiding a dialog
/// re-renders it.
#[derive(Clone, Copy)]
pub struct DesktopModals {
    pub add_open: Signal<bool>,
    pub edit_open: Signal<bool>,
}

impl DesktopModals {
    #[must_use]
    pub fn signal(&self, modal: ModalId) -> Signal<bool> {
        match modal {
            ModalId::Add => self.add_open,
            ModalId::Edit => self.edit_open,
        }
    }

    #[must_use]
    pub fn is_open(&self, modal: ModalId) -> bool {
        (self.signal(modal))()
    }
}

impl ModalToggle for DesktopModals {
    fn show(&mut self, modal: ModalId) {
        tracing::debug!("Showing #{}", modal.element_id());
        self.signal(modal).set(true);
    }

    fn hide(&mut self, modal: ModalId) {
        tracing::debug!("Hiding #{}", modal.element_id());
        self.signal(modal).set(false);
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Note list, working buffer, and alert banner
    pub cards: Signal<CardsState>,
    /// Remote store, `None` until configuration has been resolved
    pub store: Signal<Option<RealtimeDbStore>>,
    /// Add/edit dialog visibility
    pub modals: DesktopModals,
    /// Values typed into the add form
    pub add_form: Signal<NoteForm>,
}

impl AppState {
    /// The configured store, if any
    #[must_use]
    pub fn store(&self) -> Option<RealtimeDbStore> {
        self.store.read().clone()
    }
}
