//! The cards component: note list, add/edit dialogs, and alert banner.

mod controller;
mod modal;
mod state;

pub use controller::CardsController;
pub use modal::{ModalId, ModalStates, ModalToggle, ModalVisibility};
pub use state::{
    Alert, AlertKind, CardsState, FormError, ImageTicket, NoteForm, MSG_ADDED, MSG_ADD_FAILED,
    MSG_DELETED, MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_UPDATED, MSG_UPDATE_FAILED,
};
