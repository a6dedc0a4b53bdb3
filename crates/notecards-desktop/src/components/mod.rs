//! UI Components
//!
//! Reusable UI components for the desktop application.

mod alert_banner;
mod image_picker;
mod modal_frame;
mod note_card;
mod note_list;
mod note_modals;
mod toolbar;

pub use alert_banner::AlertBanner;
pub use image_picker::ImagePicker;
pub use modal_frame::ModalFrame;
pub use note_card::NoteCard;
pub use note_list::NoteList;
pub use note_modals::{AddNoteModal, EditNoteModal};
pub use toolbar::Toolbar;
