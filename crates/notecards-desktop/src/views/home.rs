//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{AddNoteModal, AlertBanner, EditNoteModal, NoteList, Toolbar};

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "max-width: 960px; margin: 0 auto; padding: 24px;",

            Toolbar {}
            AlertBanner {}
            NoteList {}

            AddNoteModal {}
            EditNoteModal {}
        }
    }
}
