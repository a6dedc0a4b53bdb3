//! Add and edit dialogs

use dioxus::prelude::*;

use notecards_core::cards::ModalId;

use super::{ImagePicker, ModalFrame};
use crate::services::{submit_create, submit_update};
use crate::state::AppState;

const FIELD_STYLE: &str = "
    width: 100%;
    box-sizing: border-box;
    padding: 8px;
    margin: 4px 0 12px;
    border: 1px solid #ced4da;
    border-radius: 4px;
    font: inherit;
";

const SUBMIT_STYLE: &str = "
    padding: 8px 16px;
    border: none;
    border-radius: 6px;
    background: #0d6efd;
    color: white;
    cursor: pointer;
";

/// Create form. Title and description are required.
#[component]
pub fn AddNoteModal() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.add_form.read().clone();
    let decoding = state.cards.read().is_decoding_image();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(submit_create(state));
    };

    rsx! {
        ModalFrame {
            modal: ModalId::Add,
            title: "Add Note",

            form {
                onsubmit: on_submit,

                label { "Title" }
                input {
                    r#type: "text",
                    name: "title",
                    required: true,
                    style: FIELD_STYLE,
                    value: "{form.title}",
                    oninput: move |evt: FormEvent| state.add_form.write().title = evt.value(),
                }

                label { "Description" }
                textarea {
                    name: "description",
                    required: true,
                    rows: "4",
                    style: FIELD_STYLE,
                    value: "{form.description}",
                    oninput: move |evt: FormEvent| state.add_form.write().description = evt.value(),
                }

                ImagePicker {}

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    style: SUBMIT_STYLE,
                    disabled: decoding,
                    "Add Note"
                }
            }
        }
    }
}

/// Edit form bound directly to the working buffer.
#[component]
pub fn EditNoteModal() -> Element {
    let mut state = use_context::<AppState>();
    let note = state.cards.read().current_note().clone();
    let decoding = state.cards.read().is_decoding_image();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(submit_update(state));
    };

    rsx! {
        ModalFrame {
            modal: ModalId::Edit,
            title: "Edit Note",

            form {
                onsubmit: on_submit,

                label { "Title" }
                input {
                    r#type: "text",
                    name: "title",
                    style: FIELD_STYLE,
                    value: "{note.title}",
                    oninput: move |evt: FormEvent| {
                        state.cards.write().current_note_mut().title = evt.value();
                    },
                }

                label { "Description" }
                textarea {
                    name: "description",
                    rows: "4",
                    style: FIELD_STYLE,
                    value: "{note.description}",
                    oninput: move |evt: FormEvent| {
                        state.cards.write().current_note_mut().description = evt.value();
                    },
                }

                ImagePicker {}

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    style: SUBMIT_STYLE,
                    disabled: decoding,
                    "Save Changes"
                }
            }
        }
    }
}
