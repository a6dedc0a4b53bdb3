//! Note card component

use dioxus::prelude::*;

use notecards_core::Note;

use crate::services::delete_note;
use crate::state::AppState;

const PREVIEW_LEN: usize = 120;

/// A single note with its image, edit, and delete actions.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let state = use_context::<AppState>();
    let preview = note.description_preview(PREVIEW_LEN);
    let has_image = note.has_image();
    let image_url = note.image_url.clone();
    let title = note.title.clone();
    let note_id = note.id.clone();

    let open_edit = move |_| {
        let mut cards = state.cards;
        let mut modals = state.modals;
        cards.write().open_edit(&note, &mut modals);
    };

    let delete = move |_| {
        if let Some(id) = note_id.clone() {
            spawn(delete_note(state, id));
        }
    };

    rsx! {
        div {
            class: "card note-card",
            style: "
                border: 1px solid #dee2e6;
                border-radius: 8px;
                background: white;
                overflow: hidden;
                display: flex;
                flex-direction: column;
            ",

            if has_image {
                img {
                    class: "card-img-top",
                    src: "{image_url}",
                    alt: "{title}",
                    style: "width: 100%; max-height: 180px; object-fit: cover;",
                }
            }

            div {
                class: "card-body",
                style: "padding: 12px 16px; flex: 1;",

                div {
                    class: "note-title",
                    style: "
                        font-weight: 600;
                        margin-bottom: 4px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{title}"
                }

                div {
                    class: "note-preview",
                    style: "font-size: 13px; color: #495057;",
                    "{preview}"
                }
            }

            div {
                class: "card-footer",
                style: "display: flex; gap: 8px; padding: 8px 16px; border-top: 1px solid #f1f3f5;",

                button {
                    class: "btn btn-secondary",
                    style: "flex: 1; cursor: pointer;",
                    onclick: open_edit,
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    style: "flex: 1; cursor: pointer; color: #b02a37;",
                    onclick: delete,
                    "Delete"
                }
            }
        }
    }
}
