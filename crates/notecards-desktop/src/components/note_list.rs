//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;

/// Grid of note cards, in whatever order the store listed them
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = state.cards.read().notes().to_vec();

    rsx! {
        div {
            class: "note-list",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                gap: 16px;
            ",

            if notes.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: #6c757d;
                    ",
                    "No notes yet"
                }
            } else {
                for note in notes {
                    {
                        let key = note
                            .id
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_default();

                        rsx! {
                            NoteCard { key: "{key}", note }
                        }
                    }
                }
            }
        }
    }
}
