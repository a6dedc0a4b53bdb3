//! Toolbar component with actions

use dioxus::prelude::*;

use crate::state::AppState;

/// Header with the "add note" action
#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<AppState>();

    let open_add = move |_| {
        let mut cards = state.cards;
        let mut modals = state.modals;
        cards.write().open_add(&mut modals);
    };

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                align-items: center;
                margin-bottom: 16px;
            ",

            h1 {
                style: "font-size: 24px; margin: 0;",
                "Notes"
            }

            // Spacer
            div { style: "flex: 1;" }

            button {
                class: "btn btn-primary",
                style: "
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    background: #0d6efd;
                    color: white;
                    cursor: pointer;
                ",
                onclick: open_add,
                "+ Add Note"
            }
        }
    }
}
