//! Dialog overlay shared by the add and edit forms

use dioxus::prelude::*;

use notecards_core::cards::ModalId;

use crate::state::AppState;

/// Backdrop, header, and close button around a dialog body.
///
/// Renders nothing while the dialog is hidden.
#[component]
pub fn ModalFrame(modal: ModalId, title: String, children: Element) -> Element {
    let state = use_context::<AppState>();
    if !state.modals.is_open(modal) {
        return rsx! {};
    }

    let close = move |_| {
        let mut cards = state.cards;
        let mut modals = state.modals;
        cards.write().close_modal(modal, &mut modals);
    };

    rsx! {
        div {
            id: modal.element_id(),
            class: "modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.45);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            ",

            div {
                class: "modal-dialog",
                style: "
                    width: 480px;
                    max-width: 90vw;
                    background: white;
                    border-radius: 8px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
                ",

                div {
                    class: "modal-header",
                    style: "
                        display: flex;
                        align-items: center;
                        padding: 12px 16px;
                        border-bottom: 1px solid #dee2e6;
                    ",
                    h2 { style: "font-size: 18px; margin: 0; flex: 1;", "{title}" }
                    button {
                        class: "btn-close",
                        style: "border: none; background: none; font-size: 20px; cursor: pointer;",
                        onclick: close,
                        "×"
                    }
                }

                div {
                    class: "modal-body",
                    style: "padding: 16px;",
                    {children}
                }
            }
        }
    }
}
