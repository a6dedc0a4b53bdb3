//! Image selection for the working buffer

use dioxus::prelude::*;

use notecards_core::media::is_data_url;

use crate::services::pick_image;
use crate::state::AppState;

/// "Choose image" button with a thumbnail of the currently attached image
#[component]
pub fn ImagePicker() -> Element {
    let state = use_context::<AppState>();
    let (image_url, decoding) = {
        let cards = state.cards.read();
        (
            cards.current_note().image_url.clone(),
            cards.is_decoding_image(),
        )
    };
    let show_preview = is_data_url(&image_url);

    rsx! {
        div {
            class: "image-picker",
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",

            button {
                r#type: "button",
                class: "btn btn-outline",
                style: "cursor: pointer;",
                disabled: decoding,
                onclick: move |_| {
                    spawn(pick_image(state));
                },
                "Choose image"
            }

            if decoding {
                span { style: "color: #6c757d;", "Reading image..." }
            } else if show_preview {
                img {
                    src: "{image_url}",
                    alt: "Selected image",
                    style: "height: 48px; border-radius: 4px;",
                }
            }
        }
    }
}
