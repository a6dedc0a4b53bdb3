//! Main application component

use dioxus::prelude::*;

use notecards_core::cards::{AlertKind, CardsState, NoteForm};
use notecards_core::config::StoreConfig;
use notecards_core::store::RealtimeDbStore;

use crate::services::refresh_notes;
use crate::state::{AppState, DesktopModals};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut cards = use_signal(CardsState::new);
    let mut store = use_signal(|| None::<RealtimeDbStore>);
    let add_open = use_signal(|| false);
    let edit_open = use_signal(|| false);
    let add_form = use_signal(NoteForm::default);
    let mut store_initialized = use_signal(|| false);

    let state = use_context_provider(|| AppState {
        cards,
        store,
        modals: DesktopModals {
            add_open,
            edit_open,
        },
        add_form,
    });

    // Resolve the store and load notes (only once)
    use_effect(move || {
        if store_initialized() {
            return;
        }
        store_initialized.set(true); // Mark immediately to prevent double init

        match StoreConfig::from_env().and_then(|config| RealtimeDbStore::new(&config)) {
            Ok(client) => {
                tracing::info!("Using note store at {}", client.base_url());
                store.set(Some(client));
                spawn(refresh_notes(state));
            }
            Err(e) => {
                tracing::error!("Failed to configure note store: {}", e);
                cards.write().set_alert(AlertKind::Danger, e.to_string());
            }
        }
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: #f8f9fa;
                color: #212529;
            ",
            Home {}
        }
    }
}
