//! Alert banner component

use dioxus::prelude::*;

use notecards_core::cards::AlertKind;

use crate::state::AppState;

/// Inline colors for each banner category: (background, border, text)
const fn alert_colors(kind: AlertKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        AlertKind::Success => ("#d1e7dd", "#a3cfbb", "#0a3622"),
        AlertKind::Danger => ("#f8d7da", "#f1aeb5", "#58151c"),
    }
}

/// Shows the most recent store outcome until it is replaced or a dialog closes
#[component]
pub fn AlertBanner() -> Element {
    let state = use_context::<AppState>();
    let Some(alert) = state.cards.read().alert() else {
        return rsx! {};
    };
    let (bg, border, text) = alert_colors(alert.kind);
    let class = format!("alert {}", alert.kind.css_class());
    let message = alert.message;

    rsx! {
        div {
            class: "{class}",
            style: "
                margin-bottom: 16px;
                padding: 12px 16px;
                border-radius: 6px;
                border: 1px solid {border};
                background: {bg};
                color: {text};
            ",
            "{message}"
        }
    }
}
