//! Dismissable error banner for validation and request failures.

use crate::components::icons::{AlertTriangleIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tracing::debug;

/// Red banner with icon, message text and a dismiss button.
///
/// Scrolls itself into view when mounted. Key it by the `ErrorNotice`
/// serial so every new error, repeated text included, remounts and scrolls.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "bg-red-900/40 border border-red-700/60 rounded-lg p-4",
            role: "alert",
            "data-testid": "error-banner",
            onmounted: move |event| async move {
                if let Err(e) = event.data().scroll_to(ScrollBehavior::Smooth).await {
                    debug!("Could not scroll error banner into view: {:?}", e);
                }
            },
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-red-400 flex-shrink-0 mt-0.5" }
                p { class: "flex-1 text-sm text-red-100 select-text break-words", "{message}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    aria_label: "Dismiss error".to_string(),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
