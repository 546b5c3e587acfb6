//! Disc card component - pure view with callbacks

use dioxus::prelude::*;
use wheelfit_common::DiscSummary;

/// Shown when a disc has no thumbnail or the thumbnail fails to load.
const FALLBACK_EMOJI: &str = "🛞";

/// Individual catalog card. Clicking it selects the disc.
#[component]
pub fn DiscCard(disc: DiscSummary, selected: bool, on_select: EventHandler<DiscSummary>) -> Element {
    let mut image_failed = use_signal(|| false);

    let spec_line = disc.spec_line();
    let model = disc.model.clone();
    let brand = disc.brand.clone();
    let disc_id = disc.id.clone();
    let image_url = disc.image_url.clone().filter(|u| !u.is_empty());

    let ring = if selected {
        "selected ring-2 ring-orange-500 bg-gray-700"
    } else {
        "hover:bg-gray-700/70"
    };

    rsx! {
        div {
            class: "disc-card bg-gray-800 rounded-lg overflow-hidden shadow cursor-pointer transition-colors {ring}",
            "data-testid": "disc-card",
            "data-disc-id": "{disc_id}",
            aria_selected: if selected { "true" } else { "false" },
            onclick: move |_| on_select.call(disc.clone()),
            div { class: "aspect-square bg-gray-900 flex items-center justify-center",
                match image_url {
                    Some(url) if !image_failed() => rsx! {
                        img {
                            src: "{url}",
                            alt: "{brand} {model}",
                            loading: "lazy",
                            class: "w-full h-full object-contain",
                            onerror: move |_| image_failed.set(true),
                        }
                    },
                    _ => rsx! {
                        span { class: "text-5xl", "{FALLBACK_EMOJI}" }
                    },
                }
            }
            div { class: "p-3",
                h3 {
                    class: "font-semibold text-white truncate",
                    title: "{model}",
                    "{model}"
                }
                p { class: "text-gray-400 text-sm truncate", "{brand}" }
                if !spec_line.is_empty() {
                    p { class: "text-gray-500 text-xs mt-1", "{spec_line}" }
                }
            }
        }
    }
}
