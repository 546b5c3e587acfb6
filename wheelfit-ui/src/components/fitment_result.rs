//! Fitment result panel - pure view over a completed `FitmentResult`

use crate::components::utils::format_file_size;
use dioxus::prelude::*;
use tracing::debug;
use wheelfit_common::{FitmentResult, ResultPreview};

#[component]
pub fn FitmentResultView(result: FitmentResult) -> Element {
    let response = &result.response;
    let status = response.status_label().to_string();
    let message = response.message.clone();
    let rows = response.spec_rows();
    let savings = response.savings().map(|s| {
        format!(
            "Image optimized: {} → {} ({}% smaller)",
            format_file_size(s.original_size),
            format_file_size(s.optimized_size),
            s.percent()
        )
    });
    let prompt = response.prompt().map(str::to_string);
    let preview = result.preview();

    rsx! {
        section {
            id: "resultSection",
            class: "bg-gray-800/60 rounded-xl p-6 flex flex-col gap-4",
            onmounted: move |event| async move {
                if let Err(e) = event.data().scroll_to(ScrollBehavior::Smooth).await {
                    debug!("Could not scroll result panel into view: {:?}", e);
                }
            },
            h2 { class: "text-xl font-bold text-white", "Result" }
            match preview {
                ResultPreview::Processed(src) => rsx! {
                    img {
                        src: "{src}",
                        alt: "Car with the selected disc fitted",
                        class: "w-full rounded-lg",
                        "data-testid": "result-image",
                    }
                },
                ResultPreview::AwaitingProcessing(src) => rsx! {
                    div { class: "relative",
                        img {
                            src: "{src}",
                            alt: "Original car photo",
                            class: "w-full rounded-lg opacity-70",
                            "data-testid": "original-image",
                        }
                        p { class: "absolute bottom-3 left-3 bg-black/70 text-gray-200 text-sm rounded px-3 py-1",
                            "Waiting for the processed image..."
                        }
                    }
                },
            }
            div { class: "text-sm text-gray-300",
                span { class: "font-semibold text-white", "Status: " }
                "{status}"
            }
            if let Some(message) = message {
                p { class: "text-sm text-gray-400", "{message}" }
            }
            if !rows.is_empty() {
                dl { class: "grid grid-cols-2 sm:grid-cols-4 gap-3",
                    for row in rows {
                        div {
                            key: "{row.label}",
                            class: "bg-gray-900/60 rounded-lg px-3 py-2",
                            dt { class: "text-xs text-gray-500", "{row.label}" }
                            dd { class: "text-white font-medium", "{row.value}" }
                        }
                    }
                }
            }
            if let Some(savings) = savings {
                p { class: "text-sm text-emerald-400", "{savings}" }
            }
            if let Some(prompt) = prompt {
                div { class: "text-sm",
                    p { class: "font-semibold text-white mb-1", "Generated AI prompt" }
                    p { class: "italic text-gray-400 select-text", "{prompt}" }
                }
            }
        }
    }
}
