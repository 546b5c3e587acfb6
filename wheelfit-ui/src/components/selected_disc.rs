use dioxus::prelude::*;
use wheelfit_common::DiscSummary;

/// Summary of the disc chosen for fitment
#[component]
pub fn SelectedDiscSummary(disc: Option<DiscSummary>) -> Element {
    let Some(disc) = disc else {
        return rsx! {
            p { class: "text-sm text-gray-500", "No disc selected yet." }
        };
    };

    let spec_line = disc.spec_line();

    rsx! {
        div {
            id: "selectedDisc",
            class: "flex items-center justify-between bg-gray-800 border border-orange-500/40 rounded-lg px-4 py-3",
            div {
                p { class: "text-xs uppercase tracking-wide text-orange-400", "Selected disc" }
                p { class: "text-white font-semibold", "{disc.brand} {disc.model}" }
                if !spec_line.is_empty() {
                    p { class: "text-gray-400 text-sm", "{spec_line}" }
                }
            }
        }
    }
}
