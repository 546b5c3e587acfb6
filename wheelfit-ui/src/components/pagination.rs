use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use wheelfit_common::Pagination;

/// Prev/next controls with page info. Renders nothing for a single page.
#[component]
pub fn PaginationView(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    if !pagination.is_visible() {
        return rsx! {};
    }

    let page = pagination.page;
    let summary = pagination.summary();

    rsx! {
        nav {
            id: "pagination",
            class: "flex items-center justify-center gap-4 mt-6",
            aria_label: "Catalog pages",
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                id: "prevPage".to_string(),
                disabled: !pagination.has_previous(),
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                ChevronLeftIcon { class: "w-4 h-4" }
                "Previous"
            }
            span { id: "pageInfo", class: "text-sm text-gray-400", "{summary}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                id: "nextPage".to_string(),
                disabled: !pagination.has_next(),
                onclick: move |_| on_page.call(page + 1),
                "Next"
                ChevronRightIcon { class: "w-4 h-4" }
            }
        }
    }
}
