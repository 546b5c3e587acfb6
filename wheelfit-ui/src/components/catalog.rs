//! Disc catalog view - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogState>` and reads individual fields through
//! lenses, so typing in the search box does not re-render the grid.

use crate::components::disc_card::DiscCard;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::ImageIcon;
use crate::components::pagination::PaginationView;
use crate::components::search_box::SearchBox;
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};
use dioxus::prelude::*;
use wheelfit_common::{DiscSummary, SEARCH_DEBOUNCE_MS};

#[component]
pub fn CatalogView(
    state: ReadStore<CatalogState>,
    /// Id of the disc currently chosen for fitment
    selected_id: Option<String>,
    on_select: EventHandler<DiscSummary>,
    on_brand_change: EventHandler<String>,
    /// Called with the debounced search text
    on_search: EventHandler<String>,
    on_page: EventHandler<u32>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let discs = state.discs().read().clone();
    let pagination = *state.pagination().read();

    let cards: Vec<(DiscSummary, bool)> = discs
        .into_iter()
        .map(|disc| {
            let selected = selected_id.as_deref() == Some(disc.id.as_str());
            (disc, selected)
        })
        .collect();

    rsx! {
        section { class: "flex flex-col gap-4",
            h2 { class: "text-xl font-bold text-white", "2. Choose a disc" }
            CatalogFilters { state, on_brand_change, on_search }
            if loading {
                LoadingSpinner { message: "Loading discs...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if cards.is_empty() {
                div { id: "emptyState", class: "text-center py-12",
                    ImageIcon { class: "w-12 h-12 mx-auto text-gray-500 mb-3" }
                    p { class: "text-gray-300 font-medium", "No discs found" }
                    p { class: "text-gray-500 text-sm", "Try another brand or search term." }
                }
            } else {
                div {
                    id: "discGrid",
                    class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
                    for (disc, selected) in cards {
                        DiscCard { key: "{disc.id}", disc, selected, on_select }
                    }
                }
                PaginationView { pagination, on_page }
            }
        }
    }
}

/// Brand dropdown and debounced search box
#[component]
fn CatalogFilters(
    state: ReadStore<CatalogState>,
    on_brand_change: EventHandler<String>,
    on_search: EventHandler<String>,
) -> Element {
    let brands = state.brands().read().clone();
    let filter = state.filter().read().clone();
    let current_brand = filter.brand().to_string();

    rsx! {
        div { class: "flex flex-wrap gap-3",
            select {
                id: "brandFilter",
                class: "bg-gray-800/50 rounded-lg px-3 py-2 text-gray-200 focus:outline-none focus:ring-1 focus:ring-orange-500/50",
                value: "{current_brand}",
                onchange: move |e| on_brand_change.call(e.value()),
                option { value: "", selected: current_brand.is_empty(), "All brands" }
                for brand in brands {
                    option {
                        key: "{brand}",
                        value: "{brand}",
                        selected: brand == current_brand,
                        "{brand}"
                    }
                }
            }
            SearchBox {
                initial: filter.search().to_string(),
                on_search,
                delay_ms: SEARCH_DEBOUNCE_MS,
                placeholder: "Search by model or brand",
            }
        }
    }
}
