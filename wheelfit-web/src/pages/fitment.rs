//! Fitment page component
//!
//! Uses wheelfit-ui's FitmentPageView and routes its callbacks to
//! FitmentService. Loads brands on mount and refetches the disc page
//! whenever the catalog filter changes.

use crate::service::use_fitment_service;
use dioxus::prelude::*;
use wheelfit_ui::stores::{CatalogStateStoreExt, FitmentPageStateStoreExt};
use wheelfit_ui::FitmentPageView;

#[component]
pub fn FitmentPage() -> Element {
    let service = use_fitment_service();
    let state = service.state;

    use_effect({
        let service = service.clone();
        move || service.load_brands()
    });

    // Subscribes to the filter lens only: one fetch per filter change
    use_effect({
        let service = service.clone();
        move || {
            let filter = state.catalog().filter().read().clone();
            service.load_discs(filter);
        }
    });

    let on_drag_change = {
        let service = service.clone();
        move |dragging: bool| service.set_dragging(dragging)
    };
    let on_image = {
        let service = service.clone();
        move |result| service.accept_image(result)
    };
    let on_remove_image = {
        let service = service.clone();
        move |_| service.remove_image()
    };
    let on_select_disc = {
        let service = service.clone();
        move |disc| service.select_disc(disc)
    };
    let on_brand_change = {
        let service = service.clone();
        move |brand: String| service.set_brand(brand)
    };
    let on_search = {
        let service = service.clone();
        move |search: String| service.set_search(search)
    };
    let on_page = {
        let service = service.clone();
        move |page: u32| service.go_to_page(page)
    };
    let on_submit = {
        let service = service.clone();
        move |_| service.submit()
    };
    let on_dismiss_error = move |_| service.dismiss_error();

    // Pass the state lens directly - don't read here!
    rsx! {
        FitmentPageView {
            state,
            on_drag_change,
            on_image,
            on_remove_image,
            on_select_disc,
            on_brand_change,
            on_search,
            on_page,
            on_submit,
            on_dismiss_error,
        }
    }
}
