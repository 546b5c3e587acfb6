//! Whole-page view for the wheel fitment flow
//!
//! Pure view: every user action is reported through a callback and the page
//! controller decides what happens. Reads state through lenses only.

use crate::components::catalog::CatalogView;
use crate::components::error_banner::ErrorBanner;
use crate::components::fitment_result::FitmentResultView;
use crate::components::selected_disc::SelectedDiscSummary;
use crate::components::upload_zone::UploadZoneView;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::fitment::FitmentStateStoreExt;
use crate::stores::page::{FitmentPageState, FitmentPageStateStoreExt};
use dioxus::prelude::*;
use wheelfit_common::{DiscSummary, SelectedImage, UploadError};

#[component]
pub fn FitmentPageView(
    state: ReadStore<FitmentPageState>,
    on_drag_change: EventHandler<bool>,
    on_image: EventHandler<Result<SelectedImage, UploadError>>,
    on_remove_image: EventHandler<()>,
    on_select_disc: EventHandler<DiscSummary>,
    on_brand_change: EventHandler<String>,
    on_search: EventHandler<String>,
    on_page: EventHandler<u32>,
    on_submit: EventHandler<()>,
    on_dismiss_error: EventHandler<()>,
) -> Element {
    let notice = state.error().read().clone();
    let banner = notice
        .message()
        .map(|message| (notice.serial(), message.to_string()));
    let form = state.fitment().form().read().clone();
    let dragging = *state.fitment().dragging().read();
    let result = state.fitment().result().read().clone();

    let image = form.image().cloned();
    let disc = form.disc().cloned();
    let selected_id = form.selected_disc_id().map(str::to_string);
    let submitting = form.is_submitting();
    let can_submit = form.can_submit();

    rsx! {
        main { class: "container mx-auto max-w-5xl px-4 py-10 flex flex-col gap-8",
            header {
                h1 { class: "text-3xl font-bold text-white", "Virtual wheel fitment" }
                p { class: "text-gray-400 mt-1",
                    "Upload a photo of your car, pick a disc and see how it looks."
                }
            }
            if let Some((serial, message)) = banner {
                ErrorBanner {
                    key: "{serial}",
                    message,
                    on_dismiss: on_dismiss_error,
                }
            }
            section { class: "flex flex-col gap-4",
                h2 { class: "text-xl font-bold text-white", "1. Upload a car photo" }
                UploadZoneView {
                    image,
                    dragging,
                    on_drag_change,
                    on_image,
                    on_remove: on_remove_image,
                }
            }
            CatalogView {
                state: state.catalog(),
                selected_id,
                on_select: on_select_disc,
                on_brand_change,
                on_search,
                on_page,
            }
            section { class: "flex flex-col gap-4",
                h2 { class: "text-xl font-bold text-white", "3. Try it on" }
                SelectedDiscSummary { disc }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Large,
                    id: "processBtn".to_string(),
                    disabled: !can_submit,
                    loading: submitting,
                    onclick: move |_| on_submit.call(()),
                    if submitting {
                        "Processing..."
                    } else {
                        "Apply virtual fitment"
                    }
                }
            }
            if let Some(result) = result {
                FitmentResultView { result }
            }
        }
    }
}
