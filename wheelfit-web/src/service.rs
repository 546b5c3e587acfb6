//! FitmentService - owns the page store and turns UI events into state changes
//!
//! UI components access FitmentService via `use_fitment_service()` and:
//! - Read state reactively from `service.state`
//! - Call action methods like `service.submit()`
//!
//! Every mutation goes through the wheelfit-common types held in the store,
//! so the rules (page reset on filter change, submit gating) live in one place.

use crate::api::ApiClient;
use crate::config::ApiConfig;
use dioxus::prelude::*;
use tracing::{error, info, warn};
use wheelfit_common::{CatalogFilter, DiscSummary, FitmentResult, SelectedImage, UploadError};
use wheelfit_ui::stores::{
    CatalogStateStoreExt, FitmentPageState, FitmentPageStateStoreExt, FitmentStateStoreExt,
};

/// Created inside the component tree because `Store` is not Send-safe.
#[derive(Clone)]
pub struct FitmentService {
    pub state: Store<FitmentPageState>,
    api: ApiClient,
    /// In-flight disc page request; replaced when the filter changes
    disc_task: Signal<Option<Task>>,
}

impl FitmentService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            state: Store::new(FitmentPageState::default()),
            api: ApiClient::new(config),
            disc_task: Signal::new(None),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Populate the brand dropdown. Failure leaves only "All brands".
    pub fn load_brands(&self) {
        let state = self.state;
        let api = self.api.clone();

        spawn(async move {
            match api.fetch_brands().await {
                Ok(brands) => state.catalog().brands().set(brands),
                Err(e) => warn!("Failed to load brands: {}", e),
            }
        });
    }

    /// Fetch the page for `filter`, cancelling any request still in flight
    /// so a stale page never overwrites a newer one.
    pub fn load_discs(&self, filter: CatalogFilter) {
        let state = self.state;
        let api = self.api.clone();
        let mut disc_task = self.disc_task;

        if let Some(task) = disc_task.take() {
            task.cancel();
        }

        let task = spawn(async move {
            state.catalog().loading().set(true);
            state.catalog().error().set(None);

            match api.fetch_discs(&filter).await {
                Ok(page) => {
                    state.catalog().discs().set(page.discs);
                    state.catalog().pagination().set(page.pagination);
                }
                Err(e) => {
                    error!("Failed to load discs: {}", e);
                    state.catalog().discs().set(Vec::new());
                    state.catalog().error().set(Some(e.to_string()));
                }
            }

            state.catalog().loading().set(false);
        });
        disc_task.set(Some(task));
    }

    pub fn set_brand(&self, brand: String) {
        self.update_filter(|f| f.set_brand(brand));
    }

    pub fn set_search(&self, search: String) {
        self.update_filter(|f| f.set_search(search));
    }

    pub fn go_to_page(&self, page: u32) {
        self.update_filter(|f| f.set_page(page));
    }

    /// Apply a filter change; unchanged filters are not written, so they
    /// never trigger a fetch.
    fn update_filter(&self, change: impl FnOnce(&mut CatalogFilter) -> bool) {
        let mut filter = self.state.catalog().filter().peek().clone();
        if change(&mut filter) {
            self.state.catalog().filter().set(filter);
        }
    }

    // =========================================================================
    // Upload & selection
    // =========================================================================

    pub fn set_dragging(&self, dragging: bool) {
        self.state.fitment().dragging().set(dragging);
    }

    pub fn accept_image(&self, result: Result<SelectedImage, UploadError>) {
        match result {
            Ok(image) => {
                info!("Selected image {} ({} bytes)", image.file_name, image.size);
                self.state.fitment().form().write().set_image(image);
                self.state.error().write().clear();
            }
            Err(e) => {
                warn!("Rejected upload: {}", e);
                self.show_error(e.to_string());
            }
        }
    }

    pub fn remove_image(&self) {
        self.state.fitment().form().write().clear_image();
    }

    pub fn select_disc(&self, disc: DiscSummary) {
        info!("Selected disc {}", disc.id);
        self.state.fitment().form().write().select_disc(disc);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Post the selected image and disc. The form is marked as submitting
    /// until the request settles, whatever the outcome.
    pub fn submit(&self) {
        let state = self.state;
        // Bind first so the write guard is released before the error path writes again
        let outcome = state.fitment().form().write().begin_submission();
        let request = match outcome {
            Ok(request) => request,
            Err(e) => {
                self.show_error(e.to_string());
                return;
            }
        };

        state.error().write().clear();
        state.fitment().result().set(None);

        let api = self.api.clone();
        let original_image = request.car_image_base64.clone();

        spawn(async move {
            match api.submit_fitment(&request).await {
                Ok(response) => {
                    info!(
                        "Fitment for disc {} finished: {}",
                        request.disc_id,
                        response.status_label()
                    );
                    state.fitment().result().set(Some(FitmentResult {
                        response,
                        original_image,
                    }));
                }
                Err(e) => {
                    error!("Fitment for disc {} failed: {}", request.disc_id, e);
                    state.error().write().show(e.to_string());
                }
            }

            state.fitment().form().write().finish_submission();
        });
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub fn show_error(&self, message: String) {
        self.state.error().write().show(message);
    }

    pub fn dismiss_error(&self) {
        self.state.error().write().clear();
    }
}

pub fn use_fitment_service() -> FitmentService {
    use_context::<FitmentService>()
}
