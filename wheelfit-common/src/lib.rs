//! wheelfit-common - I/O-free logic shared by the wheelfit UI crates
//!
//! Upload validation, catalog filter and pagination state, form gating and
//! the fitment wire types. Nothing here touches the DOM or the network.

pub mod catalog;
pub mod fitment;
pub mod form;
pub mod upload;

pub use catalog::{
    BrandList, CatalogFilter, Debounced, DiscPage, DiscSummary, Pagination, PER_PAGE,
    SEARCH_DEBOUNCE_MS,
};
pub use fitment::{
    DiscDetails, ErrorBody, FitmentRequest, FitmentResponse, FitmentResult, OptimizationSavings,
    ResultPreview, SpecRow, DEFAULT_ERROR_MESSAGE,
};
pub use form::{FitmentForm, FormError};
pub use upload::{encode_data_url, validate_image, SelectedImage, UploadError, MAX_IMAGE_BYTES};
