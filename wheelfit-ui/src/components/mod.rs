//! Shared UI components

pub mod button;
pub mod catalog;
pub mod disc_card;
pub mod error_banner;
pub mod fitment_page;
pub mod fitment_result;
pub mod helpers;
pub mod icons;
pub mod pagination;
pub mod search_box;
pub mod selected_disc;
pub mod upload_zone;
pub mod utils;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use catalog::CatalogView;
pub use disc_card::DiscCard;
pub use error_banner::ErrorBanner;
pub use fitment_page::FitmentPageView;
pub use fitment_result::FitmentResultView;
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use icons::{
    AlertTriangleIcon, ChevronLeftIcon, ChevronRightIcon, ImageIcon, LoaderIcon, SearchIcon,
    UploadIcon, XIcon,
};
pub use pagination::PaginationView;
pub use search_box::SearchBox;
pub use selected_disc::SelectedDiscSummary;
pub use upload_zone::{read_image_file, UploadZoneView};
pub use utils::{format_file_size, sleep_ms};
