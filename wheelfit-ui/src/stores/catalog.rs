//! Disc catalog state store

use dioxus::prelude::*;
use wheelfit_common::{CatalogFilter, DiscSummary, Pagination};

/// State for the disc catalog panel
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Distinct brand names for the filter dropdown
    pub brands: Vec<String>,
    /// Brand, search and page currently requested
    pub filter: CatalogFilter,
    /// Discs on the current page
    pub discs: Vec<DiscSummary>,
    /// Page metadata from the last successful fetch
    pub pagination: Pagination,
    /// Whether a disc page is in flight
    pub loading: bool,
    /// Error message if the last fetch failed
    pub error: Option<String>,
}
