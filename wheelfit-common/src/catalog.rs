use serde::Deserialize;

/// Discs requested per catalog page.
pub const PER_PAGE: u32 = 20;

/// Delay between the last search keystroke and the catalog request.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// A wheel disc as listed by `GET /api/discs`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DiscSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub diameter: Option<f64>,
    pub width: Option<f64>,
    pub pcd: Option<String>,
    pub et: Option<f64>,
    pub center_bore: Option<f64>,
    pub image_url: Option<String>,
}

impl DiscSummary {
    /// Compact spec line for a catalog card, e.g. `R17 · 7.5J · 5x112 · ET45`.
    pub fn spec_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(d) = self.diameter {
            parts.push(format!("R{}", d));
        }
        if let Some(w) = self.width {
            parts.push(format!("{}J", w));
        }
        if let Some(ref pcd) = self.pcd {
            if !pcd.is_empty() {
                parts.push(pcd.clone());
            }
        }
        if let Some(et) = self.et {
            parts.push(format!("ET{}", et));
        }
        parts.join(" · ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BrandList {
    #[serde(default)]
    pub brands: Vec<String>,
}

/// Page metadata returned alongside each disc page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            pages: 0,
            total: 0,
        }
    }
}

impl Pagination {
    /// Controls are hidden when everything fits on one page.
    pub fn is_visible(&self) -> bool {
        self.pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn summary(&self) -> String {
        format!("Page {} of {} ({} discs)", self.page, self.pages, self.total)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DiscPage {
    #[serde(default)]
    pub discs: Vec<DiscSummary>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Brand/search filter plus the requested page.
///
/// Changing either filter resets the page to 1. Setters return whether
/// anything changed so callers can skip a redundant fetch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogFilter {
    brand: String,
    search: String,
    page: u32,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            brand: String::new(),
            search: String::new(),
            page: 1,
        }
    }
}

impl CatalogFilter {
    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) -> bool {
        let brand = brand.into();
        if brand == self.brand {
            return false;
        }
        self.brand = brand;
        self.page = 1;
        true
    }

    /// Stored trimmed, so surrounding whitespace never counts as a change.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search: String = search.into();
        let trimmed = search.trim();
        if trimmed == self.search {
            return false;
        }
        self.search = trimmed.to_string();
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Query string pairs for `GET /api/discs`. Empty filters are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", PER_PAGE.to_string()),
        ];
        if !self.brand.is_empty() {
            pairs.push(("brand", self.brand.clone()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }
}

/// Latest-wins gate for debounced input.
///
/// Every keystroke `push`es its value and gets a ticket. When the delay for a
/// ticket elapses, `settle` hands back the value only if no newer keystroke
/// arrived in the meantime, and only once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounced<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debounced<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debounced<T> {
    pub fn push(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_filter_starts_on_first_page() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.page(), 1);
        assert_eq!(
            filter.query_pairs(),
            vec![("page", "1".to_string()), ("per_page", "20".to_string())]
        );
    }

    #[test]
    fn changing_brand_resets_page() {
        let mut filter = CatalogFilter::default();
        filter.set_page(4);
        assert!(filter.set_brand("BBS"));
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.brand(), "BBS");
    }

    #[test]
    fn changing_search_resets_page() {
        let mut filter = CatalogFilter::default();
        filter.set_page(3);
        assert!(filter.set_search("sport"));
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn unchanged_filter_is_a_noop() {
        let mut filter = CatalogFilter::default();
        filter.set_search("mesh");
        filter.set_page(2);
        assert!(!filter.set_search("mesh"));
        assert_eq!(filter.page(), 2);
        assert!(!filter.set_brand(""));
        assert_eq!(filter.page(), 2);
    }

    #[test]
    fn page_is_clamped_to_one() {
        let mut filter = CatalogFilter::default();
        filter.set_page(5);
        assert!(filter.set_page(0));
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn query_includes_brand_and_trimmed_search() {
        let mut filter = CatalogFilter::default();
        filter.set_brand("OZ Racing");
        filter.set_search("  ultra ");
        filter.set_page(2);
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("per_page", "20".to_string()),
                ("brand", "OZ Racing".to_string()),
                ("search", "ultra".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_around_search_is_not_a_change() {
        let mut filter = CatalogFilter::default();
        assert!(filter.set_search("ultra"));
        filter.set_page(3);
        assert!(!filter.set_search("ultra "));
        assert!(!filter.set_search("  ultra"));
        assert_eq!(filter.search(), "ultra");
        assert_eq!(filter.page(), 3);
    }

    #[test]
    fn keystroke_burst_settles_once_with_last_value() {
        let mut debounce = Debounced::default();
        let mut filter = CatalogFilter::default();
        filter.set_page(2);

        let tickets: Vec<u64> = ["u", "ul", "ult", "ultra"]
            .into_iter()
            .map(|text| debounce.push(text.to_string()))
            .collect();

        let mut changes = 0;
        for ticket in tickets {
            if let Some(search) = debounce.settle(ticket) {
                if filter.set_search(search) {
                    changes += 1;
                }
            }
        }

        assert_eq!(changes, 1);
        assert_eq!(filter.search(), "ultra");
        assert_eq!(filter.page(), 1);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn settled_value_is_handed_out_once() {
        let mut debounce = Debounced::default();
        let ticket = debounce.push("mesh".to_string());
        assert_eq!(debounce.settle(ticket).as_deref(), Some("mesh"));
        assert_eq!(debounce.settle(ticket), None);
    }

    #[test]
    fn keystroke_after_settle_starts_a_new_burst() {
        let mut debounce = Debounced::default();
        let first = debounce.push("bbs".to_string());
        assert_eq!(debounce.settle(first).as_deref(), Some("bbs"));
        let stale = debounce.push("oz".to_string());
        let latest = debounce.push("oz racing".to_string());
        assert_eq!(debounce.settle(stale), None);
        assert_eq!(debounce.settle(latest).as_deref(), Some("oz racing"));
    }

    #[test]
    fn pagination_first_page() {
        let p = Pagination {
            page: 1,
            pages: 3,
            total: 55,
        };
        assert!(p.is_visible());
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.summary(), "Page 1 of 3 (55 discs)");
    }

    #[test]
    fn pagination_last_page() {
        let p = Pagination {
            page: 3,
            pages: 3,
            total: 55,
        };
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn pagination_hidden_for_single_page() {
        let single = Pagination {
            page: 1,
            pages: 1,
            total: 4,
        };
        assert!(!single.is_visible());
        assert!(!Pagination::default().is_visible());
    }

    #[test]
    fn parses_disc_page() {
        let page: DiscPage = serde_json::from_value(json!({
            "discs": [{
                "_id": "65f0c0ffee",
                "brand": "BBS",
                "model": "CH-R",
                "diameter": 18,
                "width": 8.5,
                "pcd": "5x112",
                "et": 35,
                "center_bore": 66.6,
                "image_url": null
            }],
            "pagination": { "page": 2, "pages": 5, "total": 90 }
        }))
        .unwrap();
        assert_eq!(page.discs.len(), 1);
        assert_eq!(page.discs[0].id, "65f0c0ffee");
        assert_eq!(page.discs[0].spec_line(), "R18 · 8.5J · 5x112 · ET35");
        assert_eq!(page.pagination.pages, 5);
    }

    #[test]
    fn spec_line_skips_missing_parts() {
        let disc = DiscSummary {
            id: "1".into(),
            diameter: Some(17.0),
            et: Some(-10.0),
            ..Default::default()
        };
        assert_eq!(disc.spec_line(), "R17 · ET-10");
    }
}
