//! API endpoint configuration
//!
//! The base URL is resolved once at startup: a compile-time
//! `WHEELFIT_API_BASE` wins, then the origin the page was served from, then
//! the local development server.

/// Address of the development backend.
const DEV_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_env() -> Self {
        let config = option_env!("WHEELFIT_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
            .or_else(|| page_origin().map(Self::new))
            .unwrap_or_else(|| Self::new(DEV_SERVER));
        tracing::debug!("API base URL: {}", config.base_url);
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn brands_url(&self) -> String {
        format!("{}/api/discs/brands", self.base_url)
    }

    pub fn discs_url(&self) -> String {
        format!("{}/api/discs", self.base_url)
    }

    pub fn fitment_url(&self) -> String {
        format!("{}/api/fitment", self.base_url)
    }
}

fn page_origin() -> Option<String> {
    let origin = web_sys_x::window()?.location().origin().ok()?;
    // file:// pages report "null"
    if origin.is_empty() || origin == "null" {
        return None;
    }
    Some(origin)
}
