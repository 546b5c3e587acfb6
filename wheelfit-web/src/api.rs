use crate::config::ApiConfig;
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use wheelfit_common::{BrandList, CatalogFilter, DiscPage, FitmentRequest, FitmentResponse};

/// Client for the disc catalog and fitment endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Distinct brand names for the filter dropdown
    pub async fn fetch_brands(&self) -> Result<Vec<String>, ApiError> {
        let url = self.config.brands_url();
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        let list: BrandList = decode(resp).await?;
        Ok(list.brands)
    }

    /// One page of discs matching the filter
    pub async fn fetch_discs(&self, filter: &CatalogFilter) -> Result<DiscPage, ApiError> {
        let url = self.config.discs_url();
        let query = filter.query_pairs();
        debug!("GET {} {:?}", url, query);
        let resp = self.http.get(&url).query(&query).send().await?;
        decode(resp).await
    }

    pub async fn submit_fitment(
        &self,
        request: &FitmentRequest,
    ) -> Result<FitmentResponse, ApiError> {
        let url = self.config.fitment_url();
        debug!("POST {} disc={}", url, request.disc_id);
        let resp = self.http.post(&url).json(request).send().await?;
        decode(resp).await
    }
}

/// Parse a JSON body, turning non-2xx responses into `ApiError::Server`.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        warn!("Request failed with {}", status);
        return Err(ApiError::from_response_body(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}
