//! Wire types for `POST /api/fitment` and the view-model built from a response.

use serde::{Deserialize, Serialize};

/// Shown when a failed response carries no usable `error` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong while processing the request";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentRequest {
    pub disc_id: String,
    pub car_image_base64: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DiscDetails {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub diameter: Option<f64>,
    pub width: Option<f64>,
    pub pcd: Option<String>,
    pub et: Option<f64>,
    pub center_bore: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FitmentResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub disc_details: Option<DiscDetails>,
    pub ai_prompt_generated: Option<String>,
    #[serde(rename = "resultImageBase64")]
    pub result_image_base64: Option<String>,
    pub image_optimized: Option<bool>,
    pub original_size: Option<u64>,
    pub optimized_size: Option<u64>,
}

/// Body of a non-2xx response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

impl ErrorBody {
    /// The server's message, or the generic fallback when it sent none.
    pub fn message(self) -> String {
        self.error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    }
}

/// One labelled cell of the result spec grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// Which image the result panel shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultPreview {
    /// The composited image returned by the server
    Processed(String),
    /// The user's original upload, shown until processing finishes
    AwaitingProcessing(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptimizationSavings {
    pub original_size: u64,
    pub optimized_size: u64,
}

impl OptimizationSavings {
    /// Percentage saved, rounded to the nearest whole number.
    pub fn percent(&self) -> u64 {
        if self.original_size == 0 || self.optimized_size >= self.original_size {
            return 0;
        }
        let saved = self.original_size - self.optimized_size;
        (saved * 100 + self.original_size / 2) / self.original_size
    }
}

impl FitmentResponse {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Success")
    }

    /// Spec grid rows for the attributes present in `disc_details`.
    pub fn spec_rows(&self) -> Vec<SpecRow> {
        let Some(d) = self.disc_details.as_ref() else {
            return vec![];
        };
        let mut rows = Vec::new();
        let mut push = |label: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                rows.push(SpecRow { label, value });
            }
        };
        push("Brand", d.brand.clone());
        push("Model", d.model.clone());
        push("Diameter", d.diameter.map(|v| format!("{}\"", v)));
        push("Width", d.width.map(|v| format!("{}J", v)));
        push("PCD", d.pcd.clone());
        push("ET", d.et.map(|v| format!("{} mm", v)));
        push("Center bore", d.center_bore.map(|v| format!("{} mm", v)));
        rows
    }

    /// Savings reported by the server's image optimizer, if any.
    pub fn savings(&self) -> Option<OptimizationSavings> {
        if self.image_optimized == Some(false) {
            return None;
        }
        match (self.original_size, self.optimized_size) {
            (Some(original_size), Some(optimized_size)) if original_size > 0 => {
                Some(OptimizationSavings {
                    original_size,
                    optimized_size,
                })
            }
            _ => None,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.ai_prompt_generated
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }
}

/// A completed fitment together with the upload it was made from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitmentResult {
    pub response: FitmentResponse,
    pub original_image: String,
}

impl FitmentResult {
    pub fn preview(&self) -> ResultPreview {
        match self.response.result_image_base64.as_deref() {
            Some(image) if !image.is_empty() => ResultPreview::Processed(as_data_url(image)),
            _ => ResultPreview::AwaitingProcessing(self.original_image.clone()),
        }
    }
}

/// Raw base64 from the server is wrapped as PNG; data URLs pass through.
fn as_data_url(image: &str) -> String {
    if image.starts_with("data:") {
        image.to_string()
    } else {
        format!("data:image/png;base64,{}", image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> FitmentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_uses_camel_case_keys() {
        let req = FitmentRequest {
            disc_id: "abc".into(),
            car_image_base64: "data:image/png;base64,AAAA".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "discId": "abc", "carImageBase64": "data:image/png;base64,AAAA" })
        );
    }

    #[test]
    fn preview_uses_result_image_when_present() {
        let result = FitmentResult {
            response: parse(json!({ "resultImageBase64": "data:image/jpeg;base64,Zm9v" })),
            original_image: "data:image/png;base64,b3JpZw==".into(),
        };
        assert_eq!(
            result.preview(),
            ResultPreview::Processed("data:image/jpeg;base64,Zm9v".into())
        );
    }

    #[test]
    fn preview_wraps_raw_base64() {
        let result = FitmentResult {
            response: parse(json!({ "resultImageBase64": "Zm9v" })),
            original_image: String::new(),
        };
        assert_eq!(
            result.preview(),
            ResultPreview::Processed("data:image/png;base64,Zm9v".into())
        );
    }

    #[test]
    fn preview_falls_back_to_original_upload() {
        let result = FitmentResult {
            response: parse(json!({ "status": "Ready for AI" })),
            original_image: "data:image/png;base64,b3JpZw==".into(),
        };
        assert_eq!(
            result.preview(),
            ResultPreview::AwaitingProcessing("data:image/png;base64,b3JpZw==".into())
        );
    }

    #[test]
    fn spec_rows_only_include_present_attributes() {
        let response = parse(json!({
            "disc_details": { "brand": "BBS", "model": "LM", "diameter": 19, "pcd": "5x120" }
        }));
        let labels: Vec<_> = response.spec_rows().iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Brand", "Model", "Diameter", "PCD"]);
        assert_eq!(response.spec_rows()[2].value, "19\"");
    }

    #[test]
    fn spec_rows_empty_without_details() {
        assert!(FitmentResponse::default().spec_rows().is_empty());
    }

    #[test]
    fn status_defaults_to_success() {
        assert_eq!(FitmentResponse::default().status_label(), "Success");
        assert_eq!(
            parse(json!({ "status": "Ready for AI" })).status_label(),
            "Ready for AI"
        );
    }

    #[test]
    fn savings_reported_when_sizes_present() {
        let response = parse(json!({
            "image_optimized": true,
            "original_size": 4_000_000,
            "optimized_size": 1_000_000
        }));
        let savings = response.savings().unwrap();
        assert_eq!(savings.percent(), 75);
    }

    #[test]
    fn savings_absent_when_not_optimized() {
        let response = parse(json!({
            "image_optimized": false,
            "original_size": 100,
            "optimized_size": 100
        }));
        assert_eq!(response.savings(), None);
        assert_eq!(FitmentResponse::default().savings(), None);
    }

    #[test]
    fn error_body_message_is_exact() {
        let body: ErrorBody = serde_json::from_value(json!({ "error": "X" })).unwrap();
        assert_eq!(body.message(), "X");
    }

    #[test]
    fn error_body_without_message_uses_default() {
        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn blank_prompt_is_hidden() {
        assert_eq!(parse(json!({ "ai_prompt_generated": "  " })).prompt(), None);
        assert_eq!(
            parse(json!({ "ai_prompt_generated": "Replace the wheel" })).prompt(),
            Some("Replace the wheel")
        );
    }
}
