//! HTTP API Client
//!
//! Functions for communicating with the OpsDesk REST API.
//!
//! Every call resolves to `Result<T, ApiFailure>`: transport errors,
//! non-success statuses and unparsable bodies all land in the same failure
//! type, so callers have exactly one completion path.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::fmt;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Local storage key holding an operator-chosen base URL
const API_URL_KEY: &str = "opsdesk_api_url";

/// Pick the base URL: stored value, then build-time value, then the default.
///
/// Blank values are skipped and trailing slashes trimmed.
pub fn resolve_api_base(stored: Option<String>, build_time: Option<&str>) -> String {
    let url = stored
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            build_time
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    url.trim().trim_end_matches('/').to_string()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Get the API base URL from local storage, the build environment, or the default
pub fn get_api_base() -> String {
    let stored = local_storage().and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    resolve_api_base(stored, option_env!("OPSDESK_API_URL"))
}

/// Save the API base URL in local storage. Returns false if storage is unavailable.
pub fn set_api_base(url: &str) -> bool {
    local_storage()
        .map(|storage| storage.set_item(API_URL_KEY, url.trim()).is_ok())
        .unwrap_or(false)
}

/// Forget any saved API base URL
pub fn clear_api_base() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(API_URL_KEY);
    }
}

// ============ Failure Type ============

/// Why an API call did not produce a usable response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// The request never got a response
    Network(String),
    /// The server answered with a non-success status
    Status { status: u16, message: String },
    /// The response body was not the expected JSON
    Parse(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Network(e) => write!(f, "Network error: {}", e),
            ApiFailure::Status { status, message } => write!(f, "{} (HTTP {})", message, status),
            ApiFailure::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

// ============ Response Types ============

/// Daily insight. `text` is optional; absence keeps the placeholder.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct DailyInsightResponse {
    #[serde(default)]
    pub text: Option<String>,
}

/// Bottleneck check. A missing list is treated as empty.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct BottleneckResponse {
    #[serde(default)]
    pub bottlenecks: Vec<String>,
}

/// Order submitted from the intake panel
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub item_name: String,
    pub quantity: u32,
}

/// Decision returned for a submitted order
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct DecisionResponse {
    pub decision: String,
    pub reason: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub assigned_staff: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Best human-readable message for a failed response body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.trim().to_string()
            }
        })
}

/// Decode a response, turning non-success statuses into `ApiFailure::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiFailure::Status {
            status,
            message: error_message(&body),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiFailure::Parse(e.to_string()))
}

// ============ API Functions ============

/// Fetch today's insight
pub async fn fetch_daily_insight() -> Result<DailyInsightResponse, ApiFailure> {
    let response = Request::get(&format!("{}/daily-insight", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    read_json(response).await
}

/// Run a bottleneck check
pub async fn fetch_bottlenecks() -> Result<BottleneckResponse, ApiFailure> {
    let response = Request::get(&format!("{}/bottleneck", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    read_json(response).await
}

/// Submit an order for a decision
pub async fn submit_order(order: &OrderRequest) -> Result<DecisionResponse, ApiFailure> {
    let response = Request::post(&format!("{}/order", get_api_base()))
        .json(order)
        .map_err(|e| ApiFailure::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_base_precedence() {
        assert_eq!(resolve_api_base(None, None), "http://127.0.0.1:8000");
        assert_eq!(
            resolve_api_base(None, Some("https://ops.example.com/")),
            "https://ops.example.com"
        );
        assert_eq!(
            resolve_api_base(Some("http://10.0.0.5:9000//".to_string()), Some("https://ops.example.com")),
            "http://10.0.0.5:9000"
        );
        assert_eq!(
            resolve_api_base(Some("   ".to_string()), None),
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn test_insight_text_is_optional() {
        let parsed: DailyInsightResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text, None);

        let parsed: DailyInsightResponse =
            serde_json::from_str(r#"{"text": "Inventory turnover improved 12% this week."}"#).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("Inventory turnover improved 12% this week."));
    }

    #[test]
    fn test_missing_bottlenecks_is_empty() {
        let parsed: BottleneckResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(parsed.bottlenecks.is_empty());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error":{"code":"VALIDATION_ERROR","message":"Validation error: quantity must be at least 1"},"request_id":"x"}"#),
            "Validation error: quantity must be at least 1"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "Unknown error");
    }

    #[test]
    fn test_failure_display() {
        let failure = ApiFailure::Status {
            status: 503,
            message: "Ledger error".to_string(),
        };
        assert_eq!(failure.to_string(), "Ledger error (HTTP 503)");
        assert_eq!(
            ApiFailure::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_order_request_omits_missing_phone() {
        let order = OrderRequest {
            customer_name: "Lena".to_string(),
            customer_email: "lena@shop.in".to_string(),
            customer_phone: None,
            item_name: "rice".to_string(),
            quantity: 2,
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("customer_phone"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_saved_api_base_wins() {
        assert!(set_api_base("http://192.168.1.20:8000/"));
        assert_eq!(get_api_base(), "http://192.168.1.20:8000");

        clear_api_base();
        assert_eq!(
            get_api_base(),
            resolve_api_base(None, option_env!("OPSDESK_API_URL"))
        );
    }
}
