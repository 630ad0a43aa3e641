//! HTTP API Client
//!
//! The single network call the dashboard makes, plus endpoint resolution.

use gloo_net::http::Request;

use crate::state::global::AnalyticsPayload;

/// Default analytics endpoint URL
pub const DEFAULT_ENDPOINT: &str =
    "https://dietanalysisfunctionapp-e4hscudnhdajd5g3.canadacentral-01.azurewebsites.net/api/DietAnalysisFunction";

/// Get the analytics endpoint from local storage or use default
pub fn get_endpoint() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("nutriscope_endpoint") {
                url
            } else {
                DEFAULT_ENDPOINT.to_string()
            }
        } else {
            DEFAULT_ENDPOINT.to_string()
        }
    } else {
        DEFAULT_ENDPOINT.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the analytics endpoint in local storage
pub fn set_endpoint(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("nutriscope_endpoint", url);
        }
    }
}

/// Clear the endpoint override, falling back to [`DEFAULT_ENDPOINT`]
pub fn reset_endpoint() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item("nutriscope_endpoint");
        }
    }
}

/// Error envelope the endpoint returns on failure
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Fetch the analytics payload
///
/// One GET, no parameters, no retry. Any network or parse failure comes
/// back as a single error string for the caller to log.
pub async fn fetch_analytics() -> Result<AnalyticsPayload, String> {
    let endpoint = get_endpoint();

    let response = Request::get(&endpoint)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: format!("Request failed with status {}", status) });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
