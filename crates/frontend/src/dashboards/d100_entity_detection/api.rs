use super::state::DetectionRequest;
use crate::shared::config::DashboardConfig;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Why a detection call failed. The dashboard shows the same generic
/// message for every variant; the cause only goes to the log.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("failed to encode query: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Full detector URL including the query string
pub fn detection_url(
    config: &DashboardConfig,
    request: &DetectionRequest,
) -> Result<String, DetectionError> {
    let query =
        serde_qs::to_string(&request.query).map_err(|e| DetectionError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", config.endpoint_url(&request.path_segment), query))
}

/// Run a detector and return its JSON body as is
pub async fn detect(url: &str) -> Result<Value, DetectionError> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| DetectionError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(DetectionError::Status(response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| DetectionError::Decode(e.to_string()))
}
