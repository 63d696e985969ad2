//! HTTP helpers for JSON APIs with consistent timeouts and error handling. The
//! helpers do not store tokens; they only attach the bearer token provided by
//! the caller.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON authorized with `Authorization: Bearer <token>`.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = format!("Bearer {token}");
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .header("Authorization", &authorization)
            .header("Accept", "application/json")
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(&body),
        })
    }
}

/// Trims and truncates HTTP error bodies for user-facing messages.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
