//! Network fetching utilities with timeout support.
//!
//! Provides async fetch functions with timeout racing over the browser
//! Fetch API. Every request is bounded by [`FETCH_TIMEOUT_MS`].

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// The timeout promise resolves to `undefined`, which is how a timeout is
/// told apart from a real response.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// HTTP methods used against the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fetch text content from a URL.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    fetch_url(Method::Get, url, None).await
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(Method::Get, url, None).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Send a JSON body and return the raw response text.
pub async fn send_json<B: Serialize>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<String, FetchError> {
    let body = serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;
    fetch_url(method, url, Some(body)).await
}

/// Fetch text from a URL using the Fetch API with timeout.
///
/// Non-2xx responses become [`FetchError::HttpError`] carrying the body, so
/// callers can surface API error messages.
async fn fetch_url(method: Method, url: &str, body: Option<String>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    // Headers and body share one deadline; a body that stalls still times out.
    let started = js_sys::Date::now();
    let fetch_promise = window.fetch_with_request(&request);

    let resp: Response = match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => result.dyn_into().map_err(|_| FetchError::InvalidContent)?,
    };

    let budget = remaining_budget(started, js_sys::Date::now(), FETCH_TIMEOUT_MS)
        .ok_or(FetchError::Timeout)?;
    let text = read_text(&resp, budget).await?;

    if !resp.ok() {
        return Err(FetchError::HttpError {
            status: resp.status(),
            body: text,
        });
    }
    Ok(text)
}

async fn read_text(resp: &Response, timeout_ms: i32) -> Result<String, FetchError> {
    let body = resp.text().map_err(|_| FetchError::ResponseReadFailed)?;
    match race_with_timeout(body, timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(_) => Err(FetchError::ResponseReadFailed),
        RaceResult::Completed(text) => text.as_string().ok_or(FetchError::InvalidContent),
    }
}

/// Milliseconds left of `timeout_ms` since `started_ms`, or `None` once spent.
fn remaining_budget(started_ms: f64, now_ms: f64, timeout_ms: i32) -> Option<i32> {
    let elapsed = (now_ms - started_ms).max(0.0);
    let left = f64::from(timeout_ms) - elapsed;
    (left >= 1.0).then(|| left as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_budget_shrinks_with_elapsed_time() {
        assert_eq!(remaining_budget(1_000.0, 1_000.0, 10_000), Some(10_000));
        assert_eq!(remaining_budget(1_000.0, 4_500.0, 10_000), Some(6_500));
    }

    #[test]
    fn test_remaining_budget_spent() {
        assert_eq!(remaining_budget(0.0, 10_000.0, 10_000), None);
        assert_eq!(remaining_budget(0.0, 12_000.0, 10_000), None);
    }

    #[test]
    fn test_remaining_budget_ignores_clock_going_backwards() {
        assert_eq!(remaining_budget(5_000.0, 4_000.0, 10_000), Some(10_000));
    }
}
