//! Network fetching utilities with timeout support.
//!
//! JSON over the Fetch API: `GET` for item data, `POST` for writes. Every
//! request races a timeout.

use glowboard_core::FetchError;
use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;

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

/// Race a promise against a timeout using `Promise.race`.
///
/// The timeout promise resolves to `undefined`, so a promise that itself
/// resolves to `undefined` is reported as [`RaceResult::TimedOut`].
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
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Best-effort message out of a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// `GET` a URL and parse the body as JSON.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = send("GET", url, None, FETCH_TIMEOUT_MS).await?;
    parse_json(&text)
}

/// `POST` a JSON body and parse the JSON response.
pub async fn post_json<B, T>(url: &str, body: &B, timeout_ms: i32) -> Result<T, FetchError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body).map_err(|e| FetchError::Json(e.to_string()))?;
    let text = send("POST", url, Some(&body), timeout_ms).await?;
    parse_json(&text)
}

/// `POST` a JSON body, ignoring whatever the server answers on success.
pub async fn post_ack<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), FetchError> {
    let body = serde_json::to_string(body).map_err(|e| FetchError::Json(e.to_string()))?;
    send("POST", url, Some(&body), FETCH_TIMEOUT_MS).await?;
    Ok(())
}

/// `GET` a URL, discarding the body.
pub async fn ping(url: &str) -> Result<(), FetchError> {
    send("GET", url, None, FETCH_TIMEOUT_MS).await.map(|_| ())
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::Json(e.to_string()))
}

/// Issue a request with the Fetch API, racing it against `timeout_ms`.
///
/// Non-2xx responses become [`FetchError::Http`] carrying the status text.
async fn send(
    method: &str,
    url: &str,
    body: Option<&str>,
    timeout_ms: i32,
) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(body) = body {
        let headers = Headers::new().map_err(|e| FetchError::Network(js_error_message(&e)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| FetchError::Network(js_error_message(&e)))?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, timeout_ms).await {
        RaceResult::TimedOut => {
            tracing::warn!(method, url, timeout_ms, "request timed out");
            Err(FetchError::Timeout)
        }
        RaceResult::Error(msg) => {
            tracing::warn!(method, url, error = %msg, "request failed");
            Err(FetchError::Network(msg))
        }
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| FetchError::Network("unexpected fetch result".to_string()))?;

            if !resp.ok() {
                tracing::warn!(method, url, status = resp.status(), "request rejected");
                return Err(FetchError::Http {
                    status: resp.status(),
                    status_text: resp.status_text(),
                });
            }

            let read = resp
                .text()
                .map_err(|e| FetchError::Network(js_error_message(&e)))?;
            let text = JsFuture::from(read)
                .await
                .map_err(|e| FetchError::Network(js_error_message(&e)))?;

            tracing::debug!(method, url, status = resp.status(), "request completed");
            Ok(text.as_string().unwrap_or_default())
        }
    }
}
