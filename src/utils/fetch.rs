//! Network fetching utilities with timeout support.
//!
//! Provides async fetch functions for the drive API: JSON for listings and
//! probes, text and binary for preview content. Binary responses are wrapped
//! in object URLs for direct use by media elements.

use js_sys::{Array, Promise, Uint8Array};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Request, RequestInit, RequestMode, Response, Url};

use crate::config::{FETCH_TIMEOUT_MS, api};
use crate::core::error::FetchError;

// =============================================================================
// Drive API URLs
// =============================================================================

/// Listing URL for a directory path.
pub fn list_url(path: &str) -> String {
    format!("{}?path={}", api::LIST, encode_query(path))
}

/// Metadata probe URL for a file path.
pub fn probe_url(path: &str) -> String {
    format!("{}?file={}", api::PREVIEW, encode_query(path))
}

/// Content/download URL for a file path.
///
/// Also used verbatim as the preview modal's download link target.
pub fn download_url(path: &str) -> String {
    format!("{}?file={}", api::DOWNLOAD, encode_query(path))
}

fn encode_query(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

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
/// This is a reusable utility for implementing timeout behavior on any
/// JavaScript Promise using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    // Race the promises
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

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = fetch_response(url).await?;
    let text = read_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text content from a URL.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = fetch_response(url).await?;
    read_text(&resp).await
}

/// Fetch binary content from a URL and wrap it in an object URL.
///
/// The returned URL refers to a Blob typed with `mime` and must be revoked
/// with [`revoke_object_url`] once the content it backs is dropped.
pub async fn fetch_object_url(url: &str, mime: &str) -> Result<String, FetchError> {
    let resp = fetch_response(url).await?;

    let buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|_| FetchError::ResponseReadFailed)?,
    )
    .await
    .map_err(|_| FetchError::ResponseReadFailed)?;

    let parts = Array::new();
    parts.push(&Uint8Array::new(&buffer));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|_| FetchError::InvalidContent)?;
    Url::create_object_url_with_blob(&blob).map_err(|_| FetchError::InvalidContent)
}

/// Release an object URL created by [`fetch_object_url`].
pub fn revoke_object_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}

/// Perform a GET request with timeout and check the response status.
async fn fetch_response(url: &str) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }
            Ok(resp)
        }
    }
}

async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}
