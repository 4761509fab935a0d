//! Request execution and response decoding.
//!
//! Requests are sent once; failures are not retried.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Send a request and turn every status other than 200 into [`ClientError::ApiError`].
///
/// # Errors
///
/// Returns `ClientError::HttpError` for transport failures and
/// `ClientError::ApiError` (carrying the raw body) for any status other than
/// 200 OK, including other 2xx codes.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    let status = response.status().as_u16();
    let url = response.url().to_string();
    debug!(status, url = %url, "Received response");

    if response.status() == StatusCode::OK {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError { status, url, body })
}

/// Decode a JSON response body, reporting shape mismatches as `InvalidResponse`.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to deserialize response from {}: error={}", endpoint, e);
        ClientError::InvalidResponse(format!("Failed to parse {} response: {}", endpoint, e))
    })
}
