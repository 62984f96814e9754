//! HTTP client utilities.
//!
//! One parameterized GET routine carries the whole status policy for both
//! analytics endpoints, so the 200/201/401 handling exists in exactly one
//! place.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde_json::Value;

use crate::error::{FlowlyticsError, Result};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// No client-level user agent is set; the console checks the browser UA,
/// which arrives with the per-request session headers.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .build()
        .map_err(|e| FlowlyticsError::Network(e.to_string()))
}

/// Issue an authenticated GET and resolve it to a terminal outcome.
///
/// Status policy:
/// - 200/201: the JSON body, passed through unvalidated.
/// - 401: [`FlowlyticsError::AuthRejected`] carrying the body's `status`
///   sub-object; `errorType`/`errorDetails` are logged for operators.
/// - anything else: [`FlowlyticsError::UnexpectedStatus`] with the raw
///   status and body. Every outcome terminates; no status leaves the
///   future pending.
pub(crate) async fn get_json(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
    timeout: Duration,
) -> Result<Value> {
    tracing::debug!(url, "issuing analytics request");

    let response = client
        .get(url)
        .headers(headers.clone())
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                FlowlyticsError::Timeout(timeout.as_secs())
            } else {
                FlowlyticsError::Network(e.to_string())
            }
        })?;

    let status = response.status();
    match status {
        StatusCode::OK | StatusCode::CREATED => response
            .json()
            .await
            .map_err(|e| FlowlyticsError::ParseResponse(e.to_string())),
        StatusCode::UNAUTHORIZED => Err(auth_rejected(read_body(response).await)),
        other => Err(FlowlyticsError::UnexpectedStatus {
            status: other.as_u16(),
            body: read_body(response).await,
        }),
    }
}

/// Read an error-path body, kept as JSON when it parses and as the raw
/// text otherwise.
async fn read_body(response: Response) -> Value {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Map a 401 body into the auth failure, surfacing the `status` sub-object
/// verbatim.
fn auth_rejected(body: Value) -> FlowlyticsError {
    let status = body.get("status").cloned().unwrap_or(Value::Null);
    let error_type = status_field(&status, "errorType");
    let error_details = status_field(&status, "errorDetails");

    tracing::warn!(
        error_type = %error_type,
        error_details = %error_details,
        "console rejected session tokens"
    );

    FlowlyticsError::AuthRejected {
        error_type,
        error_details,
        status,
    }
}

fn status_field(status: &Value, key: &str) -> String {
    match status.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "unknown".to_string(),
    }
}
