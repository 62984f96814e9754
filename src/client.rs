//! The analytics client and the two-endpoint bundle join.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::{self, DEFAULT_TIMEOUT};
use crate::tokens::Tokens;

/// Production console host.
pub const DEFAULT_BASE_URL: &str = "https://console.dialogflow.com";

/// Joined result of the messages and analytics fetches.
///
/// Exists only when both fetches succeed; there is no partially populated
/// bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsBundle {
    /// Per-day message statistics, as returned by the console.
    pub messages: Value,
    /// Per-intent analytics rows, as returned by the console.
    pub analytics: Value,
}

/// Client for the Dialogflow console analytics API.
///
/// Holds a configured HTTP client and the console base URL. The base is
/// overridable so tests can point at a local mock server.
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AnalyticsClient {
    /// Create a client against the production console with the default
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client construction fails.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client against an arbitrary host with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client construction fails.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Fetch per-day message statistics.
    ///
    /// The body is passed through unvalidated. It is documented to contain
    /// `status`, `timestamps`, `human_timestamps`, `num_users`, and
    /// `average_messages_per_user`; the bucketed fields each carry
    /// `current`/`historical` arrays plus an `aggregated` summary.
    ///
    /// # Errors
    ///
    /// See [`crate::FlowlyticsError`] for the failure taxonomy.
    pub async fn fetch_messages(&self, headers: &HeaderMap, days_ago: u32) -> Result<Value> {
        let url = format!(
            "{}/api/interactions/analytics/messages?timeInterval={days_ago}",
            self.base_url
        );
        http::get_json(&self.client, &url, headers, self.timeout).await
    }

    /// Fetch per-intent analytics rows.
    ///
    /// Documented shape: `next_cursor` plus `rows`, one row per intent with
    /// exit rates, message-group counts, and (for intents not using the
    /// webhook) agent-response-time percentiles.
    ///
    /// # Errors
    ///
    /// See [`crate::FlowlyticsError`] for the failure taxonomy.
    pub async fn fetch_analytics(&self, headers: &HeaderMap, days_ago: u32) -> Result<Value> {
        let url = format!(
            "{}/api/interactions/analytics?timeInterval={days_ago}",
            self.base_url
        );
        http::get_json(&self.client, &url, headers, self.timeout).await
    }

    /// Fetch both endpoints concurrently and join them into one bundle.
    ///
    /// The header map is built once and shared read-only by both requests,
    /// which are in flight simultaneously. The join is all-or-nothing: the
    /// first failure wins and the other fetch is dropped.
    ///
    /// # Errors
    ///
    /// Fails if header construction or either fetch fails. No retries.
    pub async fn fetch_bundle(&self, tokens: &Tokens, days_ago: u32) -> Result<AnalyticsBundle> {
        let headers = tokens.header_map()?;

        let (messages, analytics) = tokio::try_join!(
            self.fetch_messages(&headers, days_ago),
            self.fetch_analytics(&headers, days_ago),
        )?;

        Ok(AnalyticsBundle {
            messages,
            analytics,
        })
    }
}

/// Fetch a bundle from the production console.
///
/// One-shot library entry point: builds a default client, fetches both
/// endpoints concurrently with the given lookback window in days, and
/// resolves to the joined bundle.
///
/// # Errors
///
/// Fails if either fetch fails; see [`crate::FlowlyticsError`].
pub async fn fetch_analytics_bundle(tokens: &Tokens, days_ago: u32) -> Result<AnalyticsBundle> {
    AnalyticsClient::new()?.fetch_bundle(tokens, days_ago).await
}
