//! Caller-supplied session credentials and header construction.
//!
//! Tokens come from an authenticated browser session against the Dialogflow
//! console; acquiring them is the caller's problem. Both analytics requests
//! share the same derived header set.

use std::fmt;

use reqwest::header::{
    ACCEPT, AUTHORIZATION, COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};

use crate::error::{FlowlyticsError, Result};

/// The Accept value the console web app sends.
const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// CSRF header the console requires on API calls.
const XSRF_TOKEN: HeaderName = HeaderName::from_static("x-xsrf-token");

/// Session credential bundle for the console API.
///
/// All four values are sent verbatim; `auth` must already carry its
/// `Bearer ` prefix.
#[derive(Clone)]
pub struct Tokens {
    /// Value for the `x-xsrf-token` header.
    pub xsrf: String,
    /// User agent of the browser session the cookies were captured from.
    pub user_agent: String,
    /// Raw `cookie` header value of the console session.
    pub cookie: String,
    /// `Authorization` header value, e.g. `Bearer <uuid>`.
    pub auth: String,
}

impl Tokens {
    /// Build the header map both analytics endpoints expect.
    ///
    /// Produces exactly five headers: `x-xsrf-token`, `user-agent`,
    /// `cookie`, `accept`, and `authorization`. The mapping is
    /// deterministic and derived solely from the tokens.
    ///
    /// # Errors
    ///
    /// Returns [`FlowlyticsError::InvalidToken`] if a token contains bytes
    /// that are not legal in an HTTP header value.
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(XSRF_TOKEN, header_value("xsrf", &self.xsrf)?);
        headers.insert(USER_AGENT, header_value("user_agent", &self.user_agent)?);
        headers.insert(COOKIE, header_value("cookie", &self.cookie)?);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(AUTHORIZATION, header_value("auth", &self.auth)?);
        Ok(headers)
    }
}

fn header_value(name: &str, token: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(token).map_err(|_| FlowlyticsError::InvalidToken(name.to_string()))
}

// Session secrets must not leak through `{:?}` formatting.
impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("xsrf", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("cookie", &"<redacted>")
            .field("auth", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Tokens {
        Tokens {
            xsrf: "xsrf-token-value".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh)".to_string(),
            cookie: "_ga=GA1.2.1; zUserAccessToken=abc".to_string(),
            auth: "Bearer abc-123".to_string(),
        }
    }

    #[test]
    fn header_map_has_exactly_five_entries() {
        let headers = tokens().header_map().expect("headers");
        assert_eq!(headers.len(), 5);
        for key in ["x-xsrf-token", "user-agent", "cookie", "accept", "authorization"] {
            assert!(headers.contains_key(key), "missing header {key}");
        }
    }

    #[test]
    fn header_values_come_from_tokens() {
        let headers = tokens().header_map().expect("headers");
        assert_eq!(headers["x-xsrf-token"], "xsrf-token-value");
        assert_eq!(headers["user-agent"], "Mozilla/5.0 (Macintosh)");
        assert_eq!(headers["cookie"], "_ga=GA1.2.1; zUserAccessToken=abc");
        assert_eq!(headers["authorization"], "Bearer abc-123");
    }

    #[test]
    fn accept_matches_console_web_app() {
        let headers = tokens().header_map().expect("headers");
        assert_eq!(headers["accept"], "application/json, text/plain, */*");
    }

    #[test]
    fn header_map_is_deterministic() {
        let t = tokens();
        assert_eq!(t.header_map().expect("first"), t.header_map().expect("second"));
    }

    #[test]
    fn control_bytes_in_cookie_are_rejected() {
        let mut t = tokens();
        t.cookie = "broken\nvalue".to_string();
        match t.header_map() {
            Err(FlowlyticsError::InvalidToken(name)) => assert_eq!(name, "cookie"),
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", tokens());
        assert!(!rendered.contains("xsrf-token-value"));
        assert!(!rendered.contains("zUserAccessToken"));
        assert!(!rendered.contains("Bearer"));
        assert!(rendered.contains("<redacted>"));
        // The user agent is not a secret and stays readable.
        assert!(rendered.contains("Mozilla/5.0"));
    }
}
