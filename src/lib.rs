//! flowlytics - Dialogflow console analytics client
//!
//! A small wrapper around the Dialogflow console's private analytics API:
//! two authenticated GETs (per-day message statistics and per-intent
//! analytics rows) issued concurrently and joined into one bundle.
//!
//! The caller supplies session tokens captured from an authenticated
//! console session; this crate never acquires, refreshes, or persists them.
//!
//! ```no_run
//! use flowlytics::{Tokens, fetch_analytics_bundle};
//!
//! # async fn run() -> flowlytics::Result<()> {
//! let tokens = Tokens {
//!     xsrf: "060672b9-...".into(),
//!     user_agent: "Mozilla/5.0 ...".into(),
//!     cookie: "_ga=...; zUserAccessToken=...".into(),
//!     auth: "Bearer b2e9d1c2-...".into(),
//! };
//!
//! let bundle = fetch_analytics_bundle(&tokens, 7).await?;
//! println!("{}", bundle.analytics["rows"]);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod http;
pub mod tokens;

pub use client::{AnalyticsBundle, AnalyticsClient, DEFAULT_BASE_URL, fetch_analytics_bundle};
pub use error::{FlowlyticsError, Result};
pub use tokens::Tokens;
