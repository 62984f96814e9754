//! Manual smoke test against the live console.
//!
//! Feed it session tokens captured from an authenticated browser session
//! and it prints the joined analytics bundle as JSON on stdout.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowlytics::{AnalyticsClient, DEFAULT_BASE_URL, Tokens};

/// Fetch one analytics bundle from the Dialogflow console.
#[derive(Parser, Debug)]
#[command(name = "flowlytics-smoke")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// x-xsrf-token header value
    #[arg(long, env = "FLOWLYTICS_XSRF", hide_env_values = true)]
    xsrf: String,

    /// User agent of the browser session the cookies came from
    #[arg(long, env = "FLOWLYTICS_USER_AGENT")]
    user_agent: String,

    /// Raw cookie header value
    #[arg(long, env = "FLOWLYTICS_COOKIE", hide_env_values = true)]
    cookie: String,

    /// Authorization header value, including the Bearer prefix
    #[arg(long, env = "FLOWLYTICS_AUTH", hide_env_values = true)]
    auth: String,

    /// Lookback window in days
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    timeout: u64,

    /// Pretty-print the bundle
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flowlytics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let tokens = Tokens {
        xsrf: args.xsrf,
        user_agent: args.user_agent,
        cookie: args.cookie,
        auth: args.auth,
    };

    let client = AnalyticsClient::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(args.timeout))
        .context("building HTTP client")?;
    let bundle = client
        .fetch_bundle(&tokens, args.days)
        .await
        .context("fetching analytics bundle")?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&bundle)
    } else {
        serde_json::to_string(&bundle)
    }
    .context("serializing bundle")?;
    println!("{rendered}");

    Ok(())
}
