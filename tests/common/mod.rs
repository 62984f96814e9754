//! Shared fixtures for the integration tests.
//!
//! Bodies mirror what the console actually returns so the pass-through
//! assertions exercise realistic payloads.

#![allow(dead_code)]

use serde_json::{Value, json};

use flowlytics::Tokens;

/// Path of the per-day message statistics endpoint.
pub const MESSAGES_PATH: &str = "/api/interactions/analytics/messages";

/// Path of the per-intent analytics endpoint.
pub const ANALYTICS_PATH: &str = "/api/interactions/analytics";

/// Tokens shaped like a captured console session.
pub fn session_tokens() -> Tokens {
    Tokens {
        xsrf: "060672b9-7277-46a3-bca2-068d6190e3d8".to_string(),
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/537.36"
            .to_string(),
        cookie: "_ga=GA1.2.3954341.1507907792; zUserAccessToken=9be32ec2-d0ab".to_string(),
        auth: "Bearer b2e9d1c2-8fc9-4b83-8a00-5d3347ef43db".to_string(),
    }
}

/// A realistic per-day message statistics body.
pub fn messages_body() -> Value {
    json!({
        "average_messages_per_user": {
            "24": {
                "current": [5.2142857142857144, 6.36231884057971, 5.903225806451613],
                "historical": [3.5, 4.893129770992366, 5.720430107526882]
            },
            "aggregated": {
                "current": 5.777027027027027,
                "historical": 5.563380281690141
            }
        },
        "human_timestamps": [
            "2018-02-18T00:00:00",
            "2018-02-19T00:00:00",
            "2018-02-20T00:00:00"
        ],
        "num_users": {
            "24": {
                "current": [14, 69, 31],
                "historical": [2, 131, 93]
            },
            "aggregated": {
                "current": 114,
                "historical": 226
            }
        },
        "status": 200,
        "timestamps": [1_518_912_000, 1_518_998_400, 1_519_084_800]
    })
}

/// A realistic per-intent analytics body.
pub fn analytics_body() -> Value {
    json!({
        "next_cursor": 50,
        "rows": [
            {
                "exit_rate": 0.110_599_078_341_013_83,
                "exit_rate_historical": 0.135_135_135_135_135_14,
                "intent": "LogWater",
                "message_groups_agent_response_time": {
                    "50_percent": 0.111,
                    "90_percent": 0.146
                },
                "message_groups_count": { "current": 217 },
                "message_groups_users_count": { "current": 35 }
            }
        ]
    })
}

/// The body the console sends alongside a 401.
pub fn auth_error_body(error_type: &str, error_details: &str) -> Value {
    json!({
        "status": {
            "code": 401,
            "errorType": error_type,
            "errorDetails": error_details
        }
    })
}
