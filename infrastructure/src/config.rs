use dotenvy::dotenv;
use std::env;

/// Default delay before the mock resume "analysis" finishes.
const DEFAULT_UPLOAD_DELAY_MS: u64 = 2000;

pub struct Config {
    pub upload_delay_ms: u64,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            upload_delay_ms: env::var("COACH_UPLOAD_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPLOAD_DELAY_MS),
        }
    }
}
