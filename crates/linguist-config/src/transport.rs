use std::env;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    30
}

fn default_worker_threads() -> usize {
    2
}

fn default_user_agent() -> String {
    concat!("linguist/", env!("CARGO_PKG_VERSION")).to_string()
}

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Whole-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Worker threads of the runtime driving requests
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            worker_threads: default_worker_threads(),
            user_agent: default_user_agent(),
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("LINGUIST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let worker_threads = env::var("LINGUIST_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|threads| *threads > 0)
            .unwrap_or_else(default_worker_threads);

        Self {
            timeout_seconds,
            worker_threads,
            user_agent: default_user_agent(),
        }
    }
}
