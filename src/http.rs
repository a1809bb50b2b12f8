// src/http.rs
// Outbound HTTP client construction

use std::time::Duration;

/// Default bound on a single answer provider call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout; never longer than the overall timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build an HTTP client whose requests fail after `timeout`.
///
/// Create once at startup and share; reqwest pools connections internally.
pub fn create_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .pool_max_idle_per_host(10)
        .user_agent(concat!("bfhl/", env!("CARGO_PKG_VERSION")))
        .build()
}
