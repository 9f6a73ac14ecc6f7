//! HTTP client utilities
//!
//! Provides a reqwest::Client configured with timeouts and the crate
//! user agent. System proxy environment variables (HTTP_PROXY,
//! HTTPS_PROXY, NO_PROXY) are honored by reqwest itself.

use reqwest::Client;
use std::time::Duration;

/// Default timeout applied to every outbound call (rates, CMS, forms, mail)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a reqwest Client with the given timeout
pub fn client_with_timeout(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("kayjay/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

/// Build a client with the default timeout
pub fn default_client() -> Client {
    client_with_timeout(DEFAULT_TIMEOUT)
}
