//! Outbound HTTP clients.

mod generation_client;
mod storage_client;

pub use generation_client::{GeminiClient, TextGenerator};
pub use storage_client::{HttpObjectStorage, ObjectStorage};

#[cfg(any(test, feature = "test-utils"))]
pub use generation_client::MockTextGenerator;
#[cfg(any(test, feature = "test-utils"))]
pub use storage_client::MockObjectStorage;

use std::time::Duration;

/// Shared HTTP client for outbound calls.
pub fn http_client(timeout_seconds: u64) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
}
