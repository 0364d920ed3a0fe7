use std::time::Duration;

use reqwest::Client;

/// Builds the shared HTTP client used for all provider calls. The timeout is
/// the explicit per-call ceiling; a timed-out call counts as a failure for
/// that single image or completion, never for the whole batch.
pub fn build_http_client(timeout_seconds: u64) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
}
