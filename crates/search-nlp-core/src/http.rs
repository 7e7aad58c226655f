use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ProviderError;

/// Builds a client with a request deadline only when the caller supplied one.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, ProviderError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Sends a prepared JSON request and decodes a 2xx body into `T`.
///
/// Non-success statuses become `BackendRequestFailed` carrying the raw body.
pub async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let res = request.send().await?;

    if !res.status().is_success() {
        let status = res.status().as_u16();
        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!(provider, status, error = %err, "failed to read error body");
                String::new()
            }
        };
        warn!(provider, status, "backend request failed");
        return Err(ProviderError::BackendRequestFailed { status, body });
    }

    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
