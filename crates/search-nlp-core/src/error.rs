use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("backend request failed: status={status}, body={body}")]
    BackendRequestFailed { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn missing(field: &str) -> Self {
        Self::Configuration(format!("{field} is required"))
    }

    /// HTTP status carried by a failed backend call, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BackendRequestFailed { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Rejects an empty or whitespace-only configuration value.
pub fn require(field: &str, value: &str) -> Result<(), ProviderError> {
    if value.trim().is_empty() {
        return Err(ProviderError::missing(field));
    }
    Ok(())
}
