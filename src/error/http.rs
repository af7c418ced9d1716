use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Outcome of a single failed reading submission.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("Request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected status {status} (expected {expected}).")]
    UnexpectedStatus { status: u16, expected: u16 },
    #[error("Send task failed: {message}")]
    TaskFailed { message: String },
}

impl SendError {
    /// Splits client errors into timeouts and everything else.
    #[must_use]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            SendError::Timeout { source }
        } else {
            SendError::Transport { source }
        }
    }
}
