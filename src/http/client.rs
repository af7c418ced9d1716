use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the client shared by every send task. Its connection pool is
/// released once the last clone is dropped.
///
/// # Errors
///
/// Returns an error when the underlying TLS backend or resolver cannot be
/// initialized.
pub fn build_client(timeout: Option<Duration>) -> AppResult<Client> {
    let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

    if let Some(timeout) = timeout {
        client_builder = client_builder.timeout(timeout);
    }

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(err) => {
            error!("Failed to build HTTP client: {}", err);
            Err(AppError::http(HttpError::BuildClientFailed { source: err }))
        }
    }
}
