use futures_util::StreamExt;
use reqwest::Client;
use url::Url;

use crate::error::SendError;
use crate::reading::SensorReading;

/// POSTs one reading as JSON and checks the response status.
///
/// # Errors
///
/// Returns [`SendError::UnexpectedStatus`] when the status differs from
/// `expected_status`, and a timeout or transport error when the exchange
/// itself fails.
pub async fn send_reading(
    client: &Client,
    endpoint: &Url,
    reading: &SensorReading,
    expected_status: u16,
) -> Result<u16, SendError> {
    let response = client
        .post(endpoint.clone())
        .json(reading)
        .send()
        .await
        .map_err(SendError::from_reqwest)?;
    let status = response.status().as_u16();
    drain_response_body(response)
        .await
        .map_err(SendError::from_reqwest)?;

    if status != expected_status {
        return Err(SendError::UnexpectedStatus {
            status,
            expected: expected_status,
        });
    }
    Ok(status)
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        drop(chunk?);
    }
    Ok(())
}
