//! Shared response handling.

use crate::error::{ClientError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Turn a non-2xx response into an error.
pub(crate) async fn check(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => Err(ClientError::AuthRequired),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(error_text)),
        _ => Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        }),
    }
}

/// Check the status and decode a JSON body.
pub(crate) async fn json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}
