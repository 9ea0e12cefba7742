//! PDF Fetcher — retrieves raw document bytes for a URL.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tracing::info;

use crate::errors::AppError;

/// Downloads a PDF from `url` using the shared HTTP client.
///
/// Only status 200 counts as success; any other status, and any transport
/// failure (DNS, refused connection, timeout), maps to `AppError::Download`
/// with no further detail surfaced to the caller.
pub async fn download_pdf(client: &Client, url: &str) -> Result<Bytes, AppError> {
    let response = client.get(url).send().await.map_err(|_| AppError::Download)?;

    if response.status() != StatusCode::OK {
        return Err(AppError::Download);
    }

    let bytes = response.bytes().await.map_err(|_| AppError::Download)?;
    info!("Downloaded {} bytes from {url}", bytes.len());

    Ok(bytes)
}
