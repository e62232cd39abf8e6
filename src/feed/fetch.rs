//! Blocking HTTP download of the feed body.

use super::FetchError;
use crate::debug;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GET `url` and return the response body.
///
/// Any non-2xx status is an error.
pub fn fetch_body(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    debug!("feed"; "GET {} (timeout {}s)", url, timeout.as_secs());
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes()?;
    debug!("feed"; "received {} bytes", body.len());
    Ok(body.to_vec())
}
