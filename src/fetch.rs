//! Blocking HTTP GET shared by the snapshot loader and archive downloads
//!
//! A non-success status is surfaced as `FetchFailed` carrying the status text.
//! There is no retry.

use crate::error::{Result, fetch_failed, http_error};

const USER_AGENT: &str = concat!("openassets/", env!("CARGO_PKG_VERSION"));

/// Join a base URL and a path without doubling slashes
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Fetch `url` and return the body bytes
pub fn get_bytes(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| http_error(e.to_string()))?;

    tracing::debug!("GET {}", url);
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_failed(url, status.to_string()));
    }

    Ok(response.bytes()?.to_vec())
}
