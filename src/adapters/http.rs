//! Shared blocking HTTP plumbing for the upstream adapters

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};

use crate::error::FetchError;

/// Fixed per-call timeout for upstream API calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("domain-monitor/", env!("CARGO_PKG_VERSION"));

/// Build a blocking client with the given total request timeout
pub fn client(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Request)
}

/// Send a request and read the whole body
///
/// Returns the status code with the body text. Status interpretation is left
/// to the caller.
pub fn send(client: &Client, builder: RequestBuilder) -> Result<(u16, String), FetchError> {
    let request = builder.build().map_err(FetchError::Request)?;
    let response = client.execute(request).map_err(FetchError::Transport)?;
    let status = response.status().as_u16();
    let body = response.text().map_err(FetchError::Body)?;
    Ok((status, body))
}

/// Join a base URL and a path without doubling slashes
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
