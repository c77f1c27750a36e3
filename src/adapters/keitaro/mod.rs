//! Keitaro domain source adapter
//!
//! Implements [`DomainSource`] over the admin API's domain listing:
//! `GET {base}/domains` authenticated by the `Api-Key` header. The endpoint
//! returns the full set in one response; there is no pagination.

use log::debug;
use reqwest::blocking::Client;

use super::http;
use crate::config::KeitaroConfig;
use crate::core::models::TrackedDomain;
use crate::core::ports::DomainSource;
use crate::error::FetchError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "Api-Key";

/// Keitaro admin API client
#[derive(Clone)]
pub struct KeitaroClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for KeitaroClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeitaroClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl KeitaroClient {
    /// Create a client for the configured endpoint and key
    pub fn new(config: &KeitaroConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: http::client(http::REQUEST_TIMEOUT)?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl DomainSource for KeitaroClient {
    fn list_all(&self) -> Result<Vec<TrackedDomain>, FetchError> {
        let url = http::join(&self.base_url, "domains");
        debug!("listing domains from {url}");

        let builder = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);
        let (status, body) = http::send(&self.http, builder)?;
        if status != 200 {
            return Err(FetchError::Status { status, body: None });
        }

        let domains: Vec<TrackedDomain> = serde_json::from_str(&body)?;
        debug!("domain listing returned {} entries", domains.len());
        Ok(domains)
    }
}
