//! VirusTotal reputation adapter
//!
//! Implements [`ReputationCheck`] with one `GET {base}/domains/{domain}` per
//! call, authenticated by the `x-apikey` header.

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::http;
use crate::config::VirusTotalConfig;
use crate::core::models::{AnalysisStats, RawVerdict, Verdict, VerdictSource};
use crate::core::ports::ReputationCheck;
use crate::error::FetchError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-apikey";

/// Live VirusTotal client
#[derive(Clone)]
pub struct VirusTotalClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for VirusTotalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirusTotalClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: UpstreamError,
}

#[derive(Deserialize)]
struct UpstreamError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl VirusTotalClient {
    /// Create a client for the configured endpoint and key
    pub fn new(config: &VirusTotalConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: http::client(http::REQUEST_TIMEOUT)?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn fetch(&self, domain: &str) -> Result<(u16, String), FetchError> {
        let url = http::join(&self.base_url, &format!("domains/{domain}"));
        debug!("requesting reputation for {domain}");

        let builder = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);
        let (status, body) = http::send(&self.http, builder)?;

        debug!("reputation lookup for {domain} returned HTTP {status} ({} bytes)", body.len());
        Ok((status, body))
    }
}

impl ReputationCheck for VirusTotalClient {
    fn check(&self, domain: &str) -> Result<Verdict, FetchError> {
        let (status, body) = self.fetch(domain)?;
        if status != 200 {
            return Err(FetchError::Status {
                status,
                body: Some(body),
            });
        }

        let stats = AnalysisStats::from_payload(&body)?;
        Ok(Verdict::from_stats(domain, &stats, VerdictSource::Live))
    }

    fn check_raw(&self, domain: &str) -> Result<RawVerdict, FetchError> {
        let (status, body) = self.fetch(domain)?;

        if let Ok(ErrorEnvelope { error }) = serde_json::from_str::<ErrorEnvelope>(&body) {
            return Err(FetchError::UpstreamReported {
                code: error.code,
                message: error.message,
            });
        }
        if status != 200 {
            return Err(FetchError::Status {
                status,
                body: Some(body),
            });
        }

        Ok(RawVerdict::new(domain, body))
    }
}
