//! Raw verdict model

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Unmodified reputation payload for one domain
///
/// A pass-through record: nothing is derived from the payload here.
/// Decode it with [`super::DomainReport::from_json`] when fields are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawVerdict {
    /// The queried domain, exactly as given
    pub domain: String,
    /// Response body as returned by the service
    pub raw_payload: String,
    /// When the payload was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawVerdict {
    /// Wrap a payload fetched now
    #[must_use]
    pub fn new(domain: impl Into<String>, raw_payload: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            raw_payload: raw_payload.into(),
            fetched_at: Utc::now(),
        }
    }
}
