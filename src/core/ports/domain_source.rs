//! Domain source port
//!
//! Defines the interface for listing domains from a tracking platform.

use crate::core::models::TrackedDomain;
use crate::core::services::filter;
use crate::error::FetchError;

/// Lists tracked domains
///
/// Only [`list_all`](Self::list_all) talks to the platform. The other
/// listings are client-side filters over it and keep upstream order. An empty
/// listing is a valid result, not an error.
pub trait DomainSource: Send + Sync {
    /// Every domain the platform knows about, in upstream order
    fn list_all(&self) -> Result<Vec<TrackedDomain>, FetchError>;

    /// Domains whose activity state is "active"
    fn list_active(&self) -> Result<Vec<TrackedDomain>, FetchError> {
        Ok(filter::active_only(self.list_all()?))
    }

    /// Domains whose group equals `group` exactly
    fn list_by_group(&self, group: &str) -> Result<Vec<TrackedDomain>, FetchError> {
        Ok(filter::by_group(self.list_all()?, group))
    }

    /// The first `n` domains
    fn list_limit(&self, n: usize) -> Result<Vec<TrackedDomain>, FetchError> {
        Ok(filter::limit(self.list_all()?, n))
    }
}
