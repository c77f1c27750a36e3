//! Reputation service port
//!
//! Defines the check contract shared by the live client and the offline
//! strategy.

use crate::core::models::{RawVerdict, Verdict};
use crate::error::FetchError;

/// Reputation lookup for a single domain
///
/// Each call is independent: one outbound request (or none, for offline
/// implementations), no shared mutable state, no retry. Callers validate and
/// trim `domain`; implementations do not check domain syntax.
pub trait ReputationCheck: Send + Sync {
    /// Look up `domain` and score the engine votes
    fn check(&self, domain: &str) -> Result<Verdict, FetchError>;

    /// Look up `domain` and return the response body verbatim
    fn check_raw(&self, domain: &str) -> Result<RawVerdict, FetchError>;
}
