//! Client-side filters over domain listings
//!
//! The tracking platform offers no server-side filtering, so these run on the
//! full listing. All of them preserve upstream order.

use crate::core::models::TrackedDomain;

/// Keep only domains whose activity state is exactly "active"
#[must_use]
pub fn active_only(domains: Vec<TrackedDomain>) -> Vec<TrackedDomain> {
    domains.into_iter().filter(TrackedDomain::is_active).collect()
}

/// Keep only domains whose group equals `group` (case-sensitive, untrimmed)
#[must_use]
pub fn by_group(domains: Vec<TrackedDomain>, group: &str) -> Vec<TrackedDomain> {
    domains.into_iter().filter(|d| d.group == group).collect()
}

/// Keep the first `n` domains
#[must_use]
pub fn limit(mut domains: Vec<TrackedDomain>, n: usize) -> Vec<TrackedDomain> {
    domains.truncate(n);
    domains
}
