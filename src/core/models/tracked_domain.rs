//! Tracked domain model
//!
//! A domain as listed by the traffic-tracking platform. Built fresh from each
//! listing call; nothing is cached or merged across calls.

use serde::{Deserialize, Serialize};

/// Activity state value that marks a domain as active
pub const ACTIVE_STATE: &str = "active";

/// A domain entry from the tracking platform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackedDomain {
    /// Platform identifier
    #[serde(default)]
    pub id: i64,
    /// Domain name
    pub name: String,
    /// Group label
    #[serde(default)]
    pub group: String,
    /// Activity state (e.g. "active")
    #[serde(rename = "state", default)]
    pub activity_state: String,
    /// Platform identifier of the group
    #[serde(default)]
    pub group_id: i64,
}

impl TrackedDomain {
    /// Whether the platform reports this domain as active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.activity_state == ACTIVE_STATE
    }
}
