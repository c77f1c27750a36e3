//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that do network I/O:
//!
//! - `virustotal/` - Live reputation lookups
//! - `offline` - Placeholder verdicts and the opt-in failure fallback
//! - `keitaro/` - Domain listings from the tracking platform
//! - `telegram/` - Chat transport over the Bot API
//!
//! [`reputation_client`] is the one place that decides which reputation
//! strategy a caller gets.

mod http;
pub mod keitaro;
pub mod offline;
pub mod telegram;
pub mod virustotal;

use log::warn;

pub use keitaro::KeitaroClient;
pub use offline::{FallbackReputation, OfflineReputation};
pub use telegram::TelegramTransport;
pub use virustotal::VirusTotalClient;

use crate::config::{ScanConfig, VirusTotalConfig};
use crate::core::ports::ReputationCheck;
use crate::error::FetchError;

/// Select the reputation strategy for a configuration
///
/// - no API key: [`OfflineReputation`]
/// - API key: [`VirusTotalClient`], wrapped in [`FallbackReputation`] when
///   `scan.fallback_on_error` is set
pub fn reputation_client(
    config: &VirusTotalConfig,
    scan: ScanConfig,
) -> Result<Box<dyn ReputationCheck>, FetchError> {
    if !config.has_key() {
        warn!("no VirusTotal API key configured, using offline placeholder verdicts");
        return Ok(Box::new(OfflineReputation));
    }

    let live = VirusTotalClient::new(config)?;
    if scan.fallback_on_error {
        warn!("offline fallback enabled: failed checks will report placeholder verdicts");
        Ok(Box::new(FallbackReputation::new(live)))
    } else {
        Ok(Box::new(live))
    }
}
