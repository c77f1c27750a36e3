//! Offline reputation strategies
//!
//! [`OfflineReputation`] answers without any network call so the tool stays
//! usable without credentials. [`FallbackReputation`] wraps a live client and
//! substitutes offline verdicts when a check fails; it is only ever built
//! when the configuration asks for it.
//!
//! Every verdict produced here is tagged [`VerdictSource::Offline`].

use log::warn;

use crate::core::models::{AnalysisStats, RawVerdict, Verdict, VerdictSource};
use crate::core::ports::ReputationCheck;
use crate::error::FetchError;

/// Domains the offline strategy reports as safe
pub const OFFLINE_SAFE_DOMAINS: [&str; 4] = ["google.com", "github.com", "example.com", "microsoft.com"];

/// Deterministic placeholder verdicts
///
/// Allow-listed domains score 0. Everything else scores 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineReputation;

impl OfflineReputation {
    /// Synthetic engine votes for `domain`
    #[must_use]
    pub fn stats_for(domain: &str) -> AnalysisStats {
        if OFFLINE_SAFE_DOMAINS.contains(&domain) {
            AnalysisStats {
                harmless: 70,
                ..AnalysisStats::default()
            }
        } else {
            // 3 * 100 / 10 = 30
            AnalysisStats {
                malicious: 3,
                harmless: 7,
                ..AnalysisStats::default()
            }
        }
    }

    /// Synthetic reputation payload for `domain`
    #[must_use]
    pub fn payload_for(domain: &str) -> String {
        let stats = Self::stats_for(domain);
        serde_json::json!({
            "data": {
                "id": domain,
                "type": "domain",
                "attributes": {
                    "last_analysis_stats": stats,
                    "last_analysis_results": {},
                    "reputation": 0,
                    "offline": true
                }
            }
        })
        .to_string()
    }
}

impl ReputationCheck for OfflineReputation {
    fn check(&self, domain: &str) -> Result<Verdict, FetchError> {
        Ok(Verdict::from_stats(domain, &Self::stats_for(domain), VerdictSource::Offline))
    }

    fn check_raw(&self, domain: &str) -> Result<RawVerdict, FetchError> {
        Ok(RawVerdict::new(domain, Self::payload_for(domain)))
    }
}

/// Live checks that degrade to offline verdicts on failure
///
/// Only scored checks fall back. Raw checks always surface the live error.
#[derive(Debug, Clone)]
pub struct FallbackReputation<R> {
    live: R,
}

impl<R: ReputationCheck> FallbackReputation<R> {
    /// Wrap a live client
    #[must_use]
    pub const fn new(live: R) -> Self {
        Self { live }
    }
}

impl<R: ReputationCheck> ReputationCheck for FallbackReputation<R> {
    fn check(&self, domain: &str) -> Result<Verdict, FetchError> {
        self.live.check(domain).or_else(|e| {
            warn!("live check for {domain} failed ({e}), reporting offline verdict");
            OfflineReputation.check(domain)
        })
    }

    fn check_raw(&self, domain: &str) -> Result<RawVerdict, FetchError> {
        self.live.check_raw(domain)
    }
}
