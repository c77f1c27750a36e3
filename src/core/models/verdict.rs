//! Verdict model
//!
//! A verdict is the normalized outcome of one reputation check. Its safety
//! flag and risk score are always derived from engine votes, never set by a
//! caller, so `is_safe == (risk_score < SAFETY_THRESHOLD)` holds for every
//! value of this type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AnalysisStats;
use crate::core::services::scoring;

/// Where a verdict came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSource {
    /// Scored from a live reputation lookup
    #[default]
    Live,
    /// Placeholder produced without contacting the reputation service
    Offline,
}

impl std::fmt::Display for VerdictSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Presentation tier for a risk score
///
/// Tiers are for display only. Safety is decided by the threshold alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score up to 20
    Low,
    /// Score from 21 to 50
    Medium,
    /// Score above 50
    High,
}

impl RiskLevel {
    /// Tier for a risk score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score > 50 {
            Self::High
        } else if score > 20 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Normalized result of one reputation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    domain: String,
    is_safe: bool,
    risk_score: u8,
    checked_at: DateTime<Utc>,
    source: VerdictSource,
}

impl Verdict {
    /// Score engine votes for `domain`, stamped with the current time
    #[must_use]
    pub fn from_stats(domain: impl Into<String>, stats: &AnalysisStats, source: VerdictSource) -> Self {
        Self::from_stats_at(domain, stats, source, Utc::now())
    }

    /// Score engine votes for `domain` with an explicit completion time
    #[must_use]
    pub fn from_stats_at(
        domain: impl Into<String>,
        stats: &AnalysisStats,
        source: VerdictSource,
        checked_at: DateTime<Utc>,
    ) -> Self {
        let risk_score = scoring::risk_score(stats);
        Self {
            domain: domain.into(),
            is_safe: scoring::is_safe(risk_score),
            risk_score,
            checked_at,
            source,
        }
    }

    /// The queried domain, exactly as given
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether the risk score is below the safety threshold
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        self.is_safe
    }

    /// Risk score in `0..=100`
    #[must_use]
    pub const fn risk_score(&self) -> u8 {
        self.risk_score
    }

    /// Presentation tier of the risk score
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    /// When the check completed
    #[must_use]
    pub const fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    /// Whether this came from a live lookup or the offline strategy
    #[must_use]
    pub const fn source(&self) -> VerdictSource {
        self.source
    }

    /// `SAFE` or `UNSAFE`
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.is_safe { "SAFE" } else { "UNSAFE" }
    }
}
