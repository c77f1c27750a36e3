//! Scoring policy
//!
//! Malicious votes count fully and suspicious votes count at half weight.
//! Undetected engines are excluded from both the numerator and the
//! denominator. A domain is safe when its score is below [`SAFETY_THRESHOLD`].

use crate::core::models::AnalysisStats;

/// Scores at or above this value are unsafe
pub const SAFETY_THRESHOLD: u8 = 5;

/// Risk score in `0..=100` for a set of engine votes
///
/// `floor((100 * malicious + 50 * suspicious) / (malicious + suspicious + harmless))`,
/// or 0 when no engine voted malicious, suspicious or harmless.
#[must_use]
pub fn risk_score(stats: &AnalysisStats) -> u8 {
    let total = u128::from(stats.malicious) + u128::from(stats.suspicious) + u128::from(stats.harmless);
    if total == 0 {
        return 0;
    }

    let weighted = u128::from(stats.malicious) * 100 + u128::from(stats.suspicious) * 50;
    let score = (weighted / total).min(100);
    u8::try_from(score).unwrap_or(100)
}

/// Whether a risk score passes the safety threshold
#[must_use]
pub const fn is_safe(risk_score: u8) -> bool {
    risk_score < SAFETY_THRESHOLD
}
