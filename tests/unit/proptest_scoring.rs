//! Property-based tests for the scoring policy
//!
//! Uses proptest to verify properties that should hold for all vote counts.

use domain_monitor::core::models::{AnalysisStats, Verdict, VerdictSource};
use domain_monitor::core::services::{SAFETY_THRESHOLD, risk_score};
use proptest::prelude::*;

fn stats(malicious: u64, suspicious: u64, harmless: u64, undetected: u64) -> AnalysisStats {
    AnalysisStats {
        malicious,
        suspicious,
        harmless,
        undetected,
    }
}

proptest! {
    /// Score matches the weighted formula exactly
    #[test]
    fn score_matches_formula(
        malicious in any::<u64>(),
        suspicious in any::<u64>(),
        harmless in any::<u64>(),
        undetected in any::<u64>()
    ) {
        let (m, s, h) = (u128::from(malicious), u128::from(suspicious), u128::from(harmless));
        let total = m + s + h;
        prop_assume!(total > 0);
        let expected = (100 * m + 50 * s) / total;
        prop_assert_eq!(u128::from(risk_score(&stats(malicious, suspicious, harmless, undetected))), expected);
    }

    /// Score is always within 0..=100
    #[test]
    fn score_is_bounded(
        malicious in any::<u64>(),
        suspicious in any::<u64>(),
        harmless in any::<u64>()
    ) {
        prop_assert!(risk_score(&stats(malicious, suspicious, harmless, 0)) <= 100);
    }

    /// Counters whose sum overflows u64 still score by the exact total
    #[test]
    fn score_exact_near_u64_max(
        malicious in (u64::MAX / 2)..=u64::MAX,
        harmless in (u64::MAX / 2)..=u64::MAX
    ) {
        let total = u128::from(malicious) + u128::from(harmless);
        let expected = u128::from(malicious) * 100 / total;
        prop_assert_eq!(u128::from(risk_score(&stats(malicious, 0, harmless, 0))), expected);
    }

    /// Undetected engines never change the score
    #[test]
    fn undetected_is_ignored(
        malicious in 0u64..1000,
        suspicious in 0u64..1000,
        harmless in 0u64..1000,
        undetected in 0u64..1000
    ) {
        prop_assert_eq!(
            risk_score(&stats(malicious, suspicious, harmless, 0)),
            risk_score(&stats(malicious, suspicious, harmless, undetected))
        );
    }

    /// Safety flag always agrees with the threshold
    #[test]
    fn safety_follows_threshold(
        malicious in 0u64..1000,
        suspicious in 0u64..1000,
        harmless in 0u64..1000
    ) {
        let v = Verdict::from_stats("p.example", &stats(malicious, suspicious, harmless, 0), VerdictSource::Live);
        prop_assert_eq!(v.is_safe(), v.risk_score() < SAFETY_THRESHOLD);
    }

    /// No votes at all means a safe zero score
    #[test]
    fn no_votes_is_safe(undetected in any::<u64>()) {
        let v = Verdict::from_stats("p.example", &stats(0, 0, 0, undetected), VerdictSource::Live);
        prop_assert_eq!(v.risk_score(), 0);
        prop_assert!(v.is_safe());
    }
}
