//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use chrono::{TimeZone, Utc};
use domain_monitor::core::models::{AnalysisStats, RawVerdict, Verdict, VerdictSource};
use domain_monitor::core::services::ScanEntry;
use domain_monitor::error::FetchError;
use domain_monitor::output::{CheckItem, CheckResult, DetailedReport, OutputMode, RawResult, VerdictInfo};

fn verdict(domain: &str, malicious: u64, harmless: u64) -> Verdict {
    let stats = AnalysisStats {
        malicious,
        harmless,
        ..AnalysisStats::default()
    };
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 45).unwrap();
    Verdict::from_stats_at(domain, &stats, VerdictSource::Live, at)
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// VerdictInfo Tests
// =============================================================================

#[test]
fn verdict_info_serialization() {
    let info = VerdictInfo::from(&verdict("bad.example", 60, 40));
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["domain"], "bad.example");
    assert_eq!(json["status"], "UNSAFE");
    assert_eq!(json["risk_score"], 60);
    assert_eq!(json["risk_level"], "high");
    assert_eq!(json["source"], "live");
    assert_eq!(json["checked_at"], "2026-03-01T12:30:45Z");
}

#[test]
fn verdict_info_human_lines() {
    colored::control::set_override(false);
    let lines = VerdictInfo::from(&verdict("ok.example", 0, 10)).human_lines();
    assert_eq!(lines[0], "   Status: SAFE");
    assert_eq!(lines[1], "   Risk Score: 0% (Low)");
    assert_eq!(lines[2], "   Checked: 12:30:45");
    assert_eq!(lines.len(), 3);
}

// =============================================================================
// CheckResult Tests
// =============================================================================

#[test]
fn check_result_counts() {
    let entries = [
        ScanEntry {
            domain: "ok.example".to_string(),
            outcome: Ok(verdict("ok.example", 0, 10)),
        },
        ScanEntry {
            domain: "bad.example".to_string(),
            outcome: Ok(verdict("bad.example", 5, 5)),
        },
        ScanEntry {
            domain: "down.example".to_string(),
            outcome: Err(FetchError::Status {
                status: 503,
                body: None,
            }),
        },
    ];
    let result = CheckResult::from_items(entries.iter().map(CheckItem::from).collect());

    assert_eq!(result.checked, 3);
    assert_eq!(result.safe, 1);
    assert_eq!(result.unsafe_count, 1);
    assert_eq!(result.failed, 1);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"unsafe\":1"));
    assert!(json.contains("\"error\":\"upstream returned HTTP 503\""));
}

#[test]
fn check_result_empty() {
    let result = CheckResult::from_items(vec![]);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"results\":[]"));
}

// =============================================================================
// RawResult / DetailedReport Tests
// =============================================================================

#[test]
fn raw_result_keeps_non_json_payload_as_string() {
    let raw = RawVerdict::new("a.example", "plain text");
    let result = RawResult::from(&raw);
    assert_eq!(result.payload, serde_json::Value::String("plain text".to_string()));
}

#[test]
fn raw_result_embeds_json_payload() {
    let raw = RawVerdict::new("a.example", r#"{"data": {"id": "a.example"}}"#);
    let result = RawResult::from(&raw);
    assert_eq!(result.payload["data"]["id"], "a.example");
}

#[test]
fn detailed_report_from_raw() {
    let raw = RawVerdict::new(
        "a.example",
        r#"{"data": {"attributes": {
            "last_analysis_stats": {"malicious": 2, "suspicious": 1, "harmless": 3, "undetected": 4},
            "last_analysis_results": {
                "b-engine": {"category": "malicious"},
                "a-engine": {"category": "malicious"},
                "c-engine": {"category": "suspicious"},
                "d-engine": {"category": "harmless"}
            }
        }}}"#,
    );
    let report = DetailedReport::from_raw(&raw).unwrap();
    assert_eq!(report.malicious_engines, vec!["a-engine", "b-engine"]);
    assert_eq!(report.suspicious_engines, vec!["c-engine"]);
    assert_eq!(report.reputation, None);

    let text = report.to_text();
    assert!(text.contains("Undetected: 4\n"));
    assert!(text.contains("Malicious (2):\n- a-engine\n- b-engine\n"));
    assert!(!text.contains("Reputation:"));
}
