//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    AnalysisStats, DomainReport, EngineCategory, RawVerdict, RiskLevel, TrackedDomain, Verdict,
    VerdictSource,
};
use crate::core::services::ScanEntry;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A verdict as shown to users
#[derive(Debug, Clone, Serialize)]
pub struct VerdictInfo {
    /// The checked domain
    pub domain: String,
    /// "SAFE" or "UNSAFE"
    pub status: String,
    /// Whether the domain is safe
    pub is_safe: bool,
    /// Risk score in 0..=100
    pub risk_score: u8,
    /// Presentation tier
    pub risk_level: RiskLevel,
    /// When the check completed
    pub checked_at: DateTime<Utc>,
    /// Live lookup or offline placeholder
    pub source: VerdictSource,
}

impl From<&Verdict> for VerdictInfo {
    fn from(v: &Verdict) -> Self {
        Self {
            domain: v.domain().to_string(),
            status: v.status_label().to_string(),
            is_safe: v.is_safe(),
            risk_score: v.risk_score(),
            risk_level: v.risk_level(),
            checked_at: v.checked_at(),
            source: v.source(),
        }
    }
}

impl VerdictInfo {
    /// Indented detail lines for human output
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        let status = if self.is_safe {
            self.status.green().bold().to_string()
        } else {
            self.status.red().bold().to_string()
        };

        let mut lines = vec![
            format!("   Status: {status}"),
            format!("   Risk Score: {}% ({})", self.risk_score, self.risk_level),
            format!("   Checked: {}", self.checked_at.format("%H:%M:%S")),
        ];
        if self.source == VerdictSource::Offline {
            lines.push(format!("   Source: {}", "offline placeholder (no live lookup)".yellow()));
        }
        lines
    }
}

/// One domain's line in a batch check
#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    /// The checked domain
    pub domain: String,
    /// Verdict, when the check succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictInfo>,
    /// Error message, when the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ScanEntry> for CheckItem {
    fn from(entry: &ScanEntry) -> Self {
        match &entry.outcome {
            Ok(v) => Self {
                domain: entry.domain.clone(),
                verdict: Some(VerdictInfo::from(v)),
                error: None,
            },
            Err(e) => Self {
                domain: entry.domain.clone(),
                verdict: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl CheckItem {
    /// Print the result lines for this item (the "Checking" header is
    /// printed separately when the check starts)
    pub fn render_human(&self) {
        match (&self.verdict, &self.error) {
            (Some(v), _) => {
                for line in v.human_lines() {
                    println!("{line}");
                }
            },
            (None, Some(e)) => println!("   {} {e}", "Error:".red()),
            (None, None) => {},
        }
        println!();
    }
}

/// Result of a batch check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Number of domains checked
    pub checked: usize,
    /// Domains found safe
    pub safe: usize,
    /// Domains found unsafe
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
    /// Checks that failed
    pub failed: usize,
    /// Per-domain results, in input order
    pub results: Vec<CheckItem>,
}

impl CheckResult {
    /// Build from per-domain items
    #[must_use]
    pub fn from_items(results: Vec<CheckItem>) -> Self {
        let safe = results
            .iter()
            .filter(|r| r.verdict.as_ref().is_some_and(|v| v.is_safe))
            .count();
        let failed = results.iter().filter(|r| r.verdict.is_none()).count();
        Self {
            checked: results.len(),
            safe,
            unsafe_count: results.len() - safe - failed,
            failed,
            results,
        }
    }

    /// Render the closing summary (human) or the whole result (JSON)
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.checked == 0 {
            println!("No domains to check.");
            return;
        }
        println!(
            "Check completed: {} safe, {} unsafe, {} failed",
            self.safe, self.unsafe_count, self.failed
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a raw lookup
#[derive(Debug, Clone, Serialize)]
pub struct RawResult {
    /// The checked domain
    pub domain: String,
    /// When the payload was fetched
    pub fetched_at: DateTime<Utc>,
    /// Payload as JSON when it parses, otherwise as a string
    pub payload: serde_json::Value,
}

impl From<&RawVerdict> for RawResult {
    fn from(raw: &RawVerdict) -> Self {
        let payload = serde_json::from_str(&raw.raw_payload)
            .unwrap_or_else(|_| serde_json::Value::String(raw.raw_payload.clone()));
        Self {
            domain: raw.domain.clone(),
            fetched_at: raw.fetched_at,
            payload,
        }
    }
}

impl RawResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.payload {
                serde_json::Value::String(s) => println!("{s}"),
                other => println!("{}", serde_json::to_string_pretty(other).unwrap_or_default()),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Detailed reputation report
#[derive(Debug, Clone, Serialize)]
pub struct DetailedReport {
    /// The checked domain
    pub domain: String,
    /// When the payload was fetched
    pub fetched_at: DateTime<Utc>,
    /// Engine vote counters
    pub stats: AnalysisStats,
    /// Engines voting malicious, by name
    pub malicious_engines: Vec<String>,
    /// Engines voting suspicious, by name
    pub suspicious_engines: Vec<String>,
    /// Community reputation, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<i64>,
}

impl DetailedReport {
    /// Decode a raw payload into a detailed report
    pub fn from_raw(raw: &RawVerdict) -> Result<Self, serde_json::Error> {
        let report = DomainReport::from_json(&raw.raw_payload)?;
        let names = |category| {
            report
                .engines_with(category)
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        };
        Ok(Self {
            domain: raw.domain.clone(),
            fetched_at: raw.fetched_at,
            stats: report.stats,
            malicious_engines: names(EngineCategory::Malicious),
            suspicious_engines: names(EngineCategory::Suspicious),
            reputation: report.reputation,
        })
    }

    /// Plain-text rendering shared by the CLI and the bot
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "VT: {}", self.domain);
        let _ = writeln!(out, "Time: {}\n", self.fetched_at.format("%H:%M %d.%m"));

        let _ = writeln!(out, "Results:");
        let _ = writeln!(out, "Harmless: {}", self.stats.harmless);
        let _ = writeln!(out, "Suspicious: {}", self.stats.suspicious);
        let _ = writeln!(out, "Malicious: {}", self.stats.malicious);
        let _ = writeln!(out, "Undetected: {}\n", self.stats.undetected);

        for (label, engines) in [
            ("Malicious", &self.malicious_engines),
            ("Suspicious", &self.suspicious_engines),
        ] {
            if engines.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{label} ({}):", engines.len());
            for engine in engines {
                let _ = writeln!(out, "- {engine}");
            }
            out.push('\n');
        }

        if let Some(reputation) = self.reputation {
            let _ = writeln!(out, "Reputation: {reputation}");
        }
        out
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_text()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of a domain listing
#[derive(Debug, Clone, Serialize)]
pub struct DomainListResult {
    /// Listed domains, in upstream order
    pub domains: Vec<TrackedDomain>,
}

impl DomainListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.domains.is_empty() {
            println!("No domains found.");
            return;
        }

        println!("Domains ({}):\n", self.domains.len());
        for (i, d) in self.domains.iter().enumerate() {
            println!("{}. {}", i + 1, d.name);
            println!("   Group: {}  State: {}", d.group, d.activity_state);
        }
    }
}
