//! Chat message formatting

use crate::core::models::{RawVerdict, TrackedDomain, Verdict, VerdictSource};
use crate::error::FetchError;
use crate::output::DetailedReport;

/// Longest raw payload echoed into a chat message, in characters
pub const RAW_PAYLOAD_BUDGET: usize = 4000;

/// Longest message the chat service accepts, in characters
pub const MESSAGE_LIMIT: usize = 4096;

/// Most domains shown by `/list`
pub const LIST_LIMIT: usize = 20;

/// Marker appended to truncated payloads
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Reply to `/start`
pub const START_TEXT: &str = "Domain Monitor Bot\n\n\
Commands:\n\
/check <domain> - check domain\n\
/detailed <domain> - detailed check domain\n\
/rawcheck <domain> - raw check domain\n\
/list - list active domains from Keitaro\n\
/group <name> - check domains by group\n\
/help - help";

/// Reply to `/help` and to anything that is not a command
pub const HELP_TEXT: &str = "Domain Monitor Bot\n\n\
Commands:\n\
/start - start work\n\
/help - show help\n\n\
Check domains:\n\
/check google.com - check domain\n\
/detailed google.com - detailed check domain\n\
/rawcheck google.com - raw check domain\n\
/list - list active domains from Keitaro\n\
/group killa - check domains by group";

/// Cut `text` to at most `budget` characters, marking the cut
#[must_use]
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Short verdict reply
#[must_use]
pub fn verdict(v: &Verdict) -> String {
    let mut text = format!(
        "Domain: {}\nStatus: {}\nRisk: {}%",
        v.domain(),
        v.status_label(),
        v.risk_score()
    );
    if v.source() == VerdictSource::Offline {
        text.push_str("\n(offline placeholder, no live lookup)");
    }
    text
}

/// Raw payload reply, as a Markdown code block
///
/// The payload is cut so the whole reply fits in [`MESSAGE_LIMIT`].
#[must_use]
pub fn raw(raw: &RawVerdict) -> String {
    const FOOTER: &str = "\n```";
    let header = format!("Raw VT data for {}:\n\n```json\n", raw.domain);
    let overhead = header.chars().count() + FOOTER.chars().count() + TRUNCATION_MARKER.chars().count();
    let budget = RAW_PAYLOAD_BUDGET.min(MESSAGE_LIMIT.saturating_sub(overhead));

    format!("{header}{}{FOOTER}", truncate(&raw.raw_payload, budget))
}

/// Detailed report reply
#[must_use]
pub fn detailed(raw: &RawVerdict) -> String {
    match DetailedReport::from_raw(raw) {
        Ok(report) => report.to_text(),
        Err(e) => format!("Error: could not decode report for {}: {e}", raw.domain),
    }
}

/// Failure reply naming the domain
#[must_use]
pub fn check_error(domain: &str, err: &FetchError) -> String {
    format!("Error checking {domain}: {err}")
}

/// Active domain listing reply, capped at [`LIST_LIMIT`]
#[must_use]
pub fn domain_list(domains: &[TrackedDomain]) -> String {
    if domains.is_empty() {
        return "no active domains".to_string();
    }

    let shown = &domains[..domains.len().min(LIST_LIMIT)];
    let mut text = format!("active domains ({}):\n\n", domains.len());
    for (i, d) in shown.iter().enumerate() {
        text.push_str(&format!("{}. {}\n   Group: {}\n\n", i + 1, d.name, d.group));
    }
    if domains.len() > shown.len() {
        text.push_str(&format!("... and {} more (showing first {LIST_LIMIT})", domains.len() - shown.len()));
    }
    text
}
