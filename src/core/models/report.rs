//! Typed view of a reputation payload
//!
//! The upstream schema varies between domains and over time, so decoding is
//! permissive: missing objects and counters default to empty/zero and unknown
//! fields are ignored. Only a body that is not JSON (or has a counter of the
//! wrong type) fails to decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Engine vote counters from the last analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisStats {
    /// Engines that flagged the domain as malicious
    pub malicious: u64,
    /// Engines that flagged the domain as suspicious
    pub suspicious: u64,
    /// Engines that found the domain harmless
    pub harmless: u64,
    /// Engines with no opinion
    pub undetected: u64,
}

/// Category one engine assigned in the last analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineCategory {
    /// Engine considers the domain harmless
    Harmless,
    /// Engine considers the domain suspicious
    Suspicious,
    /// Engine considers the domain malicious
    Malicious,
    /// Engine has no opinion
    #[default]
    Undetected,
    /// Engine did not answer in time
    Timeout,
    /// Any category this crate does not know about
    #[serde(other)]
    Other,
}

/// One engine's entry in the last analysis
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineResult {
    /// Assigned category (`null` reads as undetected)
    #[serde(deserialize_with = "null_as_default")]
    pub category: EngineCategory,
    /// Free-form result label (e.g. "clean", "phishing")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Typed reputation report for one domain
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DomainReport {
    /// Aggregate engine votes
    pub stats: AnalysisStats,
    /// Per-engine results, keyed by engine name
    pub results: BTreeMap<String, EngineResult>,
    /// Community reputation value, when present
    pub reputation: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct StatsEnvelope {
    data: StatsData,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct StatsData {
    attributes: StatsAttributes,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct StatsAttributes {
    last_analysis_stats: AnalysisStats,
}

impl AnalysisStats {
    /// Decode only the vote counters from a reputation payload
    ///
    /// Per-engine entries are skipped, so an odd engine record cannot fail a
    /// scored check.
    pub fn from_payload(body: &str) -> Result<Self, serde_json::Error> {
        let envelope: StatsEnvelope = serde_json::from_str(body)?;
        Ok(envelope.data.attributes.last_analysis_stats)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Envelope {
    data: Data,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Data {
    attributes: Attributes,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Attributes {
    last_analysis_stats: AnalysisStats,
    last_analysis_results: BTreeMap<String, EngineResult>,
    reputation: Option<i64>,
}

impl DomainReport {
    /// Decode a reputation payload
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let envelope: Envelope = serde_json::from_str(body)?;
        let attrs = envelope.data.attributes;
        Ok(Self {
            stats: attrs.last_analysis_stats,
            results: attrs.last_analysis_results,
            reputation: attrs.reputation,
        })
    }

    /// Engines that voted `category`, in engine-name order
    #[must_use]
    pub fn engines_with(&self, category: EngineCategory) -> Vec<&str> {
        self.results
            .iter()
            .filter(|(_, r)| r.category == category)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
