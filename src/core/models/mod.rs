//! Domain models for domain-monitor
//!
//! Pure value objects with no I/O dependencies. Each one is produced by a
//! single call and never mutated afterwards.
//!
//! - [`Verdict`] - Normalized safe/unsafe result with a risk score
//! - [`RawVerdict`] - Unmodified reputation payload for detailed inspection
//! - [`TrackedDomain`] - A domain listed by the tracking platform
//! - [`DomainReport`] - Typed view of a reputation payload

mod raw;
mod report;
mod tracked_domain;
mod verdict;

pub use raw::RawVerdict;
pub use report::{AnalysisStats, DomainReport, EngineCategory, EngineResult};
pub use tracked_domain::{ACTIVE_STATE, TrackedDomain};
pub use verdict::{RiskLevel, Verdict, VerdictSource};
