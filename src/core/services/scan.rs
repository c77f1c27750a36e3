//! Batch scanning
//!
//! Checks a list of domains one at a time through a [`ReputationCheck`].
//! A failed check is recorded and the scan moves on to the next domain; one
//! bad entry never aborts the batch. The pause between checks is the caller's
//! throttle against upstream rate limits and is skipped after the last check.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::core::models::Verdict;
use crate::core::ports::ReputationCheck;
use crate::error::FetchError;

/// Outcome of checking one domain in a batch
#[derive(Debug)]
pub struct ScanEntry {
    /// The domain that was checked
    pub domain: String,
    /// Verdict, or the error that ended this check
    pub outcome: Result<Verdict, FetchError>,
}

/// Progress notification emitted while a batch runs
#[derive(Debug, Clone, Copy)]
pub enum ScanEvent<'a> {
    /// A check is about to start
    Started {
        /// Zero-based position in the batch
        index: usize,
        /// Batch size
        total: usize,
        /// Domain being checked
        domain: &'a str,
    },
    /// A check completed or failed
    Finished {
        /// Zero-based position in the batch
        index: usize,
        /// Batch size
        total: usize,
        /// Result of the check
        entry: &'a ScanEntry,
    },
}

/// All outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// One entry per input domain
    pub entries: Vec<ScanEntry>,
}

impl ScanSummary {
    /// Number of domains checked safe
    #[must_use]
    pub fn safe_count(&self) -> usize {
        self.verdicts().filter(|v| v.is_safe()).count()
    }

    /// Number of domains checked unsafe
    #[must_use]
    pub fn unsafe_count(&self) -> usize {
        self.verdicts().filter(|v| !v.is_safe()).count()
    }

    /// Number of checks that failed
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_err()).count()
    }

    fn verdicts(&self) -> impl Iterator<Item = &Verdict> {
        self.entries.iter().filter_map(|e| e.outcome.as_ref().ok())
    }
}

/// Sequential batch checker with a fixed pause between checks
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchScanner {
    pacing: Duration,
}

impl BatchScanner {
    /// Create a scanner that waits `pacing` between consecutive checks
    #[must_use]
    pub const fn new(pacing: Duration) -> Self {
        Self { pacing }
    }

    /// Pause between consecutive checks
    #[must_use]
    pub const fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Check every domain in order, reporting progress to `observer`
    pub fn scan<F>(&self, checker: &dyn ReputationCheck, domains: &[String], mut observer: F) -> ScanSummary
    where
        F: FnMut(ScanEvent<'_>),
    {
        let total = domains.len();
        let mut summary = ScanSummary {
            entries: Vec::with_capacity(total),
        };

        for (index, domain) in domains.iter().enumerate() {
            observer(ScanEvent::Started {
                index,
                total,
                domain,
            });

            let outcome = checker.check(domain);
            if let Err(e) = &outcome {
                debug!("check {}/{} failed for {domain}: {e}", index + 1, total);
            }

            summary.entries.push(ScanEntry {
                domain: domain.clone(),
                outcome,
            });
            if let Some(entry) = summary.entries.last() {
                observer(ScanEvent::Finished {
                    index,
                    total,
                    entry,
                });
            }

            if index + 1 < total && !self.pacing.is_zero() {
                thread::sleep(self.pacing);
            }
        }

        summary
    }
}
