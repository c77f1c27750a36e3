//! Business logic services
//!
//! Pure logic that operates on domain models. The batch scanner is the only
//! service that touches a port, and it does so through the trait object it
//! is given.
//!
//! - [`scoring`] - Risk score and safety threshold
//! - [`filter`] - Client-side filters over domain listings
//! - [`scan`] - Sequential, paced batch checks

pub mod filter;
pub mod scan;
pub mod scoring;

pub use filter::{active_only, by_group, limit};
pub use scan::{BatchScanner, ScanEntry, ScanEvent, ScanSummary};
pub use scoring::{SAFETY_THRESHOLD, is_safe, risk_score};
