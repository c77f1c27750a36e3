//! domain-monitor - domain reputation checks backed by VirusTotal and Keitaro
//!
//! This library provides the risk-scoring pipeline: a reputation client that
//! turns VirusTotal engine votes into a bounded risk score and safety verdict,
//! and a domain source that lists and filters domains tracked in Keitaro.
//! The CLI and the chat bot are thin front ends over the same checks.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod bot;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{ConfigError, FetchError};
