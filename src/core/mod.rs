//! Core domain logic for domain-monitor
//!
//! This module contains the scoring policy and the domain models. It performs
//! no I/O itself; upstream services are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Verdict, RawVerdict, TrackedDomain, DomainReport)
//! - `services/` - Scoring, filtering and batch scanning
//! - `ports/` - Trait definitions for upstream services and chat transports

pub mod models;
pub mod ports;
pub mod services;
