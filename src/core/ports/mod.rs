//! Port traits (interfaces) for external services
//!
//! These traits define the boundaries between the scoring pipeline and the
//! systems it talks to: the reputation service, the domain-tracking platform
//! and the chat transport used by the bot.
//!
//! Implementations live in the `adapters` module.

mod chat;
mod domain_source;
mod reputation;

pub use chat::{ChatTransport, IncomingMessage, TextFormat};
pub use domain_source::DomainSource;
pub use reputation::ReputationCheck;
