//! Chat bot front end
//!
//! Relays the same checks as the CLI over a [`ChatTransport`]. Every request
//! is answered from the current call; nothing is remembered between messages.
//!
//! - [`command`] - Parsing message text into commands
//! - [`format`] - Reply formatting
//! - [`handler`] - Command dispatch

pub mod command;
pub mod format;
pub mod handler;

use std::thread;
use std::time::Duration;

use log::{info, warn};

pub use command::BotCommand;
pub use handler::BotHandler;

use crate::core::ports::ChatTransport;

/// Pause after a failed poll before polling again
const POLL_ERROR_PAUSE: Duration = Duration::from_secs(5);

/// Poll once and handle every message received
///
/// Returns the number of messages handled.
pub fn poll_once<T: ChatTransport>(transport: &mut T, handler: &BotHandler) -> anyhow::Result<usize> {
    let messages = transport.poll()?;
    for message in &messages {
        info!(
            "[{}] {}",
            message.sender.as_deref().unwrap_or("unknown"),
            message.text
        );
        handler.handle(&*transport, message);
    }
    Ok(messages.len())
}

/// Run the bot until the process is stopped
///
/// Poll failures are logged and polling resumes after a short pause.
pub fn run<T: ChatTransport>(transport: &mut T, handler: &BotHandler) -> ! {
    info!("bot started");
    loop {
        if let Err(e) = poll_once(transport, handler) {
            warn!("polling failed: {e:#}");
            thread::sleep(POLL_ERROR_PAUSE);
        }
    }
}
