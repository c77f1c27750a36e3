//! Run the chat bot

use domain_monitor::adapters::TelegramTransport;
use domain_monitor::bot::{self, BotHandler};
use domain_monitor::core::ports::DomainSource;
use domain_monitor::core::services::BatchScanner;
use log::{info, warn};

use super::Context;

/// Start the Telegram bot and serve until the process is stopped
pub fn bot(ctx: &Context) -> anyhow::Result<()> {
    let mut transport = TelegramTransport::new(&ctx.config.telegram)?;

    let domains: Option<Box<dyn DomainSource>> = if ctx.config.keitaro.is_configured() {
        Some(Box::new(ctx.domain_source()?))
    } else {
        warn!("Keitaro is not configured; /list and /group are unavailable");
        None
    };

    let handler = BotHandler::new(
        ctx.reputation()?,
        domains,
        BatchScanner::new(ctx.config.scan.pacing()),
    );

    info!("starting Telegram bot");
    bot::run(&mut transport, &handler)
}
