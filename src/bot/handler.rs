//! Bot command dispatch

use log::warn;

use super::command::BotCommand;
use super::format;
use crate::core::ports::{ChatTransport, DomainSource, IncomingMessage, ReputationCheck, TextFormat};
use crate::core::services::{BatchScanner, ScanEvent};

/// Answers chat messages using the configured checks
pub struct BotHandler {
    reputation: Box<dyn ReputationCheck>,
    domains: Option<Box<dyn DomainSource>>,
    scanner: BatchScanner,
}

impl std::fmt::Debug for BotHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotHandler")
            .field("domains_configured", &self.domains.is_some())
            .field("scanner", &self.scanner)
            .finish_non_exhaustive()
    }
}

/// Sends replies to one chat, logging failures instead of propagating them
struct Reply<'a> {
    transport: &'a dyn ChatTransport,
    chat_id: i64,
}

impl Reply<'_> {
    fn send(&self, text: &str) {
        self.send_as(text, TextFormat::Plain);
    }

    fn send_as(&self, text: &str, format: TextFormat) {
        if let Err(e) = self.transport.send(self.chat_id, text, format) {
            warn!("failed to send reply to chat {}: {e:#}", self.chat_id);
        }
    }
}

impl BotHandler {
    /// Create a handler
    ///
    /// Without a domain source, `/list` and `/group` answer that the
    /// tracking platform is not configured.
    #[must_use]
    pub fn new(
        reputation: Box<dyn ReputationCheck>,
        domains: Option<Box<dyn DomainSource>>,
        scanner: BatchScanner,
    ) -> Self {
        Self {
            reputation,
            domains,
            scanner,
        }
    }

    /// Answer one incoming message
    pub fn handle(&self, transport: &dyn ChatTransport, message: &IncomingMessage) {
        let reply = Reply {
            transport,
            chat_id: message.chat_id,
        };

        match BotCommand::parse(&message.text) {
            BotCommand::Start => reply.send(format::START_TEXT),
            BotCommand::Help | BotCommand::Text => reply.send(format::HELP_TEXT),
            BotCommand::Check(domain) => self.check(&reply, &domain),
            BotCommand::RawCheck(domain) => self.raw_check(&reply, &domain),
            BotCommand::Detailed(domain) => self.detailed(&reply, &domain),
            BotCommand::List => self.list(&reply),
            BotCommand::Group(group) => self.group(&reply, &group),
            BotCommand::Unknown(_) => reply.send("command unknown"),
        }
    }

    fn check(&self, reply: &Reply<'_>, domain: &str) {
        if domain.is_empty() {
            reply.send("enter domain: /check example.com");
            return;
        }

        reply.send(&format!("Process {domain}..."));
        match self.reputation.check(domain) {
            Ok(v) => reply.send(&format::verdict(&v)),
            Err(e) => reply.send(&format::check_error(domain, &e)),
        }
    }

    fn raw_check(&self, reply: &Reply<'_>, domain: &str) {
        if domain.is_empty() {
            reply.send("Usage: /rawcheck example.com");
            return;
        }

        reply.send(&format!("Getting raw data for {domain}..."));
        match self.reputation.check_raw(domain) {
            Ok(raw) => reply.send_as(&format::raw(&raw), TextFormat::Markdown),
            Err(e) => reply.send(&format::check_error(domain, &e)),
        }
    }

    fn detailed(&self, reply: &Reply<'_>, domain: &str) {
        if domain.is_empty() {
            reply.send("Usage: /detailed example.com");
            return;
        }

        reply.send(&format!("Detailed check for {domain}..."));
        match self.reputation.check_raw(domain) {
            Ok(raw) => reply.send(&format::detailed(&raw)),
            Err(e) => reply.send(&format::check_error(domain, &e)),
        }
    }

    fn list(&self, reply: &Reply<'_>) {
        let Some(source) = &self.domains else {
            reply.send("Keitaro is not configured");
            return;
        };

        reply.send("receiving domain list...");
        match source.list_active() {
            Ok(domains) => reply.send(&format::domain_list(&domains)),
            Err(e) => reply.send(&format!("Error listing domains: {e}")),
        }
    }

    fn group(&self, reply: &Reply<'_>, group: &str) {
        if group.is_empty() {
            reply.send("enter group name: /group killa");
            return;
        }
        let Some(source) = &self.domains else {
            reply.send("Keitaro is not configured");
            return;
        };

        reply.send(&format!("checking group '{group}'..."));
        let names: Vec<String> = match source.list_by_group(group) {
            Ok(domains) => domains.into_iter().map(|d| d.name).collect(),
            Err(e) => {
                reply.send(&format!("Error listing group '{group}': {e}"));
                return;
            },
        };
        if names.is_empty() {
            reply.send("there are no domains in this group");
            return;
        }

        let summary = self.scanner.scan(self.reputation.as_ref(), &names, |event| match event {
            ScanEvent::Started {
                index,
                total,
                domain,
            } => reply.send(&format!("check {}/{total}: {domain}", index + 1)),
            ScanEvent::Finished { entry, .. } => match &entry.outcome {
                Ok(v) => reply.send(&format::verdict(v)),
                Err(e) => reply.send(&format::check_error(&entry.domain, e)),
            },
        });

        reply.send(&format!(
            "group '{group}' done: {} safe, {} unsafe, {} failed",
            summary.safe_count(),
            summary.unsafe_count(),
            summary.failed_count()
        ));
    }
}
