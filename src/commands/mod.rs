//! Command implementations

mod bot;
mod check;
mod list;
mod lookup;

pub use bot::bot;
pub use check::{check, scan};
pub use list::list;
pub use lookup::{detailed, raw};

use anyhow::Context as _;
use domain_monitor::adapters::{self, KeitaroClient};
use domain_monitor::config::AppConfig;
use domain_monitor::core::models::TrackedDomain;
use domain_monitor::core::ports::{DomainSource, ReputationCheck};
use domain_monitor::core::services::filter;
use domain_monitor::output::OutputMode;

use crate::cli::SelectionArgs;

/// Loaded configuration and output mode shared by every command
#[derive(Debug)]
pub struct Context {
    /// Effective configuration
    pub config: AppConfig,
    /// Human or JSON output
    pub mode: OutputMode,
}

impl Context {
    /// Reputation strategy for this configuration
    pub fn reputation(&self) -> anyhow::Result<Box<dyn ReputationCheck>> {
        adapters::reputation_client(&self.config.virustotal, self.config.scan)
            .context("failed to set up VirusTotal client")
    }

    /// Keitaro client, or an error explaining how to configure it
    pub fn domain_source(&self) -> anyhow::Result<KeitaroClient> {
        if !self.config.keitaro.is_configured() {
            anyhow::bail!(
                "Keitaro is not configured: set KEITARO_URL or [keitaro] base_url in the config file"
            );
        }
        KeitaroClient::new(&self.config.keitaro).context("failed to set up Keitaro client")
    }
}

/// Fetch the tracked domains a selection asks for
pub fn select_domains(source: &dyn DomainSource, selection: &SelectionArgs) -> anyhow::Result<Vec<TrackedDomain>> {
    let domains = match (selection.active, selection.group.as_deref(), selection.limit) {
        (false, None, Some(n)) => return Ok(source.list_limit(n)?),
        (false, None, None) => source.list_all()?,
        (true, None, _) => source.list_active()?,
        (false, Some(group), _) => source.list_by_group(group)?,
        (true, Some(group), _) => filter::active_only(source.list_by_group(group)?),
    };

    Ok(match selection.limit {
        Some(n) => filter::limit(domains, n),
        None => domains,
    })
}
