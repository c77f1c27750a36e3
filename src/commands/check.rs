//! Batch reputation checks

use colored::Colorize;
use domain_monitor::core::ports::ReputationCheck;
use domain_monitor::core::services::{BatchScanner, ScanEvent};
use domain_monitor::output::{CheckItem, CheckResult, OutputMode};
use log::warn;

use super::{Context, select_domains};
use crate::cli::{BatchArgs, SelectionArgs};

/// Check domains given on the command line
pub fn check(domains: &[String], batch: BatchArgs, ctx: &Context) -> anyhow::Result<()> {
    let names: Vec<String> = domains
        .iter()
        .map(|d| d.trim())
        .filter(|d| {
            if d.is_empty() {
                warn!("skipping empty domain argument");
            }
            !d.is_empty()
        })
        .map(String::from)
        .collect();

    let reputation = ctx.reputation()?;
    run_batch(reputation.as_ref(), &names, batch, ctx)
}

/// Check domains pulled from Keitaro
pub fn scan(selection: &SelectionArgs, batch: BatchArgs, ctx: &Context) -> anyhow::Result<()> {
    let source = ctx.domain_source()?;
    let names: Vec<String> = select_domains(&source, selection)?
        .into_iter()
        .map(|d| d.name)
        .collect();

    let reputation = ctx.reputation()?;
    run_batch(reputation.as_ref(), &names, batch, ctx)
}

fn run_batch(
    reputation: &dyn ReputationCheck,
    names: &[String],
    batch: BatchArgs,
    ctx: &Context,
) -> anyhow::Result<()> {
    let pacing = batch
        .delay_ms
        .map_or_else(|| ctx.config.scan.pacing(), std::time::Duration::from_millis);
    let scanner = BatchScanner::new(pacing);
    let human = ctx.mode == OutputMode::Human;

    if human && !names.is_empty() {
        println!("Checking {} domain(s)...\n", names.len());
    }

    let mut items = Vec::with_capacity(names.len());
    scanner.scan(reputation, names, |event| match event {
        ScanEvent::Started { index, domain, .. } => {
            if human {
                println!("{}. Checking: {}", index + 1, domain.bold());
            }
        },
        ScanEvent::Finished { entry, .. } => {
            let item = CheckItem::from(entry);
            if human {
                item.render_human();
            }
            items.push(item);
        },
    });

    let result = CheckResult::from_items(items);
    result.render(ctx.mode);

    if result.failed > 0 {
        anyhow::bail!("{} of {} check(s) failed", result.failed, result.checked);
    }
    if batch.strict && result.unsafe_count > 0 {
        anyhow::bail!("{} unsafe domain(s)", result.unsafe_count);
    }
    Ok(())
}
