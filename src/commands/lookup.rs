//! Single-domain raw and detailed lookups

use anyhow::Context as _;
use domain_monitor::output::{DetailedReport, RawResult};

use super::Context;

/// Print the raw reputation payload for a domain
pub fn raw(domain: &str, ctx: &Context) -> anyhow::Result<()> {
    let domain = non_empty(domain)?;
    let reputation = ctx.reputation()?;
    let raw = reputation
        .check_raw(domain)
        .with_context(|| format!("raw check for {domain} failed"))?;

    RawResult::from(&raw).render(ctx.mode);
    Ok(())
}

/// Print a detailed reputation report for a domain
pub fn detailed(domain: &str, ctx: &Context) -> anyhow::Result<()> {
    let domain = non_empty(domain)?;
    let reputation = ctx.reputation()?;
    let raw = reputation
        .check_raw(domain)
        .with_context(|| format!("detailed check for {domain} failed"))?;

    let report = DetailedReport::from_raw(&raw)
        .with_context(|| format!("could not decode report for {domain}"))?;
    report.render(ctx.mode);
    Ok(())
}

fn non_empty(domain: &str) -> anyhow::Result<&str> {
    let domain = domain.trim();
    if domain.is_empty() {
        anyhow::bail!("domain must not be empty");
    }
    Ok(domain)
}
