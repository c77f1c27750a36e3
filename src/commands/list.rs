//! List tracked domains

use domain_monitor::output::DomainListResult;

use super::{Context, select_domains};
use crate::cli::SelectionArgs;

/// List domains tracked in Keitaro
pub fn list(selection: &SelectionArgs, ctx: &Context) -> anyhow::Result<()> {
    let source = ctx.domain_source()?;
    let domains = select_domains(&source, selection)?;
    DomainListResult { domains }.render(ctx.mode);
    Ok(())
}
