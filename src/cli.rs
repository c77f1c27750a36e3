//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{self, Context};
use domain_monitor::config::AppConfig;
use domain_monitor::output::OutputMode;

/// domain-monitor - Domain reputation checks
#[derive(Parser, Debug)]
#[command(
    name = "domain-monitor",
    version,
    about = "Domain reputation checks backed by VirusTotal",
    long_about = "Check domains against VirusTotal and report SAFE/UNSAFE with a risk score.\n\n\
                  Domains can be given directly or pulled from a Keitaro tracker.\n\
                  Without a VirusTotal API key, checks report offline placeholder verdicts."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./domain-monitor.toml, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more domains
    Check {
        /// Domains to check
        #[arg(required = true)]
        domains: Vec<String>,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Print the raw reputation payload for a domain
    Raw {
        /// Domain to look up
        domain: String,
    },

    /// Show a detailed reputation report for a domain
    Detailed {
        /// Domain to look up
        domain: String,
    },

    /// List domains tracked in Keitaro
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Check domains tracked in Keitaro
    Scan {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Run the Telegram bot
    Bot,

    /// Show version
    Version,
}

/// Which tracked domains to use
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Only domains whose state is "active"
    #[arg(long)]
    pub active: bool,

    /// Only domains in this group (exact match)
    #[arg(short, long)]
    pub group: Option<String>,

    /// At most this many domains
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Batch check options
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BatchArgs {
    /// Pause between checks in milliseconds (default from config)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Exit non-zero when any domain is unsafe
    #[arg(long)]
    pub strict: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("domain-monitor v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'domain-monitor --help' for usage");
            println!("Run 'domain-monitor check example.com' to check a domain");
        }
        return Ok(());
    };

    if matches!(command, Command::Version) {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("domain-monitor v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(cli.config.as_deref(), &cwd)?;
    let ctx = Context {
        config,
        mode: output_mode,
    };

    match command {
        Command::Check { domains, batch } => commands::check(&domains, batch, &ctx),
        Command::Raw { domain } => commands::raw(&domain, &ctx),
        Command::Detailed { domain } => commands::detailed(&domain, &ctx),
        Command::List { selection } => commands::list(&selection, &ctx),
        Command::Scan { selection, batch } => commands::scan(&selection, batch, &ctx),
        Command::Bot => commands::bot(&ctx),
        Command::Version => Ok(()),
    }
}
