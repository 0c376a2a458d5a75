use anyhow::Context;
use clap::Parser;
use cxref_config::CxrefConfig;
use cxref_parser::ResolverOptions;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("cxref error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = CxrefConfig::load_with_dotenv().context("failed to load cxref configuration")?;
    let options = resolver_options(&config, &flags);
    tracing::debug!(?options, "resolver options");

    commands::dispatch(&cli.command, &flags, &options)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CXREF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Config values, with command-line flags taking precedence.
fn resolver_options(config: &CxrefConfig, flags: &cli::GlobalFlags) -> ResolverOptions {
    ResolverOptions {
        max_header_depth: flags
            .max_depth
            .unwrap_or(config.resolver.max_header_depth),
        max_search_entries: config.resolver.max_search_entries,
        follow_links: config.resolver.follow_links,
        projects_base: flags
            .projects_base
            .clone()
            .or_else(|| config.projects.projects_base.clone()),
    }
}
