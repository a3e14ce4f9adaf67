//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Flags and env win over the config file
    let ctx = commands::Context {
        api_key: cli.api_key.or_else(|| config.api_key.clone()),
        api_version: cli.api_version.or_else(|| config.api_version.clone()),
        base_url: cli.base_url,
        timeout_secs: cli.timeout.or(config.timeout_secs),
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or_default(),
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Dns(args) => commands::network::dns(ctx, args).await,
        Commands::Domain(args) => commands::network::domain(ctx, args).await,
        Commands::Ip(args) => commands::network::ip(ctx, args).await,
        Commands::Network(args) => commands::network::network(ctx, args).await,
        Commands::Url(args) => commands::network::url(ctx, args).await,
        Commands::Email(args) => commands::indicator::email(ctx, args).await,
        Commands::Hash(args) => commands::indicator::hash(ctx, args).await,
        Commands::ThreatActors(args) => commands::threat::actors(ctx, args).await,
        Commands::ThreatTools(args) => commands::threat::tools(ctx, args).await,
        Commands::Versions => commands::versions::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Send logs to stderr; `--verbose` turns on debug output for the client crates.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "scarlet_shark_client=debug,scarlet_shark_cli=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
