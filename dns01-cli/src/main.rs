//! `dns01` entry point
//!
//! certbot manual hooks that publish and remove ACME dns-01 validation records through the
//! GleSYS DNS API. Logs go to stderr so command output on stdout stays machine-readable.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dns01_core::ChallengeService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};
use config::Credentials;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(cli.verbose),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let credentials = Credentials::load(cli.credentials.as_deref())?;
    tracing::debug!("Using {credentials:?}");
    let service = ChallengeService::new(credentials.into_directory()?);

    match cli.command {
        Commands::Perform(args) => commands::perform(&service, args).await,
        Commands::Cleanup(args) => commands::cleanup(&service, args).await,
        Commands::Zones => commands::zones(&service).await,
        Commands::Resolve(args) => commands::resolve(&service, args).await,
    }
}
