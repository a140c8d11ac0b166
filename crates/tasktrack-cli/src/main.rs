mod cli;
mod commands;
mod config;
mod storage;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Entry point wiring the CLI to the file-backed repository.
fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let cli = cli::Cli::parse();
    let Some(command) = cli.command else {
        cli::Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = config::load()?;
    commands::handle(command, &config)
}

fn init_tracing() {
    // Respect user-provided filters, default to info to avoid noisy stdout.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
