//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use shotzone::{
    cli::{Commands, ShotZone},
    commands::{
        compare::handle_compare, demo::handle_demo, multi_player::handle_multi_player,
        profile::handle_profile,
    },
};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays clean for reports and JSON.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "warn,shotzone=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = ShotZone::parse();
    init_logging(app.verbose);

    match app.command {
        command @ Commands::Profile { .. } => {
            handle_profile(command.into_params())
                .await
                .context("profile command failed")?;
        }
        command @ Commands::Compare { .. } => {
            handle_compare(command.into_params())
                .await
                .context("compare command failed")?;
        }
        command @ Commands::Multi { .. } => {
            handle_multi_player(command.into_params())
                .await
                .context("multi command failed")?;
        }
        command @ Commands::Demo { .. } => {
            handle_demo(command.into_params())
                .await
                .context("demo command failed")?;
        }
    }

    Ok(())
}
