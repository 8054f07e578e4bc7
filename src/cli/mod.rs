//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::Season;

use crate::commands::FetchParams;

/// Data source arguments shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Season year, named after the year it ends in (2024 = 2023-24).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Data source base URL (or set `SHOTZONE_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Send this User-Agent instead of the default browser one.
    #[clap(long)]
    pub user_agent: Option<String>,

    /// Skip the network and use sample data.
    #[clap(long)]
    pub offline: bool,
}

/// Output arguments shared between commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Also write the JSON report to this file.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    fn into_params(self, player_names: Vec<String>, source: SourceArgs) -> FetchParams {
        FetchParams {
            player_names,
            season: source.season,
            base_url: source.base_url,
            user_agent: source.user_agent,
            offline: source.offline,
            as_json: self.json,
            output: self.output,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Zone-by-zone shooting summary for one player.
    Profile {
        /// Player name (case-insensitive, partial names work).
        name: String,

        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Compare two players side by side.
    Compare {
        first: String,
        second: String,

        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Compare 2 to 8 players by shot category.
    Multi {
        #[clap(required = true, num_args = 2..=8)]
        names: Vec<String>,

        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Compare two players using built-in sample data (no network).
    Demo {
        first: String,
        second: String,

        /// Season label for the sample profiles.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

impl Commands {
    /// Flatten the parsed arguments into handler parameters.
    pub fn into_params(self) -> FetchParams {
        match self {
            Commands::Profile {
                name,
                source,
                output,
            } => output.into_params(vec![name], source),
            Commands::Compare {
                first,
                second,
                source,
                output,
            } => output.into_params(vec![first, second], source),
            Commands::Multi {
                names,
                source,
                output,
            } => output.into_params(names, source),
            Commands::Demo {
                first,
                second,
                season,
                output,
            } => output.into_params(
                vec![first, second],
                SourceArgs {
                    season,
                    base_url: None,
                    user_agent: None,
                    offline: true,
                },
            ),
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "shotzone",
    about = "Basketball shooting zones: fetch, aggregate, and compare players"
)]
pub struct ShotZone {
    /// Show debug logging on stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
