//! Basketball Shot Zone Library
//!
//! Fetches per-zone shooting data for basketball players from
//! Basketball-Reference, aggregates it into 3PT / 2PT / FT categories, and
//! renders summaries and side-by-side comparisons.
//!
//! ## Features
//!
//! - **Player Search**: Resolve a (partial) player name to a player page
//! - **Shooting Tables**: Extract zone rows from the player page or its season sub-page
//! - **Sample Fallback**: Deterministic sample profiles whenever scraping fails
//! - **Aggregation**: Category totals with zero-attempt guards
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shotzone::{aggregate, Season, ShootingDataService};
//! use shotzone::core::SourceConfig;
//!
//! # async fn example() -> shotzone::Result<()> {
//! let config = SourceConfig::new(shotzone::core::resolve_base_url(None)?);
//! let service = ShootingDataService::from_config(config)?;
//!
//! // Never fails: falls back to sample data when the source is unavailable
//! let profile = service.fetch_profile("Stephen Curry", Season::new(2024)).await;
//! let stats = aggregate(&profile);
//! println!("3PT: {:.1}%", stats.three_pt.percentage);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the scraper at a mirror or local server:
//! ```bash
//! export SHOTZONE_BASE_URL=http://localhost:8080
//! ```

pub mod bbref;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod shots;

// Re-export commonly used types
pub use bbref::ShootingDataService;
pub use cli::types::Season;
pub use error::{FallbackReason, Result, ShotError};
pub use shots::{aggregate, AggregateStats, PlayerShotProfile};

pub const BASE_URL_ENV_VAR: &str = "SHOTZONE_BASE_URL";
