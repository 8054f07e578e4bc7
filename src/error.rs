//! Error types for the shot zone scraper

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ShotError>;

#[derive(Error, Debug)]
pub enum ShotError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Expected {min} to {max} player names, got {given}")]
    PlayerCount { min: usize, max: usize, given: usize },

    #[error("Could not parse {context}")]
    Parse { context: String },

    #[error("No shooting table found for {player}")]
    MissingTable { player: String },

    #[error("Shooting table for {player} has no usable rows")]
    EmptyTable { player: String },
}

/// Why a profile was built from sample data instead of the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No search result matched the requested name.
    NotFound,
    /// The transport failed or the source answered with an error status.
    FetchFailure,
    /// The document did not have the expected structure.
    ParseFailure,
    /// A shooting table was found but produced no rows.
    EmptyResult,
    /// The network was skipped on purpose.
    Offline,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::NotFound => "not_found",
            FallbackReason::FetchFailure => "fetch_failure",
            FallbackReason::ParseFailure => "parse_failure",
            FallbackReason::EmptyResult => "empty_result",
            FallbackReason::Offline => "offline",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ShotError> for FallbackReason {
    fn from(err: &ShotError) -> Self {
        match err {
            ShotError::PlayerNotFound { .. } => FallbackReason::NotFound,
            ShotError::Http(_) | ShotError::Status { .. } | ShotError::Io(_) => {
                FallbackReason::FetchFailure
            }
            ShotError::EmptyTable { .. } => FallbackReason::EmptyResult,
            ShotError::Parse { .. }
            | ShotError::MissingTable { .. }
            | ShotError::Json(_)
            | ShotError::InvalidHeader(_)
            | ShotError::InvalidSeason(_)
            | ShotError::InvalidBaseUrl { .. }
            | ShotError::PlayerCount { .. } => FallbackReason::ParseFailure,
        }
    }
}
