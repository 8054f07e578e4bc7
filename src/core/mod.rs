//! Core utilities shared across the application:
//! - `config`: data source configuration (base URL, offline mode, timeout)
//! - `http`: HTTP client and header setup

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{resolve_base_url, SourceConfig, DEFAULT_BASE_URL};
pub use http::{build_client, html_header_map};
