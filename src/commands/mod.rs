//! Command implementations for the shotzone CLI

pub mod common;
pub mod compare;
pub mod demo;
pub mod multi_player;
pub mod profile;
pub mod report;

pub use common::{FetchParams, Layout};
