//! Demo comparison built from sample data only.

use crate::{shots::PlayerShotProfile, Result};

use super::{common::FetchParams, compare::handle_compare};

/// Same output as `compare`, but never touches the network.
pub async fn handle_demo(mut params: FetchParams) -> Result<Vec<PlayerShotProfile>> {
    params.offline = true;
    eprintln!(
        "Generating sample data for {}...",
        params.player_names.join(" and ")
    ); // tarpaulin::skip
    handle_compare(params).await
}
