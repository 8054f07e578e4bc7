//! Two players side by side.

use crate::{error::ShotError, shots::PlayerShotProfile, Result};

use super::common::{run, FetchParams, Layout};

/// Fetch two players and print their summaries plus a category table.
pub async fn handle_compare(params: FetchParams) -> Result<Vec<PlayerShotProfile>> {
    if params.player_names.len() != 2 {
        return Err(ShotError::PlayerCount {
            min: 2,
            max: 2,
            given: params.player_names.len(),
        });
    }
    run(params, Layout::Comparison).await
}
