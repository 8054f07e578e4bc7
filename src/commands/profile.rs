//! Single-player shooting profile.

use crate::{error::ShotError, shots::PlayerShotProfile, Result};

use super::common::{run, FetchParams, Layout};

/// Fetch and print one player's zone and category summary.
pub async fn handle_profile(params: FetchParams) -> Result<PlayerShotProfile> {
    if params.player_names.len() != 1 {
        return Err(ShotError::PlayerCount {
            min: 1,
            max: 1,
            given: params.player_names.len(),
        });
    }
    run(params, Layout::Summary)
        .await?
        .pop()
        .ok_or(ShotError::PlayerCount {
            min: 1,
            max: 1,
            given: 0,
        })
}
