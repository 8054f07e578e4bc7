//! Multi-player comparison.

use crate::{error::ShotError, shots::PlayerShotProfile, Result};

use super::common::{run, FetchParams, Layout};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Compare between [`MIN_PLAYERS`] and [`MAX_PLAYERS`] players.
pub async fn handle_multi_player(params: FetchParams) -> Result<Vec<PlayerShotProfile>> {
    let given = params.player_names.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&given) {
        return Err(ShotError::PlayerCount {
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
            given,
        });
    }
    eprintln!(
        "Comparing {given} players for the {} season...",
        params.season
    ); // tarpaulin::skip
    run(params, Layout::Comparison).await
}
