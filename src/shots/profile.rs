//! Per-zone shooting records and the player profile that holds them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::zone::{Zone, ZoneKey};
use crate::{error::FallbackReason, Season};

/// Zone records keyed by zone; iteration follows display order.
pub type ZoneMap = BTreeMap<ZoneKey, ZoneRecord>;

/// `100 * made / attempted`, or 0 when nothing was attempted.
pub fn percentage(made: u64, attempted: u64) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        100.0 * made as f64 / attempted as f64
    }
}

/// Made/attempted counts for one zone.
///
/// The percentage is always derived from the counts and rounded to one
/// decimal place; a record with zero attempts reports 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawZoneRecord")]
pub struct ZoneRecord {
    made: u32,
    attempted: u32,
    percentage: f64,
}

#[derive(Deserialize)]
struct RawZoneRecord {
    made: u32,
    attempted: u32,
}

impl TryFrom<RawZoneRecord> for ZoneRecord {
    type Error = String;

    fn try_from(raw: RawZoneRecord) -> Result<Self, Self::Error> {
        ZoneRecord::from_counts(raw.made, raw.attempted).ok_or_else(|| {
            format!(
                "made ({}) exceeds attempted ({})",
                raw.made, raw.attempted
            )
        })
    }
}

impl ZoneRecord {
    /// Build a record, or `None` when `made > attempted`.
    pub fn from_counts(made: u32, attempted: u32) -> Option<Self> {
        if made > attempted {
            return None;
        }
        Some(Self {
            made,
            attempted,
            percentage: (percentage(made.into(), attempted.into()) * 10.0).round() / 10.0,
        })
    }

    pub fn made(&self) -> u32 {
        self.made
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

/// Zone-level shooting data for one player and season.
///
/// Either scraped from the data source or synthesized as a fallback; the
/// `is_synthetic` flag and `fallback_reason` tell which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerShotProfile {
    player_name: String,
    season: Season,
    zones: ZoneMap,
    is_synthetic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback_reason: Option<FallbackReason>,
}

impl PlayerShotProfile {
    /// Profile built from data-source rows.
    pub fn scraped(player_name: impl Into<String>, season: Season, zones: ZoneMap) -> Self {
        Self {
            player_name: player_name.into(),
            season,
            zones,
            is_synthetic: false,
            fallback_reason: None,
        }
    }

    /// Profile built from sample data.
    pub fn synthetic(player_name: impl Into<String>, season: Season, zones: ZoneMap) -> Self {
        Self {
            player_name: player_name.into(),
            season,
            zones,
            is_synthetic: true,
            fallback_reason: None,
        }
    }

    /// Record why the data source was abandoned.
    pub fn with_fallback_reason(mut self, reason: FallbackReason) -> Self {
        self.fallback_reason = Some(reason);
        self
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn is_synthetic(&self) -> bool {
        self.is_synthetic
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        self.fallback_reason
    }

    pub fn get(&self, zone: Zone) -> Option<&ZoneRecord> {
        self.zones.get(&ZoneKey::Known(zone))
    }

    /// Every stored record, known zones first in display order.
    pub fn records(&self) -> impl Iterator<Item = (&ZoneKey, &ZoneRecord)> {
        self.zones.iter()
    }

    /// Only the records for known zones.
    pub fn known_zones(&self) -> impl Iterator<Item = (Zone, &ZoneRecord)> {
        self.zones
            .iter()
            .filter_map(|(key, record)| key.zone().map(|zone| (zone, record)))
    }

    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
