//! Shooting data model: zones, per-zone records, player profiles, and the
//! category aggregation derived from them.

pub mod aggregate;
pub mod league;
pub mod profile;
pub mod zone;

pub use aggregate::{aggregate, AggregateStats, CategoryTotals};
pub use profile::{PlayerShotProfile, ZoneMap, ZoneRecord};
pub use zone::{Category, Zone, ZoneKey};
