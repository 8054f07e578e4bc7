//! Deterministic sample profiles used whenever real data is unavailable.

use crate::{
    shots::{PlayerShotProfile, Zone, ZoneKey, ZoneMap, ZoneRecord},
    Season,
};

/// (zone, made, attempted)
type SampleRow = (Zone, u32, u32);
type SampleTable = [SampleRow; 7];

const CURRY: SampleTable = [
    (Zone::RestrictedArea, 45, 60),
    (Zone::PaintNonRa, 25, 50),
    (Zone::MidRange, 30, 80),
    (Zone::LeftCorner3, 15, 30),
    (Zone::RightCorner3, 18, 35),
    (Zone::AboveTheBreak3, 120, 300),
    (Zone::FreeThrows, 180, 200),
];

const LEBRON: SampleTable = [
    (Zone::RestrictedArea, 180, 250),
    (Zone::PaintNonRa, 80, 150),
    (Zone::MidRange, 60, 120),
    (Zone::LeftCorner3, 25, 60),
    (Zone::RightCorner3, 30, 70),
    (Zone::AboveTheBreak3, 45, 150),
    (Zone::FreeThrows, 200, 280),
];

const DURANT: SampleTable = [
    (Zone::RestrictedArea, 120, 180),
    (Zone::PaintNonRa, 40, 80),
    (Zone::MidRange, 80, 150),
    (Zone::LeftCorner3, 20, 45),
    (Zone::RightCorner3, 25, 50),
    (Zone::AboveTheBreak3, 60, 180),
    (Zone::FreeThrows, 160, 180),
];

const GIANNIS: SampleTable = [
    (Zone::RestrictedArea, 200, 280),
    (Zone::PaintNonRa, 100, 180),
    (Zone::MidRange, 20, 60),
    (Zone::LeftCorner3, 10, 30),
    (Zone::RightCorner3, 12, 35),
    (Zone::AboveTheBreak3, 25, 100),
    (Zone::FreeThrows, 300, 450),
];

const EMBIID: SampleTable = [
    (Zone::RestrictedArea, 150, 200),
    (Zone::PaintNonRa, 60, 120),
    (Zone::MidRange, 40, 100),
    (Zone::LeftCorner3, 15, 40),
    (Zone::RightCorner3, 18, 45),
    (Zone::AboveTheBreak3, 30, 120),
    (Zone::FreeThrows, 250, 300),
];

const GENERIC: SampleTable = [
    (Zone::RestrictedArea, 100, 150),
    (Zone::PaintNonRa, 50, 100),
    (Zone::MidRange, 40, 100),
    (Zone::LeftCorner3, 20, 50),
    (Zone::RightCorner3, 25, 60),
    (Zone::AboveTheBreak3, 60, 180),
    (Zone::FreeThrows, 120, 150),
];

/// Name fragments checked in order; the first pattern with any hit wins.
const PATTERNS: [(&[&str], &SampleTable); 5] = [
    (&["curry"], &CURRY),
    (&["lebron", "james"], &LEBRON),
    (&["durant"], &DURANT),
    (&["giannis", "antetokounmpo"], &GIANNIS),
    (&["embiid"], &EMBIID),
];

fn sample_table(player_name: &str) -> &'static SampleTable {
    let name = player_name.to_lowercase();
    PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|(_, table)| *table)
        .unwrap_or(&GENERIC)
}

/// Sample profile for `player_name`, marked synthetic.
///
/// Pure and infallible: the same name always yields the same zones.
pub fn generate(player_name: &str, season: Season) -> PlayerShotProfile {
    let zones: ZoneMap = sample_table(player_name)
        .iter()
        .filter_map(|(zone, made, attempted)| {
            ZoneRecord::from_counts(*made, *attempted).map(|record| (ZoneKey::Known(*zone), record))
        })
        .collect();

    PlayerShotProfile::synthetic(player_name, season, zones)
}
