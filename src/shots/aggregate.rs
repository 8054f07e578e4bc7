use serde::Serialize;

use super::{
    profile::{percentage, PlayerShotProfile},
    zone::{Category, Zone},
};


/// Made/attempted totals for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub made: u64,
    pub attempted: u64,
    pub percentage: f64,
}

impl CategoryTotals {
    fn from_counts(made: u64, attempted: u64) -> Self {
        Self {
            made,
            attempted,
            percentage: percentage(made, attempted),
        }
    }
}

/// Category summaries derived from a profile. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStats {
    #[serde(rename = "3pt")]
    pub three_pt: CategoryTotals,
    #[serde(rename = "2pt")]
    pub two_pt: CategoryTotals,
    pub ft: CategoryTotals,
    /// Field goals only: 3PT + 2PT.
    pub total: CategoryTotals,
}

impl AggregateStats {
    pub fn category(&self, category: Category) -> &CategoryTotals {
        match category {
            Category::ThreePoint => &self.three_pt,
            Category::TwoPoint => &self.two_pt,
            Category::FreeThrow => &self.ft,
        }
    }
}

/// Sums widen to `u64`: at most seven `u32` zones, so they cannot overflow.
fn sum_zones(profile: &PlayerShotProfile, category: Category) -> (u64, u64) {
    Zone::ALL
        .iter()
        .filter(|zone| zone.category() == category)
        .filter_map(|zone| profile.get(*zone))
        .fold((0, 0), |(made, attempted), record| {
            (
                made + u64::from(record.made()),
                attempted + u64::from(record.attempted()),
            )
        })
}

/// Reduce a profile to 3PT, 2PT, FT and total field-goal summaries.
///
/// Unrecognized zone labels do not contribute to any category.
pub fn aggregate(profile: &PlayerShotProfile) -> AggregateStats {
    let (three_made, three_att) = sum_zones(profile, Category::ThreePoint);
    let (two_made, two_att) = sum_zones(profile, Category::TwoPoint);
    let (ft_made, ft_att) = sum_zones(profile, Category::FreeThrow);

    AggregateStats {
        three_pt: CategoryTotals::from_counts(three_made, three_att),
        two_pt: CategoryTotals::from_counts(two_made, two_att),
        ft: CategoryTotals::from_counts(ft_made, ft_att),
        total: CategoryTotals::from_counts(three_made + two_made, three_att + two_att),
    }
}
