//! League-average reference percentages and efficiency tiers.

use serde::Serialize;

use super::zone::{Category, Zone};

/// League-average FG% for a zone.
pub fn zone_average(zone: Zone) -> f64 {
    match zone {
        Zone::RestrictedArea => 65.0,
        Zone::PaintNonRa => 40.0,
        Zone::MidRange => 42.0,
        Zone::LeftCorner3 | Zone::RightCorner3 => 38.0,
        Zone::AboveTheBreak3 => 35.0,
        Zone::FreeThrows => category_average(Category::FreeThrow),
    }
}

/// League-average percentage for a category.
pub fn category_average(category: Category) -> f64 {
    match category {
        Category::ThreePoint => 35.0,
        Category::TwoPoint => 52.0,
        Category::FreeThrow => 78.0,
    }
}

/// Coarse grading of a shooting percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyTier {
    /// 50% and up.
    Hot,
    /// 40% up to 50%.
    Warm,
    Cold,
}

impl EfficiencyTier {
    pub fn for_percentage(pct: f64) -> Self {
        if pct >= 50.0 {
            EfficiencyTier::Hot
        } else if pct >= 40.0 {
            EfficiencyTier::Warm
        } else {
            EfficiencyTier::Cold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyTier::Hot => "hot",
            EfficiencyTier::Warm => "warm",
            EfficiencyTier::Cold => "cold",
        }
    }
}
