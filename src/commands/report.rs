//! Text and JSON rendering of shot profiles.

use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    shots::{
        aggregate,
        league::{category_average, zone_average, EfficiencyTier},
        AggregateStats, Category, CategoryTotals, PlayerShotProfile, Zone,
    },
    Result,
};

/// A profile together with its freshly computed aggregates.
#[derive(Debug, Serialize)]
pub struct PlayerReport<'a> {
    pub profile: &'a PlayerShotProfile,
    pub aggregate: AggregateStats,
}

impl<'a> PlayerReport<'a> {
    pub fn new(profile: &'a PlayerShotProfile) -> Self {
        Self {
            profile,
            aggregate: aggregate(profile),
        }
    }
}

/// Pretty JSON array of player reports.
pub fn to_json(profiles: &[PlayerShotProfile]) -> Result<String> {
    let reports: Vec<PlayerReport<'_>> = profiles.iter().map(PlayerReport::new).collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}

fn header(profile: &PlayerShotProfile) -> String {
    let mut line = format!(
        "{} ({}) Shooting Summary",
        profile.player_name(),
        profile.season()
    );
    if profile.is_synthetic() {
        match profile.fallback_reason() {
            Some(reason) => {
                let _ = write!(line, " [sample data: {reason}]");
            }
            None => line.push_str(" [sample data]"),
        }
    }
    line.push(':');
    line
}

fn category_line(label: &str, totals: &CategoryTotals, league: Option<f64>) -> String {
    let mut line = format!(
        "  {label}: {:.1}% ({}/{})",
        totals.percentage, totals.made, totals.attempted
    );
    if let Some(avg) = league {
        let _ = write!(line, " [league {avg:.1}%]");
    }
    line
}

/// Per-zone lines followed by category totals for one player.
pub fn render_summary(profile: &PlayerShotProfile) -> String {
    let mut out = header(profile);
    out.push('\n');

    for (key, record) in profile.records() {
        let _ = write!(
            out,
            "  {}: {:.1}% ({}/{})",
            key,
            record.percentage(),
            record.made(),
            record.attempted()
        );
        if let Some(zone) = key.zone() {
            let tier = EfficiencyTier::for_percentage(record.percentage());
            let _ = write!(out, " {} [league {:.1}%]", tier.label(), zone_average(zone));
        }
        out.push('\n');
    }

    let stats = aggregate(profile);
    out.push_str("  --\n");
    out.push_str(&category_line("Total FG", &stats.total, None));
    out.push('\n');
    for (label, category) in [
        ("3PT", Category::ThreePoint),
        ("2PT", Category::TwoPoint),
        ("FT", Category::FreeThrow),
    ] {
        out.push_str(&category_line(
            label,
            stats.category(category),
            Some(category_average(category)),
        ));
        out.push('\n');
    }
    out
}

/// One row per category, then one per court zone; one column per player.
pub fn render_comparison(profiles: &[PlayerShotProfile]) -> String {
    let stats: Vec<AggregateStats> = profiles.iter().map(aggregate).collect();
    let width = profiles
        .iter()
        .map(|p| p.player_name().chars().count())
        .max()
        .unwrap_or(0)
        .max(8)
        + 2;

    let mut out = format!("{:<12}", "Category");
    for profile in profiles {
        let _ = write!(out, "{:<width$}", profile.player_name());
    }
    let _ = writeln!(out, "{:<10}", "League");

    let rows: [(&str, fn(&AggregateStats) -> &CategoryTotals, Option<f64>); 4] = [
        ("Total FG%", |s| &s.total, None),
        (
            "3PT FG%",
            |s| &s.three_pt,
            Some(category_average(Category::ThreePoint)),
        ),
        (
            "2PT FG%",
            |s| &s.two_pt,
            Some(category_average(Category::TwoPoint)),
        ),
        ("FT%", |s| &s.ft, Some(category_average(Category::FreeThrow))),
    ];

    for (label, pick, league) in rows {
        let _ = write!(out, "{label:<12}");
        for player in &stats {
            let cell = format!("{:.1}%", pick(player).percentage);
            let _ = write!(out, "{cell:<width$}");
        }
        match league {
            Some(avg) => {
                let _ = writeln!(out, "{avg:.1}%");
            }
            None => {
                let _ = writeln!(out, "-");
            }
        }
    }

    // Free throws already have their own category row
    for zone in Zone::ALL.into_iter().filter(|z| *z != Zone::FreeThrows) {
        let _ = write!(out, "{:<12}", format!("{} FG%", zone.abbreviation()));
        for profile in profiles {
            let cell = profile
                .get(zone)
                .map(|record| format!("{:.1}%", record.percentage()))
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, "{cell:<width$}");
        }
        let _ = writeln!(out, "{:.1}%", zone_average(zone));
    }
    out
}
