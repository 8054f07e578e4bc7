//! Zone table extraction from generic rows of cells.

use thiserror::Error;
use tracing::debug;

use crate::shots::{ZoneKey, ZoneMap, ZoneRecord};


/// Label of the header row, skipped during extraction.
pub const HEADER_LABEL: &str = "Zone";

/// A table reduced to rows of trimmed cell texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Why a single row was left out.
#[derive(Debug, Error, PartialEq)]
enum RowError {
    #[error("expected at least 3 cells, found {0}")]
    TooShort(usize),

    #[error("{column} cell {value:?} is not a number")]
    NotNumeric { column: &'static str, value: String },

    #[error("made ({made}) exceeds attempted ({attempted})")]
    Inconsistent { made: u32, attempted: u32 },
}

fn parse_count(cell: Option<&String>, column: &'static str) -> Result<u32, RowError> {
    let text = cell.map(|c| c.trim()).unwrap_or_default();
    if text.is_empty() {
        return Ok(0);
    }
    text.replace(',', "")
        .parse::<u32>()
        .map_err(|_| RowError::NotNumeric {
            column,
            value: text.to_string(),
        })
}

/// Validate the percentage cell. Its value is never stored; records always
/// derive their percentage from the counts.
fn check_percentage(cell: Option<&String>) -> Result<(), RowError> {
    let text = cell.map(|c| c.trim()).unwrap_or_default();
    if text.is_empty() {
        return Ok(());
    }
    let not_numeric = || RowError::NotNumeric {
        column: "percentage",
        value: text.to_string(),
    };
    let value = text
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .map_err(|_| not_numeric())?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(not_numeric());
    }
    Ok(())
}

fn parse_row(row: &[String]) -> Result<ZoneRecord, RowError> {
    if row.len() < 3 {
        return Err(RowError::TooShort(row.len()));
    }
    let made = parse_count(row.get(1), "made")?;
    let attempted = parse_count(row.get(2), "attempted")?;
    check_percentage(row.get(3))?;

    ZoneRecord::from_counts(made, attempted).ok_or(RowError::Inconsistent { made, attempted })
}

/// Turn table rows into zone records.
///
/// The first cell is the zone label, then made, attempted, percentage. A row
/// is taken whole or not at all: any malformed cell drops the entire row.
/// Labels outside the known zones are kept verbatim; a repeated label keeps
/// the last row.
pub fn extract(table: &RawTable) -> ZoneMap {
    let mut zones = ZoneMap::new();

    for (index, row) in table.rows().iter().enumerate() {
        let label = row.first().map(|c| c.trim()).unwrap_or_default();
        if label.is_empty() || label == HEADER_LABEL {
            continue;
        }

        match parse_row(row) {
            Ok(record) => {
                zones.insert(ZoneKey::from_label(label), record);
            }
            Err(reason) => debug!(row = index, label, %reason, "skipping shooting row"),
        }
    }

    zones
}
