//! Court zones and the keys used to store per-zone records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shot category a zone contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "3PT")]
    ThreePoint,
    #[serde(rename = "2PT")]
    TwoPoint,
    #[serde(rename = "FT")]
    FreeThrow,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::ThreePoint => "3PT",
            Category::TwoPoint => "2PT",
            Category::FreeThrow => "FT",
        }
    }
}

/// A fixed court region. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zone {
    RestrictedArea,
    PaintNonRa,
    MidRange,
    LeftCorner3,
    RightCorner3,
    AboveTheBreak3,
    FreeThrows,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::RestrictedArea,
        Zone::PaintNonRa,
        Zone::MidRange,
        Zone::LeftCorner3,
        Zone::RightCorner3,
        Zone::AboveTheBreak3,
        Zone::FreeThrows,
    ];

    /// Label as it appears in the source table.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::RestrictedArea => "Restricted Area",
            Zone::PaintNonRa => "In The Paint (Non-RA)",
            Zone::MidRange => "Mid-Range",
            Zone::LeftCorner3 => "Left Corner 3",
            Zone::RightCorner3 => "Right Corner 3",
            Zone::AboveTheBreak3 => "Above the Break 3",
            Zone::FreeThrows => "Free Throws",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Zone::RestrictedArea => "RA",
            Zone::PaintNonRa => "Paint",
            Zone::MidRange => "Mid",
            Zone::LeftCorner3 => "LC3",
            Zone::RightCorner3 => "RC3",
            Zone::AboveTheBreak3 => "ATB3",
            Zone::FreeThrows => "FT",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Zone::RestrictedArea | Zone::PaintNonRa | Zone::MidRange => Category::TwoPoint,
            Zone::LeftCorner3 | Zone::RightCorner3 | Zone::AboveTheBreak3 => Category::ThreePoint,
            Zone::FreeThrows => Category::FreeThrow,
        }
    }

    /// Match a table label against the known zones (trimmed, case-insensitive).
    pub fn from_label(label: &str) -> Option<Zone> {
        let label = label.trim();
        Zone::ALL
            .into_iter()
            .find(|z| z.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map key for a zone record: a known zone, or a label we do not recognize.
///
/// Unrecognized labels are kept verbatim and sort after every known zone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZoneKey {
    Known(Zone),
    Unrecognized(String),
}

impl ZoneKey {
    pub fn from_label(label: &str) -> Self {
        match Zone::from_label(label) {
            Some(zone) => ZoneKey::Known(zone),
            None => ZoneKey::Unrecognized(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ZoneKey::Known(zone) => zone.label(),
            ZoneKey::Unrecognized(label) => label,
        }
    }

    pub fn zone(&self) -> Option<Zone> {
        match self {
            ZoneKey::Known(zone) => Some(*zone),
            ZoneKey::Unrecognized(_) => None,
        }
    }
}

impl From<Zone> for ZoneKey {
    fn from(zone: Zone) -> Self {
        ZoneKey::Known(zone)
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the plain label so zone maps become JSON objects.
impl Serialize for ZoneKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ZoneKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ZoneKey::from_label(&label))
    }
}
