//! Caller-owned reference data for auspice lookups.
//!
//! The lookup tables (days, colors, months, zodiac animals, zodiac signs,
//! stone groups) are static reference data owned by the caller and passed by
//! reference into every engine call — the engine holds no state and never
//! mutates them. Field names follow the JSON shapes the tables are normally
//! stored in, so a [`ReferenceData`] bundle deserializes directly.
//!
//! The engine does not validate referential integrity: a relation id with no
//! table entry simply resolves to no name, and a color name with no table
//! entry resolves to no id.

use serde::{Deserialize, Serialize};

// ── Lookup records ──────────────────────────────────────────────────────────

/// Per-day auspice rule, keyed by day id 1-8 (1 = Sunday .. 8 = Saturday,
/// with 4/5 splitting daytime/nighttime Wednesday).
///
/// The color fields are comma-separated lists of color display names, to be
/// resolved to ids against the color table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRule {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub lucky_color: String,
    #[serde(default)]
    pub unlucky_color: String,
}

/// A catalog color: id, display name, optional hex code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub hex: Option<String>,
}

/// A calendar month entry (id equals the month number, 1-12).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthEntry {
    pub id: u32,
    pub name: String,
}

/// A zodiac animal year (1 = Rat .. 12 = Pig in the Thai cycle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacAnimal {
    pub id: u32,
    pub thai_name: String,
    #[serde(default)]
    pub english_name: Option<String>,
}

/// A zodiac sign with its date range.
///
/// A range is *wrapping* when `start_month > end_month` (it spans the year
/// boundary, e.g. Dec 16 - Jan 14).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacSignRange {
    pub id: u32,
    pub name: String,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

/// A stone group (quartz, beryl, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoneGroup {
    pub id: u32,
    pub name: String,
}

// ── Bundle ──────────────────────────────────────────────────────────────────

/// The full set of lookup tables, supplied wholesale by the caller.
///
/// Read-only for the duration of any engine call; concurrent queries over
/// the same bundle are safe as long as the caller does not mutate it
/// mid-query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub days: Vec<DayRule>,
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
    #[serde(default)]
    pub months: Vec<MonthEntry>,
    #[serde(default)]
    pub animals: Vec<ZodiacAnimal>,
    #[serde(default)]
    pub signs: Vec<ZodiacSignRange>,
    #[serde(default)]
    pub groups: Vec<StoneGroup>,
}

impl ReferenceData {
    /// The day rule for a day id, if the table has one.
    pub fn day_rule(&self, day_id: u32) -> Option<&DayRule> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// The first color whose display name matches exactly.
    pub fn color_by_name(&self, name: &str) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// The display name of a color id.
    pub fn color_name(&self, color_id: u32) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.id == color_id)
            .map(|c| c.name.as_str())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
