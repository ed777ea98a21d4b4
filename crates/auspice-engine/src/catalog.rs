//! Stone catalog types and relation-set ingestion.
//!
//! At the storage boundary each relation field is a whitespace-separated
//! string of decimal ids ("1 3 12"). Real data contains malformed tokens,
//! so parsing is tolerant: non-numeric tokens are dropped silently.
//! [`parse_id_set`] is the single choke point for that behavior, and a
//! [`StoneRecord`] is converted to a typed [`Stone`] exactly once at
//! ingestion rather than re-parsed on every filter pass.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Parse a whitespace-separated id list into a set.
///
/// Tokens that are not plain runs of decimal digits are skipped (a signed
/// token like `+5` is not an id); duplicates
/// collapse. An empty or all-garbage string yields an empty set, which the
/// match engine treats as "matches nothing" on any constrained axis.
///
/// # Examples
///
/// ```
/// use auspice_engine::catalog::parse_id_set;
///
/// let ids = parse_id_set("1 3  5 x 3");
/// assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub fn parse_id_set(ids: &str) -> BTreeSet<u32> {
    ids.split_whitespace()
        .filter(|tok| tok.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|tok| tok.parse::<u32>().ok())
        .collect()
}

// ── Catalog records ─────────────────────────────────────────────────────────

/// A stone as stored: identity and descriptive fields plus string-encoded
/// relation id lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoneRecord {
    pub id: u32,
    pub thai_name: String,
    pub english_name: String,
    #[serde(default)]
    pub other_names: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub group_ids: String,
    #[serde(default)]
    pub color_ids: String,
    #[serde(default)]
    pub good_days: String,
    #[serde(default)]
    pub good_months: String,
    #[serde(default)]
    pub good_zodiac_animals: String,
    #[serde(default)]
    pub good_zodiac_signs: String,
}

/// A stone with its relation sets parsed into typed form.
///
/// The engine never mutates these fields; query results carry clones with
/// annotations attached alongside, never on the source catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stone {
    pub id: u32,
    pub thai_name: String,
    pub english_name: String,
    pub other_names: String,
    pub description: String,
    pub group_ids: BTreeSet<u32>,
    pub color_ids: BTreeSet<u32>,
    pub good_days: BTreeSet<u32>,
    pub good_months: BTreeSet<u32>,
    pub good_zodiac_animals: BTreeSet<u32>,
    pub good_zodiac_signs: BTreeSet<u32>,
}

impl Stone {
    /// Ingest a stored record, parsing every relation field through
    /// [`parse_id_set`].
    pub fn from_record(record: StoneRecord) -> Self {
        Stone {
            group_ids: parse_id_set(&record.group_ids),
            color_ids: parse_id_set(&record.color_ids),
            good_days: parse_id_set(&record.good_days),
            good_months: parse_id_set(&record.good_months),
            good_zodiac_animals: parse_id_set(&record.good_zodiac_animals),
            good_zodiac_signs: parse_id_set(&record.good_zodiac_signs),
            id: record.id,
            thai_name: record.thai_name,
            english_name: record.english_name,
            other_names: record.other_names,
            description: record.description,
        }
    }
}

impl From<StoneRecord> for Stone {
    fn from(record: StoneRecord) -> Self {
        Stone::from_record(record)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
