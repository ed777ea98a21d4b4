//! Multi-axis catalog filtering and unlucky-color annotation.
//!
//! A query constrains up to six independent axes. Lucky colors are an OR
//! gate (the stone must carry at least one of them); every other
//! constrained axis must be satisfied exactly (AND), except that a
//! daytime-Wednesday day constraint (id 4) also accepts stones tagged for
//! nighttime Wednesday (id 5).
//!
//! Filtering is a stable single pass: output preserves catalog order, and
//! an empty query returns the catalog unchanged. Annotation happens on the
//! result copies only — the source catalog is never touched.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::astro::resolve_birth_date;
use crate::catalog::Stone;
use crate::colors::{resolve_color_ids, ColorField};
use crate::error::AuspiceError;
use crate::refdata::ReferenceData;

/// Day id for daytime Wednesday; queries for it also match [`WEDNESDAY_NIGHT`].
const WEDNESDAY_DAY: u32 = 4;
const WEDNESDAY_NIGHT: u32 = 5;

// ── Query ───────────────────────────────────────────────────────────────────

/// Per-axis requirements for a catalog query.
///
/// An id of 0 leaves that axis unconstrained; an empty
/// `lucky_color_ids` set disables the lucky-color gate. The default value
/// constrains nothing and matches the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisQuery {
    pub group_id: u32,
    pub day_id: u32,
    pub month_id: u32,
    pub animal_id: u32,
    pub sign_id: u32,
    /// Acceptable lucky colors; when non-empty the stone must carry at
    /// least one of them (OR within the set, but a hard gate overall).
    pub lucky_color_ids: BTreeSet<u32>,
}

impl AxisQuery {
    fn matches(&self, stone: &Stone) -> bool {
        // Lucky-color gate first: OR within the set, mandatory when present
        if !self.lucky_color_ids.is_empty()
            && stone.color_ids.is_disjoint(&self.lucky_color_ids)
        {
            return false;
        }

        if self.day_id != 0 && !day_axis_matches(self.day_id, &stone.good_days) {
            return false;
        }

        let exact = [
            (self.group_id, &stone.group_ids),
            (self.month_id, &stone.good_months),
            (self.animal_id, &stone.good_zodiac_animals),
            (self.sign_id, &stone.good_zodiac_signs),
        ];
        exact
            .iter()
            .all(|(required, set)| *required == 0 || set.contains(required))
    }
}

/// Day-axis membership with the Wednesday union rule: a daytime-Wednesday
/// requirement accepts stones tagged for either half of the day.
fn day_axis_matches(required: u32, good_days: &BTreeSet<u32>) -> bool {
    if required == WEDNESDAY_DAY {
        good_days.contains(&WEDNESDAY_DAY) || good_days.contains(&WEDNESDAY_NIGHT)
    } else {
        good_days.contains(&required)
    }
}

/// Filter a catalog against an axis query.
///
/// Returns references to the matching stones in catalog order. A stone with
/// an empty relation set on a constrained axis never matches that axis; a
/// fully unconstrained query returns every stone.
pub fn filter_stones<'a>(catalog: &'a [Stone], query: &AxisQuery) -> Vec<&'a Stone> {
    catalog.iter().filter(|stone| query.matches(stone)).collect()
}

// ── Unlucky annotation ──────────────────────────────────────────────────────

/// The outcome of checking one stone's colors against a day's unlucky set.
#[derive(Debug, Clone, Serialize)]
pub struct UnluckyCheck {
    pub is_unlucky: bool,
    /// Display names of the offending colors, joined with `", "`; empty
    /// when the stone is clean.
    pub colors_found: String,
}

impl UnluckyCheck {
    fn clean() -> Self {
        UnluckyCheck {
            is_unlucky: false,
            colors_found: String::new(),
        }
    }
}

/// Check whether a stone's colors include any of a day's unlucky colors.
///
/// A `day_id` of 0 or a day with no resolvable unlucky colors always comes
/// back clean.
pub fn check_unlucky_color(
    color_ids: &BTreeSet<u32>,
    day_id: u32,
    data: &ReferenceData,
) -> UnluckyCheck {
    let unlucky = resolve_color_ids(day_id, data, ColorField::Unlucky);
    check_against_set(color_ids, &unlucky, data)
}

fn check_against_set(
    color_ids: &BTreeSet<u32>,
    unlucky: &BTreeSet<u32>,
    data: &ReferenceData,
) -> UnluckyCheck {
    if unlucky.is_empty() {
        return UnluckyCheck::clean();
    }

    let found: Vec<String> = color_ids
        .intersection(unlucky)
        .map(|&id| {
            data.color_name(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("ID:{id}"))
        })
        .collect();

    UnluckyCheck {
        is_unlucky: !found.is_empty(),
        colors_found: found.join(", "),
    }
}

/// A matched stone with its unlucky annotation.
///
/// `stone` is a copy of the catalog entry; annotating never mutates the
/// caller's snapshot and never removes anything from the result list —
/// whether to hide unlucky stones is the caller's presentation decision.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedStone {
    pub stone: Stone,
    pub is_unlucky: bool,
    pub unlucky_note: String,
}

impl MatchedStone {
    fn unannotated(stone: Stone) -> Self {
        MatchedStone {
            stone,
            is_unlucky: false,
            unlucky_note: String::new(),
        }
    }
}

/// Tag each matched stone with its unlucky-color status for `day_id`.
///
/// With no day constraint (`day_id == 0`) every annotation is cleared.
pub fn annotate_unlucky(matches: &mut [MatchedStone], day_id: u32, data: &ReferenceData) {
    let unlucky = resolve_color_ids(day_id, data, ColorField::Unlucky);
    for matched in matches {
        let check = check_against_set(&matched.stone.color_ids, &unlucky, data);
        matched.is_unlucky = check.is_unlucky;
        matched.unlucky_note = check.colors_found;
    }
}

// ── Query operations ────────────────────────────────────────────────────────

/// The result of a birth-date search: the resolved auspice profile plus the
/// annotated matches.
#[derive(Debug, Clone, Serialize)]
pub struct DateSearchResult {
    pub auspice: crate::astro::BirthAuspice,
    pub stones: Vec<MatchedStone>,
    /// How many of the matches carry an unlucky color for the birth day.
    pub unlucky_count: usize,
}

/// Match a catalog against a Buddhist-era birth date.
///
/// Derives the four identifiers from the date, resolves the birth day's
/// lucky colors as the OR gate, filters on all axes, and annotates each
/// match with its unlucky-color status.
///
/// # Arguments
///
/// * `catalog` — The stone snapshot, matched in order
/// * `date_th` — A `D/M/YYYY` Buddhist-era date string
/// * `data` — The lookup tables
///
/// # Errors
///
/// Returns [`AuspiceError::InvalidFormat`] or [`AuspiceError::InvalidDate`]
/// when the date string cannot be resolved; matching itself cannot fail.
///
/// # Examples
///
/// ```
/// use auspice_engine::matcher::search_by_birth_date;
/// use auspice_engine::refdata::ReferenceData;
///
/// // Empty catalog, empty tables: resolves the date, matches nothing
/// let result = search_by_birth_date(&[], "25/08/2530", &ReferenceData::default()).unwrap();
/// assert_eq!(result.auspice.date_iso, "1987-08-25");
/// assert!(result.stones.is_empty());
/// ```
pub fn search_by_birth_date(
    catalog: &[Stone],
    date_th: &str,
    data: &ReferenceData,
) -> Result<DateSearchResult, AuspiceError> {
    let auspice = resolve_birth_date(date_th, data)?;
    let ids = auspice.ids;

    let query = AxisQuery {
        group_id: 0,
        day_id: ids.day_id,
        month_id: ids.month_id,
        animal_id: ids.animal_id,
        sign_id: ids.sign_id,
        lucky_color_ids: resolve_color_ids(ids.day_id, data, ColorField::Lucky),
    };

    let mut stones: Vec<MatchedStone> = filter_stones(catalog, &query)
        .into_iter()
        .cloned()
        .map(MatchedStone::unannotated)
        .collect();
    annotate_unlucky(&mut stones, ids.day_id, data);
    let unlucky_count = stones.iter().filter(|m| m.is_unlucky).count();

    Ok(DateSearchResult {
        auspice,
        stones,
        unlucky_count,
    })
}

/// Match a catalog by name substring.
///
/// The term is matched case-insensitively against each stone's Thai name,
/// English name, and other-names list. An empty (or all-whitespace) term
/// constrains nothing and returns the whole catalog, in order.
pub fn search_by_name<'a>(catalog: &'a [Stone], term: &str) -> Vec<&'a Stone> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|stone| {
            stone.thai_name.to_lowercase().contains(&term)
                || stone.english_name.to_lowercase().contains(&term)
                || stone.other_names.to_lowercase().contains(&term)
        })
        .collect()
}

/// Match a catalog against ad-hoc axis conditions.
///
/// When the query constrains a day and supplies no lucky colors of its own,
/// the day's lucky colors are resolved and applied as the OR gate, and the
/// results are annotated against that day — the same treatment a birth-date
/// search gives its derived day. A group-only or fully empty query skips
/// both steps.
pub fn search_by_conditions(
    catalog: &[Stone],
    query: &AxisQuery,
    data: &ReferenceData,
) -> Vec<MatchedStone> {
    let mut effective = query.clone();
    if effective.day_id != 0 && effective.lucky_color_ids.is_empty() {
        effective.lucky_color_ids = resolve_color_ids(effective.day_id, data, ColorField::Lucky);
    }

    let mut stones: Vec<MatchedStone> = filter_stones(catalog, &effective)
        .into_iter()
        .cloned()
        .map(MatchedStone::unannotated)
        .collect();
    annotate_unlucky(&mut stones, effective.day_id, data);
    stones
}

// ── Tests ───────────────────────────────────────────────────────────────────
