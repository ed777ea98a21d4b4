//! Resolution of per-day lucky and unlucky color sets.
//!
//! Day rules store their color lists as comma-separated display names; this
//! module resolves a list to the corresponding color ids. Missing rules,
//! empty lists, and names absent from the color table are data-quality
//! noise, not errors — each resolves to "no colors".

use std::collections::BTreeSet;

use crate::refdata::{DayRule, ReferenceData};

/// Which color-name list on a [`DayRule`] to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Lucky,
    Unlucky,
}

impl ColorField {
    fn names_on(self, rule: &DayRule) -> &str {
        match self {
            ColorField::Lucky => &rule.lucky_color,
            ColorField::Unlucky => &rule.unlucky_color,
        }
    }
}

/// Resolve the color ids of a day's lucky or unlucky list.
///
/// Names are split on commas, trimmed, and matched exactly against the
/// color table (first match wins); empty tokens and unmatched names are
/// dropped silently, duplicates collapse.
///
/// A `day_id` of 0 means "no day constraint" and yields an empty set, as
/// does a day with no rule or an empty name list.
pub fn resolve_color_ids(day_id: u32, data: &ReferenceData, field: ColorField) -> BTreeSet<u32> {
    if day_id == 0 {
        return BTreeSet::new();
    }
    let Some(rule) = data.day_rule(day_id) else {
        return BTreeSet::new();
    };

    field
        .names_on(rule)
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| data.color_by_name(name))
        .map(|color| color.id)
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
