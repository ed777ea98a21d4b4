//! Derivation of the four astrological identifiers from a Gregorian date.
//!
//! Every derivation is a pure function over the date (plus, for zodiac
//! signs, the caller-supplied range table):
//!
//! - [`day_id_for`] — Thai day-of-week id with the Wednesday day/night split
//! - [`animal_id_for`] — zodiac animal year, rolling over at Songkran
//! - [`sign_id_for`] — zodiac sign by date-range lookup
//! - the month identifier is simply the calendar month number
//!
//! [`resolve_birth_date`] combines them with Buddhist-era parsing into the
//! full per-query record.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::parse_buddhist_date;
use crate::error::AuspiceError;
use crate::refdata::{ReferenceData, ZodiacSignRange};

/// The zodiac year rolls over at Songkran, April 13.
pub const SONGKRAN_MONTH: u32 = 4;
pub const SONGKRAN_DAY: u32 = 13;

// ── Day identifier ──────────────────────────────────────────────────────────

/// The eight Thai day-of-week slots.
///
/// Wednesday is split into daytime and nighttime: the day rules and stone
/// associations distinguish the two, but a bare date cannot. Deriving from a
/// date therefore always yields [`AuspiceDay::WednesdayDay`], and the match
/// engine treats a daytime-Wednesday query as covering both halves.
///
/// The numeric encoding (1 = Sunday .. 8 = Saturday, 4/5 = Wednesday
/// day/night) is the one used by the day-rule table and stone relation sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuspiceDay {
    Sunday,
    Monday,
    Tuesday,
    WednesdayDay,
    WednesdayNight,
    Thursday,
    Friday,
    Saturday,
}

impl AuspiceDay {
    /// The 1-8 day id used in the lookup tables.
    pub fn id(self) -> u32 {
        match self {
            AuspiceDay::Sunday => 1,
            AuspiceDay::Monday => 2,
            AuspiceDay::Tuesday => 3,
            AuspiceDay::WednesdayDay => 4,
            AuspiceDay::WednesdayNight => 5,
            AuspiceDay::Thursday => 6,
            AuspiceDay::Friday => 7,
            AuspiceDay::Saturday => 8,
        }
    }

    /// The day for a 1-8 id, or `None` for anything outside the range.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(AuspiceDay::Sunday),
            2 => Some(AuspiceDay::Monday),
            3 => Some(AuspiceDay::Tuesday),
            4 => Some(AuspiceDay::WednesdayDay),
            5 => Some(AuspiceDay::WednesdayNight),
            6 => Some(AuspiceDay::Thursday),
            7 => Some(AuspiceDay::Friday),
            8 => Some(AuspiceDay::Saturday),
            _ => None,
        }
    }
}

/// The Thai day slot of a date.
///
/// Wednesday always resolves to daytime; no time-of-day input is required
/// and id 5 (nighttime) is never produced here, only consumed from catalog
/// tags and day rules.
pub fn day_id_for(date: NaiveDate) -> AuspiceDay {
    match date.weekday() {
        Weekday::Sun => AuspiceDay::Sunday,
        Weekday::Mon => AuspiceDay::Monday,
        Weekday::Tue => AuspiceDay::Tuesday,
        Weekday::Wed => AuspiceDay::WednesdayDay,
        Weekday::Thu => AuspiceDay::Thursday,
        Weekday::Fri => AuspiceDay::Friday,
        Weekday::Sat => AuspiceDay::Saturday,
    }
}

// ── Animal identifier ───────────────────────────────────────────────────────

/// The zodiac animal id (1-12) of a date.
///
/// Dates before Songkran (April 13) still belong to the previous zodiac
/// year. The cycle is anchored so that `((year + 8) mod 12) + 1` yields
/// 1 = Rat .. 12 = Pig.
pub fn animal_id_for(date: NaiveDate) -> u32 {
    let mut year = date.year();
    let before_songkran = date.month() < SONGKRAN_MONTH
        || (date.month() == SONGKRAN_MONTH && date.day() < SONGKRAN_DAY);
    if before_songkran {
        year -= 1;
    }
    ((year + 8).rem_euclid(12) + 1) as u32
}

// ── Sign identifier ─────────────────────────────────────────────────────────

/// The zodiac sign id of a date, by range lookup.
///
/// Returns the id of the first matching range, or 0 when none matches —
/// "unknown", never an error. Ranges are assumed mutually exclusive; the
/// engine does not validate coverage or overlap.
///
/// A wrapping range (`start_month > end_month`) matches only on its two
/// boundary months; the twelve Thai sign ranges each span adjacent months,
/// so no wrapping range ever has a whole month strictly inside it.
pub fn sign_id_for(date: NaiveDate, signs: &[ZodiacSignRange]) -> u32 {
    let (month, day) = (date.month(), date.day());

    for sign in signs {
        let in_start = month == sign.start_month && day >= sign.start_day;
        let in_end = month == sign.end_month && day <= sign.end_day;

        let matched = if sign.start_month > sign.end_month {
            in_start || in_end
        } else {
            in_start || in_end || (month > sign.start_month && month < sign.end_month)
        };
        if matched {
            return sign.id;
        }
    }
    0
}

// ── Combined resolution ─────────────────────────────────────────────────────

/// The four identifiers derived from one date.
///
/// `sign_id` may be 0 ("unknown") when no range matched; the others are
/// always in range for a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AstroIdentifiers {
    /// Day-of-week id, 1-8 (4 = Wednesday daytime, never 5 here).
    pub day_id: u32,
    /// Calendar month number, 1-12.
    pub month_id: u32,
    /// Zodiac animal id, 1-12.
    pub animal_id: u32,
    /// Zodiac sign id, 1-12, or 0 when unknown.
    pub sign_id: u32,
}

/// The result of resolving a Buddhist-era birth date.
#[derive(Debug, Clone, Serialize)]
pub struct BirthAuspice {
    /// The Gregorian date in ISO format (YYYY-MM-DD).
    pub date_iso: String,
    /// The derived identifiers.
    pub ids: AstroIdentifiers,
}

/// Resolve a Buddhist-era date string into its astrological identifiers.
///
/// # Arguments
///
/// * `date_th` — A `D/M/YYYY` date with a Buddhist-era year (e.g. `"25/08/2530"`)
/// * `data` — The lookup bundle; only the sign ranges are consulted here
///
/// # Errors
///
/// Returns [`AuspiceError::InvalidFormat`] or [`AuspiceError::InvalidDate`]
/// exactly as [`parse_buddhist_date`] does. An unknown zodiac sign is not an
/// error; it surfaces as `sign_id == 0`.
///
/// # Examples
///
/// ```
/// use auspice_engine::astro::resolve_birth_date;
/// use auspice_engine::refdata::ReferenceData;
///
/// // 25 Aug 2530 BE = Tuesday, 25 Aug 1987 (year of the Rabbit)
/// let auspice = resolve_birth_date("25/08/2530", &ReferenceData::default()).unwrap();
/// assert_eq!(auspice.date_iso, "1987-08-25");
/// assert_eq!(auspice.ids.day_id, 3);
/// assert_eq!(auspice.ids.animal_id, 4);
/// ```
pub fn resolve_birth_date(date_th: &str, data: &ReferenceData) -> Result<BirthAuspice, AuspiceError> {
    let date = parse_buddhist_date(date_th)?;

    Ok(BirthAuspice {
        date_iso: date.format("%Y-%m-%d").to_string(),
        ids: AstroIdentifiers {
            day_id: day_id_for(date).id(),
            month_id: date.month(),
            animal_id: animal_id_for(date),
            sign_id: sign_id_for(date, &data.signs),
        },
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
