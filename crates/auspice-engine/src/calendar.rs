//! Buddhist-era calendar conversion.
//!
//! Thai date input arrives as `D/M/YYYY` where the year is in the Buddhist
//! Era (BE = Gregorian + 543). Conversion subtracts the era offset and
//! validates the result against the proleptic Gregorian calendar; month and
//! day pass through unchanged.

use chrono::{Datelike, NaiveDate};

use crate::error::AuspiceError;

/// Offset between the Buddhist Era and the Gregorian calendar.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Parse a Buddhist-era date string (`D/M/YYYY`) into a Gregorian date.
///
/// Day and month may be one or two digits; the year must be four digits.
///
/// # Errors
///
/// Returns [`AuspiceError::InvalidFormat`] when the string does not have the
/// expected shape, and [`AuspiceError::InvalidDate`] when the shape is fine
/// but the day/month combination does not exist on the calendar. Both are
/// ordinary error values; nothing here panics.
///
/// # Examples
///
/// ```
/// use auspice_engine::calendar::parse_buddhist_date;
/// use chrono::NaiveDate;
///
/// let date = parse_buddhist_date("25/08/2530").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(1987, 8, 25).unwrap());
/// ```
pub fn parse_buddhist_date(date_th: &str) -> Result<NaiveDate, AuspiceError> {
    let (day, month, year_be) = split_date_fields(date_th)
        .ok_or_else(|| AuspiceError::InvalidFormat(format!("'{}'", date_th.trim())))?;

    let year = year_be - BUDDHIST_ERA_OFFSET;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AuspiceError::InvalidDate(format!("'{}'", date_th.trim())))
}

/// The Buddhist-era year of a Gregorian date.
pub fn to_buddhist_year(date: NaiveDate) -> i32 {
    date.year() + BUDDHIST_ERA_OFFSET
}

/// Split `D/M/YYYY` into numeric fields, enforcing the digit-count shape
/// (1-2 digit day and month, exactly 4-digit year).
fn split_date_fields(s: &str) -> Option<(u32, u32, i32)> {
    let mut parts = s.trim().split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let digits = |p: &str, min: usize, max: usize| {
        (min..=max).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    Some((day.parse().ok()?, month.parse().ok()?, year.parse().ok()?))
}

// ── Tests ───────────────────────────────────────────────────────────────────
