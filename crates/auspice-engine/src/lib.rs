//! # auspice-engine
//!
//! Thai astrological resolution and matching for a stone catalog.
//!
//! The engine converts a Buddhist-era birth date into four astrological
//! identifiers (day of week with the daytime/nighttime Wednesday split,
//! month, zodiac animal with the Songkran rollover, zodiac sign), resolves
//! the day's lucky and unlucky color sets, and filters a caller-supplied
//! catalog with AND-across-axes / OR-within-lucky-colors semantics.
//!
//! Everything is a pure function over in-memory snapshots: the caller owns
//! the catalog and the lookup tables and passes them into every call. No
//! I/O, no global state, no reload protocol. Malformed reference data
//! degrades a result (empty set, id 0) instead of failing the query; only a
//! bad date string is an error, and always an error value, never a panic.
//!
//! ## Modules
//!
//! - [`calendar`] — Buddhist-era date string → Gregorian [`chrono::NaiveDate`]
//! - [`astro`] — date → day/month/animal/sign identifiers
//! - [`refdata`] — caller-owned lookup tables (days, colors, signs, ...)
//! - [`catalog`] — stone records and tolerant relation-set parsing
//! - [`colors`] — day rule color-name lists → color id sets
//! - [`matcher`] — multi-axis filtering, unlucky annotation, query operations
//! - [`error`] — error types

pub mod astro;
pub mod calendar;
pub mod catalog;
pub mod colors;
pub mod error;
pub mod matcher;
pub mod refdata;

pub use astro::{
    animal_id_for, day_id_for, resolve_birth_date, sign_id_for, AstroIdentifiers, AuspiceDay,
    BirthAuspice,
};
pub use calendar::{parse_buddhist_date, to_buddhist_year};
pub use catalog::{parse_id_set, Stone, StoneRecord};
pub use colors::{resolve_color_ids, ColorField};
pub use error::AuspiceError;
pub use matcher::{
    annotate_unlucky, check_unlucky_color, filter_stones, search_by_birth_date,
    search_by_conditions, search_by_name, AxisQuery, DateSearchResult, MatchedStone, UnluckyCheck,
};
pub use refdata::{
    ColorEntry, DayRule, MonthEntry, ReferenceData, StoneGroup, ZodiacAnimal, ZodiacSignRange,
};
