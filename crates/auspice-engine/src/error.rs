//! Error types for auspice-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuspiceError {
    /// The date string does not have the `D/M/YYYY` Buddhist-era shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The date string was well-formed but names an impossible calendar
    /// date (e.g., 31 April).
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, AuspiceError>;
