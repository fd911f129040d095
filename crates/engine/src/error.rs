//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidMonth`] and [`InvalidYear`] thrown when a period cannot be
//!   turned into a [`MonthRange`].
//! - [`CorruptRecord`] thrown when a category code is outside `1..=6`.
//! - [`DataSource`] thrown when the backing store cannot answer a query.
//!
//!  [`InvalidMonth`]: EngineError::InvalidMonth
//!  [`InvalidYear`]: EngineError::InvalidYear
//!  [`CorruptRecord`]: EngineError::CorruptRecord
//!  [`DataSource`]: EngineError::DataSource
//!  [`MonthRange`]: super::month_range::MonthRange
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),
    #[error("Invalid year: {0}")]
    InvalidYear(i32),
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
    #[error("Data source unavailable: {0}")]
    DataSource(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidMonth(a), Self::InvalidMonth(b)) => a == b,
            (Self::InvalidYear(a), Self::InvalidYear(b)) => a == b,
            (Self::CorruptRecord(a), Self::CorruptRecord(b)) => a == b,
            (Self::DataSource(a), Self::DataSource(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
