//! Record-level validation errors shared by every entity.
//!
//! # Invariants
//! - Validation checks a single record; cross-record references are checked
//!   at dataset load.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Required text field is empty or whitespace only.
    EmptyField(&'static str),
    /// `end_date` is earlier than `start_date`.
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` must not be empty"),
            Self::InvalidDateRange { start, end } => {
                write!(f, "end_date ({end}) must be >= start_date ({start})")
            }
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ModelValidationError> {
    if value.trim().is_empty() {
        return Err(ModelValidationError::EmptyField(field));
    }
    Ok(())
}
