//! Date-range checks for the planning form
use chrono::NaiveDate;
use thiserror::Error;

use crate::config::TripLimits;

const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripValidationError {
    #[error("Please select both a start and end date")]
    MissingDates,
    #[error("Trip duration must be between {min} and {max} days")]
    DurationOutOfRange { days: i64, min: u32, max: u32 },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl TripValidationError {
    /// i18n key used by the web form for this error
    #[must_use]
    pub const fn i18n_key(&self) -> &'static str {
        match self {
            Self::MissingDates => "planner.errors.missing_dates",
            Self::DurationOutOfRange { .. } => "planner.errors.duration",
            Self::InvalidDate(_) => "planner.errors.invalid_date",
        }
    }
}

/// Inclusive number of calendar days between `start` and `end`.
///
/// Negative or zero when `end` precedes `start`.
#[must_use]
pub fn trip_length(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Check both dates are present and that the inclusive length sits inside `limits`.
///
/// # Errors
///
/// Returns [`TripValidationError::MissingDates`] when either date is unset and
/// [`TripValidationError::DurationOutOfRange`] when the length falls outside the limits.
pub fn validate_dates(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    limits: &TripLimits,
) -> Result<u32, TripValidationError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(TripValidationError::MissingDates);
    };
    let days = trip_length(start, end);
    if !limits.contains(days) {
        return Err(TripValidationError::DurationOutOfRange {
            days,
            min: limits.min_days,
            max: limits.max_days,
        });
    }
    u32::try_from(days).map_err(|_| TripValidationError::DurationOutOfRange {
        days,
        min: limits.min_days,
        max: limits.max_days,
    })
}

#[must_use]
pub fn is_valid_range(start: NaiveDate, end: NaiveDate) -> bool {
    validate_dates(Some(start), Some(end), &TripLimits::default()).is_ok()
}

/// Parse the value of an `<input type="date">`.
///
/// # Errors
///
/// Returns [`TripValidationError::InvalidDate`] when the text is not `YYYY-MM-DD`.
pub fn parse_form_date(raw: &str) -> Result<Option<NaiveDate>, TripValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT)
        .map(Some)
        .map_err(|_| TripValidationError::InvalidDate(trimmed.to_string()))
}
