//! Parsing for raw form field values
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wayfarer_planner::{TripValidationError, parse_form_date};

static DATE_INPUT_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormInputError {
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error(transparent)]
    Date(#[from] TripValidationError),
}

/// Whether `raw` has the `YYYY-MM-DD` shape a date picker emits.
#[must_use]
pub fn is_date_input_complete(raw: &str) -> bool {
    DATE_INPUT_RE
        .as_ref()
        .is_some_and(|re| re.is_match(raw.trim()))
}

/// Parse a date picker value; empty means "not picked yet".
///
/// # Errors
/// Returns an error if the text is neither empty nor a real calendar date.
pub fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>, FormInputError> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && !is_date_input_complete(trimmed) {
        return Err(TripValidationError::InvalidDate(trimmed.to_string()).into());
    }
    Ok(parse_form_date(trimmed)?)
}

/// Parse a numeric field such as traveler count or budget.
///
/// # Errors
/// Returns an error if the value is not a non-negative integer.
pub fn parse_whole_number(raw: &str) -> Result<u64, FormInputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| FormInputError::NotANumber(trimmed.to_string()))
}

/// Today's date as `YYYY-MM-DD`, used as the date pickers' lower bound.
#[must_use]
pub fn today_iso() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.split('T').next().map(str::to_string)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_shape_check() {
        assert!(is_date_input_complete("2024-06-01"));
        assert!(is_date_input_complete(" 2024-06-01 "));
        assert!(!is_date_input_complete("2024-6-1"));
        assert!(!is_date_input_complete("01/06/2024"));
    }

    #[test]
    fn date_inputs_parse_or_explain() {
        assert_eq!(parse_date_input(""), Ok(None));
        assert_eq!(
            parse_date_input("2024-06-03"),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 3))
        );
        assert!(matches!(
            parse_date_input("2024-13-01"),
            Err(FormInputError::Date(TripValidationError::InvalidDate(_)))
        ));
        assert!(parse_date_input("tomorrow").is_err());
    }

    #[test]
    fn whole_numbers_only() {
        assert_eq!(parse_whole_number("25000"), Ok(25_000));
        assert_eq!(parse_whole_number(" 4 "), Ok(4));
        assert!(matches!(
            parse_whole_number("-3"),
            Err(FormInputError::NotANumber(_))
        ));
        assert!(parse_whole_number("").is_err());
    }

    #[test]
    fn host_has_no_clock_bound() {
        assert_eq!(today_iso(), None);
    }
}
