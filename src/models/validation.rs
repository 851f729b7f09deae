//! Field checks applied at the API edge, before any record is built.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use uuid::Uuid;
use crate::errors::{AppError, AppResult};

pub fn not_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Checks the address shape and returns it with the domain lowercased; the
/// local part is kept as given.
pub fn email(field: &str, value: &str) -> AppResult<String> {
    let invalid = || AppError::Validation(format!("{} is not a valid email address", field));

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(format!("{}@{}", local, domain.to_lowercase()))
}

pub fn non_negative(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!("{} must be a number >= 0", field)));
    }
    Ok(())
}

pub fn hours_worked(value: f64) -> AppResult<()> {
    if !value.is_finite() || !(0.0..=24.0).contains(&value) {
        return Err(AppError::Validation("hours_worked must be between 0 and 24".into()));
    }
    Ok(())
}

/// Accepts a plain `YYYY-MM-DD` date or an ISO date-time, keeping only the date part.
pub fn iso_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .ok_or_else(|| AppError::Validation(format!("{} is not a valid ISO date", field)))
}

/// Normalizes an id taken from a URL path; anything that is not a UUID is malformed.
pub fn record_id(kind: &str, raw: &str) -> AppResult<String> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::InvalidId(format!("Invalid {} id", kind)))
}
