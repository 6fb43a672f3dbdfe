//! Payload validation shared by the activity and participant stores.
//!
//! All checks run before any store access; a failure is a `Validation` error
//! and persists nothing.

use crate::errors::AppError;
use crate::models::ActivityPayload;

/// Rejects empty values for a required field.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// `YYYY-MM-DD` syntax check. Syntax only: "2024-13-40" passes; calendar
/// validity is not enforced.
pub fn is_valid_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| b[i].is_ascii_digit())
}

/// Duration is a string-encoded positive integer (minutes).
pub fn is_valid_duration(s: &str) -> bool {
    s.parse::<u64>().map(|n| n > 0).unwrap_or(false)
}

/// Full create-time check for an activity payload: every field present and
/// non-empty, date syntactically well-formed, duration a positive integer.
pub fn validate_activity_payload(payload: &ActivityPayload) -> Result<(), AppError> {
    require_non_empty("activityType", &payload.activity_type)?;
    require_non_empty("description", &payload.description)?;
    require_non_empty("date", &payload.date)?;
    require_non_empty("time", &payload.time)?;
    require_non_empty("duration", &payload.duration)?;

    if !is_valid_date(&payload.date) {
        return Err(AppError::Validation(format!(
            "date '{}' must match YYYY-MM-DD",
            payload.date
        )));
    }
    if !is_valid_duration(&payload.duration) {
        return Err(AppError::Validation(format!(
            "duration '{}' must be a positive integer number of minutes",
            payload.duration
        )));
    }
    Ok(())
}
