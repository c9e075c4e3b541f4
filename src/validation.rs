//! Input validation for tasks.
//!
//! Field parsers turn one line of raw text into a typed value, or report
//! why it is unusable. Dates are checked structurally only (integers in
//! the right places, hour 1-12, minute 0-59, `AM`/`PM`) and kept as the
//! text the user typed. Day and month ranges are not checked.

use thiserror::Error;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Task count is not an integer of at least 1.
    InvalidTaskCount,
    /// Task name is blank.
    EmptyName,
    /// Required time is not a positive number.
    InvalidTimeRequired,
    /// Priority is not an integer in 1..=5.
    InvalidPriority,
    /// Due date is not `DD-MM-YYYY HH:MM AM/PM`.
    InvalidDueDate,
    /// Target date is not `DD-MM-YYYY`.
    InvalidTargetDate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Lowest (most important) priority level.
pub const PRIORITY_MIN: u8 = 1;
/// Highest (least important) priority level.
pub const PRIORITY_MAX: u8 = 5;

/// Parses the number of tasks to collect (at least 1).
pub fn parse_task_count(input: &str) -> Result<usize, ValidationError> {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 => usize::try_from(n).map_err(|_| {
            ValidationError::new(ValidationErrorKind::InvalidTaskCount, "Too many tasks.")
        }),
        Ok(_) => Err(ValidationError::new(
            ValidationErrorKind::InvalidTaskCount,
            "Number of tasks should be at least 1.",
        )),
        Err(_) => Err(ValidationError::new(
            ValidationErrorKind::InvalidTaskCount,
            format!("'{}' is not a whole number.", input.trim()),
        )),
    }
}

/// Accepts a name that is not blank. The raw text is returned unchanged.
pub fn parse_name(input: &str) -> Result<String, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Task name must not be blank.",
        ));
    }
    Ok(input.to_string())
}

/// Parses required hours (finite, greater than zero).
pub fn parse_time_required(input: &str) -> Result<f64, ValidationError> {
    let hours: f64 = input.trim().parse().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidTimeRequired,
            format!("'{}' is not a number.", input.trim()),
        )
    })?;
    check_time_required(hours)?;
    Ok(hours)
}

/// Parses a priority level in 1..=5.
pub fn parse_priority(input: &str) -> Result<u8, ValidationError> {
    let level: i64 = input.trim().parse().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidPriority,
            format!("'{}' is not a whole number.", input.trim()),
        )
    })?;
    let level = u8::try_from(level).unwrap_or(0);
    check_priority(level)?;
    Ok(level)
}

/// Parses a due date `DD-MM-YYYY HH:MM AM/PM`, returning the raw text.
pub fn parse_due_date(input: &str) -> Result<String, ValidationError> {
    let malformed = || {
        ValidationError::new(
            ValidationErrorKind::InvalidDueDate,
            format!("'{input}' is not in the format DD-MM-YYYY HH:MM AM/PM."),
        )
    };

    let parts: Vec<&str> = input.split(' ').collect();
    let [date, time, meridiem] = parts.as_slice() else {
        return Err(malformed());
    };

    if !is_date(date) || !matches!(*meridiem, "AM" | "PM") {
        return Err(malformed());
    }

    let clock: Vec<&str> = time.split(':').collect();
    let [hour, minute] = clock.as_slice() else {
        return Err(malformed());
    };
    let (Some(hour), Some(minute)) = (parse_int(hour), parse_int(minute)) else {
        return Err(malformed());
    };
    if !(1..=12).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(malformed());
    }

    Ok(input.to_string())
}

/// Parses a target day `DD-MM-YYYY`, returning the raw text.
pub fn parse_target_date(input: &str) -> Result<String, ValidationError> {
    if is_date(input) {
        Ok(input.to_string())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidTargetDate,
            format!("'{input}' is not in the format DD-MM-YYYY."),
        ))
    }
}

fn check_time_required(hours: f64) -> Result<(), ValidationError> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidTimeRequired,
            "Required time should be greater than zero.",
        ))
    }
}

fn check_priority(level: u8) -> Result<(), ValidationError> {
    if (PRIORITY_MIN..=PRIORITY_MAX).contains(&level) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidPriority,
            "Priority should be between 1 and 5.",
        ))
    }
}

/// Three `-`-separated integers.
fn is_date(text: &str) -> bool {
    let parts: Vec<&str> = text.split('-').collect();
    parts.len() == 3 && parts.iter().all(|p| parse_int(p).is_some())
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_count() {
        assert_eq!(parse_task_count("3").unwrap(), 3);
        assert_eq!(parse_task_count(" 1 ").unwrap(), 1);
        assert!(parse_task_count("0").is_err());
        assert!(parse_task_count("-2").is_err());
        assert!(parse_task_count("two").is_err());
        assert!(parse_task_count("").is_err());
    }

    #[test]
    fn test_name_keeps_raw_text() {
        assert_eq!(parse_name("  Gym ").unwrap(), "  Gym ");
        let err = parse_name("   ").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyName);
    }

    #[test]
    fn test_time_required() {
        assert_eq!(parse_time_required("1.5").unwrap(), 1.5);
        assert_eq!(parse_time_required("3").unwrap(), 3.0);
        assert!(parse_time_required("0").is_err());
        assert!(parse_time_required("-1").is_err());
        assert!(parse_time_required("NaN").is_err());
        assert!(parse_time_required("inf").is_err());
        assert_eq!(
            parse_time_required("abc").unwrap_err().kind,
            ValidationErrorKind::InvalidTimeRequired
        );
    }

    #[test]
    fn test_priority() {
        assert_eq!(parse_priority("1").unwrap(), 1);
        assert_eq!(parse_priority("5").unwrap(), 5);
        assert!(parse_priority("0").is_err());
        assert!(parse_priority("6").is_err());
        assert!(parse_priority("300").is_err());
        assert!(parse_priority("-1").is_err());
        assert!(parse_priority("2.5").is_err());
    }

    #[test]
    fn test_due_date_accepted() {
        assert_eq!(
            parse_due_date("01-01-2025 10:00 AM").unwrap(),
            "01-01-2025 10:00 AM"
        );
        assert!(parse_due_date("1-1-2025 9:05 PM").is_ok());
        // Structural check only; day/month ranges are not validated.
        assert!(parse_due_date("45-13-2025 12:59 PM").is_ok());
    }

    #[test]
    fn test_due_date_rejected() {
        for bad in [
            "01-01-2025 10:00",
            "01-01-2025 10:00 am",
            "01-01-2025 13:00 PM",
            "01-01-2025 00:30 AM",
            "01-01-2025 10:60 AM",
            "01/01/2025 10:00 AM",
            "01-01 10:00 AM",
            "01-01-2025 10-00 AM",
            "01-01-2025  10:00 AM",
            "",
        ] {
            let err = parse_due_date(bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidDueDate, "{bad}");
        }
    }

    #[test]
    fn test_target_date() {
        assert_eq!(parse_target_date("04-08-2024").unwrap(), "04-08-2024");
        assert!(parse_target_date("4-8-24").is_ok());
        assert!(parse_target_date("04-08").is_err());
        assert!(parse_target_date("04-08-2024 10:00 AM").is_err());
        assert!(parse_target_date("aa-bb-cccc").is_err());
    }
}
