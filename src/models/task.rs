//! Task model.
//!
//! A task is one unit of user work: how long it takes, how important it
//! is, when it is due, and which calendar day it should be worked on.
//!
//! Dates are kept as the raw text the user typed. Ordering by due date
//! compares that text directly unless chronological ordering is
//! requested (see [`crate::dispatching::DueDateOrder`]).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of a due date: `DD-MM-YYYY HH:MM AM/PM`.
pub const DUE_DATE_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// A task to be placed on a day.
///
/// Built once by the collector and never modified afterwards; the
/// prioritizer and the day packer only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Display name (non-blank).
    pub name: String,
    /// Hours of work required (> 0).
    pub time_required: f64,
    /// Priority level 1-5, 1 = highest.
    pub priority: u8,
    /// Due date-time, raw `DD-MM-YYYY HH:MM AM/PM` text.
    pub due_date: String,
    /// Day the task should be worked on, raw `DD-MM-YYYY` text.
    pub target_date: String,
}

impl Task {
    /// Creates a task with no dates set.
    pub fn new(name: impl Into<String>, time_required: f64, priority: u8) -> Self {
        Self {
            name: name.into(),
            time_required,
            priority,
            due_date: String::new(),
            target_date: String::new(),
        }
    }

    /// Sets the due date text.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Sets the target (work) day text.
    pub fn with_target_date(mut self, target_date: impl Into<String>) -> Self {
        self.target_date = target_date.into();
        self
    }

    /// Parses the due date as a calendar date-time.
    ///
    /// Returns `None` when the text is structurally valid but not a real
    /// date (e.g. `31-02-2025`), or is not in [`DUE_DATE_FORMAT`] at all.
    pub fn due_date_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.due_date.trim(), DUE_DATE_FORMAT).ok()
    }

    /// Whether the task could never fit a window of `window_hours`.
    #[inline]
    pub fn exceeds(&self, window_hours: f64) -> bool {
        self.time_required > window_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_task_builder() {
        let task = Task::new("Report", 2.5, 1)
            .with_due_date("05-08-2024 09:30 PM")
            .with_target_date("04-08-2024");

        assert_eq!(task.name, "Report");
        assert_eq!(task.time_required, 2.5);
        assert_eq!(task.priority, 1);
        assert_eq!(task.due_date, "05-08-2024 09:30 PM");
        assert_eq!(task.target_date, "04-08-2024");
    }

    #[test]
    fn test_due_date_time() {
        let task = Task::new("A", 1.0, 3).with_due_date("07-08-2024 11:15 PM");
        let dt = task.due_date_time().unwrap();
        assert_eq!(dt.day(), 7);
        assert_eq!(dt.month(), 8);
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 15);
    }

    #[test]
    fn test_due_date_time_unparsable() {
        assert!(Task::new("A", 1.0, 3)
            .with_due_date("31-02-2025 10:00 AM")
            .due_date_time()
            .is_none());
        assert!(Task::new("A", 1.0, 3).due_date_time().is_none());
    }

    #[test]
    fn test_exceeds() {
        let task = Task::new("Long", 13.0, 1);
        assert!(task.exceeds(12.0));
        assert!(!Task::new("Full", 12.0, 1).exceeds(12.0));
    }

    #[test]
    fn test_task_deserialize() {
        let json = r#"{
            "name": "Gym",
            "time_required": 1.5,
            "priority": 4,
            "due_date": "01-01-2025 06:00 PM",
            "target_date": "01-01-2025"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.name, "Gym");
        assert_eq!(task.priority, 4);
        assert_eq!(task.target_date, "01-01-2025");
    }
}
