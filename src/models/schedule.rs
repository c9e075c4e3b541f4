//! Schedule (result) model.
//!
//! A schedule is the list of placed tasks plus the tasks that could not
//! be placed. Entries keep the order in which the packer produced them.

use serde::{Deserialize, Serialize};

/// A task placed on a day between two clock hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Name of the originating task.
    pub task_name: String,
    /// Target day, raw `DD-MM-YYYY` text.
    pub day: String,
    /// Start hour on a 24-hour clock.
    pub start_hour: f64,
    /// End hour on a 24-hour clock.
    pub end_hour: f64,
    /// Break inserted right after this entry, in hours.
    #[serde(default)]
    pub break_after: f64,
}

/// A task the packer could not fit into its day's window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    /// Name of the rejected task.
    pub task_name: String,
    /// Day the task asked for.
    pub day: String,
    /// Hours the task needed.
    pub time_required: f64,
    /// Hours left in the window when the task was considered.
    pub remaining_hours: f64,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        task_name: impl Into<String>,
        day: impl Into<String>,
        start_hour: f64,
        end_hour: f64,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            day: day.into(),
            start_hour,
            end_hour,
            break_after: 0.0,
        }
    }

    /// Records the break that followed this entry.
    pub fn with_break_after(mut self, hours: f64) -> Self {
        self.break_after = hours;
        self
    }

    /// Worked hours (end - start). Breaks are never included.
    ///
    /// Equals the task's required hours up to floating-point rounding:
    /// `end_hour` is exactly `start_hour + time_required`, but subtracting
    /// back may be off by an ulp (13.1 - 13.0 is not exactly 0.1).
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

impl Rejection {
    /// Creates a new rejection record.
    pub fn new(
        task_name: impl Into<String>,
        day: impl Into<String>,
        time_required: f64,
        remaining_hours: f64,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            day: day.into(),
            time_required,
            remaining_hours,
        }
    }

    /// User-facing warning line.
    pub fn message(&self) -> String {
        format!(
            "Task '{}' cannot be scheduled within the workday on {}.",
            self.task_name, self.day
        )
    }
}

/// Outcome of one packing pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Placed tasks, in packing order.
    pub entries: Vec<ScheduleEntry>,
    /// Tasks that did not fit, in packing order.
    pub rejections: Vec<Rejection>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Adds a rejection.
    pub fn add_rejection(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns all entries on a given day.
    pub fn entries_for_day(&self, day: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Distinct days with at least one entry, in first-seen order.
    pub fn days(&self) -> Vec<&str> {
        let mut days: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !days.contains(&e.day.as_str()) {
                days.push(&e.day);
            }
        }
        days
    }
}
