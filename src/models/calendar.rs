//! Workday window model.
//!
//! Every distinct target day gets the same fixed window of working
//! hours. Hours are real numbers on a 24-hour clock (10.5 = 10:30).
//!
//! # Break rule
//! After each scheduled task, if the cursor sits at or past
//! `break_threshold`, `break_hours` are added before the next task.
//! The check repeats after every task, so a day accrues one break per
//! task finished past the threshold.

use serde::{Deserialize, Serialize};

/// Default window start (10:00).
pub const DAY_START: f64 = 10.0;
/// Default window end (22:00).
pub const DAY_END: f64 = 22.0;
/// Default cursor hour from which breaks are inserted (noon).
pub const BREAK_THRESHOLD: f64 = 12.0;
/// Default break length in hours.
pub const BREAK_HOURS: f64 = 0.5;

/// Per-day working window `[day_start, day_end)` plus the break rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdayWindow {
    /// First schedulable hour of each day.
    pub day_start: f64,
    /// Hour by which every task must have finished.
    pub day_end: f64,
    /// Cursor hour at or after which a break follows each task.
    pub break_threshold: f64,
    /// Length of each inserted break in hours.
    pub break_hours: f64,
}

impl Default for WorkdayWindow {
    fn default() -> Self {
        Self::new(DAY_START, DAY_END)
    }
}

impl WorkdayWindow {
    /// Creates a window with the default break rule.
    pub fn new(day_start: f64, day_end: f64) -> Self {
        Self {
            day_start,
            day_end,
            break_threshold: BREAK_THRESHOLD,
            break_hours: BREAK_HOURS,
        }
    }

    /// Sets the break rule.
    pub fn with_break(mut self, threshold: f64, hours: f64) -> Self {
        self.break_threshold = threshold;
        self.break_hours = hours;
        self
    }

    /// Full length of the window in hours.
    #[inline]
    pub fn length(&self) -> f64 {
        self.day_end - self.day_start
    }

    /// Hours left between `cursor` and the end of the day.
    #[inline]
    pub fn remaining_from(&self, cursor: f64) -> f64 {
        self.day_end - cursor
    }

    /// Whether a cursor position triggers a break.
    #[inline]
    pub fn needs_break(&self, cursor: f64) -> bool {
        cursor >= self.break_threshold
    }

    /// Checks that the window is usable.
    ///
    /// Returns a description of the first problem found.
    pub fn check(&self) -> Result<(), String> {
        if !self.day_start.is_finite() || !self.day_end.is_finite() {
            return Err("workday bounds must be finite".to_string());
        }
        if self.day_end <= self.day_start {
            return Err(format!(
                "workday end ({}) must be after start ({})",
                self.day_end, self.day_start
            ));
        }
        if !(0.0..=24.0).contains(&self.day_start) || !(0.0..=24.0).contains(&self.day_end) {
            return Err("workday bounds must lie within 0-24".to_string());
        }
        if !self.break_hours.is_finite() || self.break_hours < 0.0 {
            return Err(format!(
                "break length must be non-negative, got {}",
                self.break_hours
            ));
        }
        Ok(())
    }
}
