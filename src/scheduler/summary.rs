//! Per-day schedule metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Worked hours | Sum of entry durations on the day |
//! | Break hours | Sum of breaks the packer inserted after entries |
//! | Span | First start to last end |
//! | Utilization | Worked hours / window length |

use crate::models::{Schedule, WorkdayWindow};

/// Metrics for one target day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// Target day text.
    pub day: String,
    /// Number of tasks placed on the day.
    pub tasks_scheduled: usize,
    /// Hours of task work.
    pub worked_hours: f64,
    /// Break hours inserted after entries, including after the last one.
    pub break_hours: f64,
    /// Start of the first entry.
    pub first_start: f64,
    /// End of the last entry.
    pub last_end: f64,
    /// Fraction of the window spent on tasks (0.0..1.0).
    pub utilization: f64,
}

/// Metrics for a whole packing pass.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// One summary per day, in first-seen order.
    pub days: Vec<DaySummary>,
    /// Tasks placed.
    pub scheduled: usize,
    /// Tasks rejected.
    pub rejected: usize,
}

impl ScheduleSummary {
    /// Computes metrics from a schedule and the window it was packed into.
    pub fn calculate(schedule: &Schedule, window: &WorkdayWindow) -> Self {
        let length = window.length();

        let days = schedule
            .days()
            .into_iter()
            .map(|day| {
                let entries = schedule.entries_for_day(day);
                let worked_hours: f64 = entries.iter().map(|e| e.duration_hours()).sum();
                let break_hours: f64 = entries.iter().map(|e| e.break_after).sum();
                let first_start = entries
                    .iter()
                    .map(|e| e.start_hour)
                    .fold(f64::INFINITY, f64::min);
                let last_end = entries
                    .iter()
                    .map(|e| e.end_hour)
                    .fold(f64::NEG_INFINITY, f64::max);
                let utilization = if length > 0.0 {
                    worked_hours / length
                } else {
                    0.0
                };

                DaySummary {
                    day: day.to_string(),
                    tasks_scheduled: entries.len(),
                    worked_hours,
                    break_hours,
                    first_start,
                    last_end,
                    utilization,
                }
            })
            .collect();

        Self {
            days,
            scheduled: schedule.entry_count(),
            rejected: schedule.rejections.len(),
        }
    }

    /// Mean utilization over days with work.
    pub fn avg_utilization(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.days.iter().map(|d| d.utilization).sum::<f64>() / self.days.len() as f64
    }
}
