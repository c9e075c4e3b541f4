//! Greedy day packer.
//!
//! # Algorithm
//!
//! Walks tasks in prioritized order carrying `(current_day, cursor)`:
//!
//! 1. A task whose target day differs from `current_day` resets the
//!    cursor to the window start and becomes the current day.
//! 2. If the task fits in `day_end - cursor`, it is placed at the cursor
//!    and the cursor advances by its duration. A cursor at or past the
//!    break threshold then gains one break, recorded on the entry.
//! 3. Otherwise the task is rejected and the cursor stays put.
//!
//! Each step is a pure function of the previous state and one task, so
//! the pass is a fold over the task list.
//!
//! Returning to a day after leaving it starts that day over from the
//! window start; callers are expected to keep a day's tasks together.
//!
//! # Complexity
//! O(n) over the already ordered tasks.

use tracing::debug;

use crate::dispatching::Prioritizer;
use crate::models::{Rejection, Schedule, ScheduleEntry, Task, WorkdayWindow};

/// Packer state between two tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct PackerState {
    /// Target day of the previous task, `None` before the first task.
    pub current_day: Option<String>,
    /// Next free start hour on the current day.
    pub cursor: f64,
}

impl PackerState {
    /// State before any task, with the cursor at the window start.
    pub fn initial(window: &WorkdayWindow) -> Self {
        Self {
            current_day: None,
            cursor: window.day_start,
        }
    }
}

/// Result of packing one task.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The task was placed.
    Scheduled(ScheduleEntry),
    /// The task did not fit what was left of its day.
    Rejected(Rejection),
}

/// Greedy packer over a fixed daily window.
///
/// # Example
///
/// ```
/// use day_schedule::models::Task;
/// use day_schedule::scheduler::DayPacker;
///
/// let tasks = vec![
///     Task::new("B", 2.0, 1).with_target_date("01-01-2025"),
///     Task::new("A", 3.0, 2).with_target_date("01-01-2025"),
/// ];
/// let schedule = DayPacker::new().pack(&tasks);
/// assert_eq!(schedule.entries[1].start_hour, 12.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayPacker {
    window: WorkdayWindow,
}

impl DayPacker {
    /// Creates a packer over the default 10:00-22:00 window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workday window.
    pub fn with_window(mut self, window: WorkdayWindow) -> Self {
        self.window = window;
        self
    }

    /// The window in use.
    pub fn window(&self) -> &WorkdayWindow {
        &self.window
    }

    /// Packs one task onto the state, returning the next state.
    pub fn step(&self, state: &PackerState, task: &Task) -> (PackerState, StepOutcome) {
        let mut next = state.clone();

        if next.current_day.as_deref() != Some(task.target_date.as_str()) {
            next.cursor = self.window.day_start;
            next.current_day = Some(task.target_date.clone());
        }

        let remaining = self.window.remaining_from(next.cursor);

        if !task.exceeds(remaining) {
            let start = next.cursor;
            let end = start + task.time_required;
            next.cursor = end;

            let mut entry = ScheduleEntry::new(&task.name, &task.target_date, start, end);
            if self.window.needs_break(next.cursor) {
                next.cursor += self.window.break_hours;
                entry = entry.with_break_after(self.window.break_hours);
            }

            debug!(
                task = %task.name,
                day = %task.target_date,
                start,
                end,
                cursor = next.cursor,
                "scheduled"
            );

            (next, StepOutcome::Scheduled(entry))
        } else {
            debug!(
                task = %task.name,
                day = %task.target_date,
                required = task.time_required,
                remaining,
                "task does not fit the workday window"
            );

            let rejection = Rejection::new(
                &task.name,
                &task.target_date,
                task.time_required,
                remaining,
            );
            (next, StepOutcome::Rejected(rejection))
        }
    }

    /// Packs tasks in the given order.
    pub fn pack(&self, tasks: &[Task]) -> Schedule {
        let (_, schedule) = tasks.iter().fold(
            (PackerState::initial(&self.window), Schedule::new()),
            |(state, mut schedule), task| {
                let (next, outcome) = self.step(&state, task);
                match outcome {
                    StepOutcome::Scheduled(entry) => schedule.add_entry(entry),
                    StepOutcome::Rejected(rejection) => schedule.add_rejection(rejection),
                }
                (next, schedule)
            },
        );
        schedule
    }

    /// Prioritizes tasks, then packs them.
    pub fn schedule(&self, tasks: &[Task], prioritizer: &Prioritizer) -> Schedule {
        self.pack(&prioritizer.prioritize(tasks))
    }
}
