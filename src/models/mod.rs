//! Planner domain models.
//!
//! Data types shared by the prioritizer, the day packer, and the report
//! writer. None of them carry ordering or packing behavior; that lives in
//! [`crate::dispatching`] and [`crate::scheduler`].
//!
//! | Type | Role |
//! |------|------|
//! | `Task` | User input, immutable once collected |
//! | `WorkdayWindow` | Per-day working hours and break rule |
//! | `ScheduleEntry` | A task placed on a day |
//! | `Rejection` | A task that did not fit its day |
//! | `Schedule` | Entries plus rejections of one pass |

mod calendar;
mod schedule;
mod task;

pub use calendar::{WorkdayWindow, BREAK_HOURS, BREAK_THRESHOLD, DAY_END, DAY_START};
pub use schedule::{Rejection, Schedule, ScheduleEntry};
pub use task::{Task, DUE_DATE_FORMAT};
