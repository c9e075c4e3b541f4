//! Greedy day packing and schedule metrics.
//!
//! `DayPacker` places prioritized tasks into a fixed daily window,
//! resetting the window for every new target day and inserting breaks
//! once the cursor passes the break threshold. It is a greedy heuristic:
//! a task that does not fit is dropped, never split or moved.
//!
//! `ScheduleSummary` reports worked hours, break hours, and window
//! utilization per day.

mod packer;
mod summary;

pub use packer::{DayPacker, PackerState, StepOutcome};
pub use summary::{DaySummary, ScheduleSummary};
