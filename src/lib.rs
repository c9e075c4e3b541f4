//! Priority-driven daily task planner.
//!
//! Collects tasks (name, hours, priority, due date, target day), orders
//! them by priority and due date, and greedily packs them into a fixed
//! working window on each target day. The result is rendered as a plain
//! text schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `ScheduleEntry`, `Rejection`,
//!   `Schedule`, `WorkdayWindow`
//! - **`dispatching`**: Ordering rules and the `Prioritizer`
//! - **`scheduler`**: The `DayPacker` fold and per-day metrics
//! - **`validation`**: Field parsers for collected answers
//! - **`input`**: Prompting through an injectable `InputProvider`
//! - **`report`**: Clock formatting and the schedule writer
//! - **`config`**: Layered configuration (CLI > env > file > defaults)
//!
//! # Example
//!
//! ```
//! use day_schedule::models::Task;
//! use day_schedule::planner::Planner;
//!
//! let tasks = vec![
//!     Task::new("A", 3.0, 2)
//!         .with_due_date("01-01-2025 10:00 AM")
//!         .with_target_date("01-01-2025"),
//!     Task::new("B", 2.0, 1)
//!         .with_due_date("01-01-2025 09:00 AM")
//!         .with_target_date("01-01-2025"),
//! ];
//! let schedule = Planner::default().plan(&tasks);
//! assert_eq!(schedule.entries[0].task_name, "B");
//! assert_eq!(schedule.entries[1].start_hour, 12.5);
//! ```

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod planner;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::Config;
pub use error::{Error, InputError, Result};
pub use planner::Planner;
