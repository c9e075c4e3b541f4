//! Ordering rules and the prioritizer.
//!
//! Tasks are ordered by a chain of pairwise rules: the first rule that
//! tells two tasks apart decides, later rules only break ties. The
//! standard chain is priority (1 first) then due date.
//!
//! # Usage
//!
//! ```
//! use day_schedule::dispatching::{DueDateOrder, Prioritizer};
//! use day_schedule::models::Task;
//!
//! let tasks = vec![
//!     Task::new("A", 3.0, 2).with_due_date("01-01-2025 10:00 AM"),
//!     Task::new("B", 2.0, 1).with_due_date("01-01-2025 09:00 AM"),
//! ];
//! let ordered = Prioritizer::standard(DueDateOrder::Literal).prioritize(&tasks);
//! assert_eq!(ordered[0].name, "B");
//! ```

mod engine;
pub mod rules;

pub use engine::Prioritizer;

use crate::models::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

/// A pairwise ordering rule.
///
/// `Ordering::Less` means `a` is worked on before `b`. Rules must be
/// total orders so that sorting with them is well defined.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY").
    fn name(&self) -> &'static str;

    /// Compares two tasks.
    fn compare(&self, a: &Task, b: &Task) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// How due dates are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueDateOrder {
    /// Byte-wise comparison of the raw `DD-MM-YYYY HH:MM AM/PM` text.
    ///
    /// Day digits lead, so `31-12-2024` sorts after `01-01-2025`.
    #[default]
    Literal,
    /// Comparison of the parsed date-time. Unparsable dates sort last.
    Chronological,
}
